//! STOKER - a fixed-size worker pool over a shared FIFO task queue.
//!
//! A small thread-pool library: N worker threads block on a condition
//! variable and drain a mutex-guarded queue of boxed closures. Submission
//! is FIFO and never blocks on capacity; shutdown is either graceful (join
//! every worker, in-flight tasks finish) or forced (detach, do not wait).
//! Pending tasks still queued at shutdown are discarded, never executed.
//!
//! # Quick Start
//!
//! ```no_run
//! use stoker::prelude::*;
//!
//! let config = Config::builder().num_threads(4).build().unwrap();
//! let mut pool = WorkerPool::new(&config).unwrap();
//!
//! for i in 0..8 {
//!     pool.execute(move || println!("task {i}")).unwrap();
//! }
//!
//! // graceful: lets in-flight tasks finish, drops anything still queued
//! pool.shutdown(false);
//! ```
//!
//! A process-wide pool is also available through [`init`] / [`spawn`] /
//! [`shutdown`] for programs that want a single implicit pool.

// Lint configuration
#![warn(missing_docs, missing_debug_implementations)]
#![allow(dead_code)]

pub mod config;
pub mod error;
pub mod executor;
pub mod prelude;
pub mod runtime;

// Re-export key types at crate root
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use executor::{Task, TaskId, WorkerPool};
pub use runtime::{init, init_with_config, shutdown, spawn};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_pool_runs_submitted_tasks() {
        let config = Config::builder().num_threads(2).build().unwrap();
        let mut pool = WorkerPool::new(&config).unwrap();

        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = std::sync::mpsc::channel();

        for _ in 0..10 {
            let counter = counter.clone();
            let tx = tx.clone();
            pool.execute(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                tx.send(()).unwrap();
            })
            .unwrap();
        }

        for _ in 0..10 {
            rx.recv().unwrap();
        }
        pool.shutdown(false);

        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }
}
