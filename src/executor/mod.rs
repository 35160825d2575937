//! Task execution infrastructure.
//!
//! This module provides the worker pool, its FIFO task queue, and the
//! worker loop that drains it.

pub mod pool;
pub mod queue;
pub mod task;
pub mod worker;

pub use pool::WorkerPool;
pub use task::{Task, TaskId};
pub use worker::WorkerState;
