use super::queue::TaskQueue;
use super::task::Task;
use super::worker::{Worker, WorkerId, WorkerState};
use crate::config::Config;
use crate::error::{Error, Result};
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// State guarded by the pool mutex: the queue and the shutdown flag are the
/// only shared mutable state in the system.
pub(crate) struct PoolState {
    pub queue: TaskQueue,
    pub running: bool,
}

pub(crate) struct Shared {
    pub state: Mutex<PoolState>,
    pub available: Condvar,
}

struct WorkerHandle {
    id: WorkerId,
    thread: Option<JoinHandle<()>>,
    state: Arc<WorkerState>,
}

/// A fixed-size pool of worker threads draining a shared FIFO queue.
///
/// Workers block on a condition variable while the queue is empty and are
/// woken one at a time as tasks arrive. [`WorkerPool::shutdown`] stops the
/// pool exactly once per instance; there is no restart.
pub struct WorkerPool {
    workers: Vec<WorkerHandle>,
    shared: Arc<Shared>,
    num_threads: usize,
}

impl WorkerPool {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let num_threads = config.worker_threads();
        if num_threads == 0 {
            return Err(Error::config("need at least 1 thread"));
        }

        let shared = Arc::new(Shared {
            state: Mutex::new(PoolState {
                queue: TaskQueue::new(),
                running: true,
            }),
            available: Condvar::new(),
        });

        let mut handles: Vec<WorkerHandle> = Vec::with_capacity(num_threads);

        for id in 0..num_threads {
            let worker = Worker::new(id);
            let state = worker.state.clone();
            let shared_clone = shared.clone();
            let name = format!("{}-{}", config.thread_name_prefix, id);

            let mut builder = thread::Builder::new().name(name);

            if let Some(stack_size) = config.stack_size {
                builder = builder.stack_size(stack_size);
            }

            match builder.spawn(move || worker.run(shared_clone)) {
                Ok(thread) => handles.push(WorkerHandle {
                    id,
                    thread: Some(thread),
                    state,
                }),
                Err(e) => {
                    // roll back: stop and reclaim every worker spawned so
                    // far, then report failure with no pool left behind
                    shared.state.lock().running = false;
                    shared.available.notify_all();
                    for handle in &mut handles {
                        if let Some(thread) = handle.thread.take() {
                            let _ = thread.join();
                        }
                    }
                    return Err(Error::executor(format!(
                        "failed to spawn worker {}: {}",
                        id, e
                    )));
                }
            }
        }

        Ok(Self {
            workers: handles,
            shared,
            num_threads,
        })
    }

    /// Enqueue a task and wake one waiting worker.
    ///
    /// Never blocks on capacity. Fails with [`Error::PoolClosed`] once
    /// shutdown has begun, or with [`Error::QueueExhausted`] if the queue
    /// cannot grow; in both cases nothing was enqueued.
    pub fn submit(&self, task: Task) -> Result<()> {
        let mut state = self.shared.state.lock();

        if !state.running {
            return Err(Error::PoolClosed);
        }

        state.queue.push(task)?;

        // exactly one task became available, wake exactly one worker
        self.shared.available.notify_one();
        Ok(())
    }

    pub fn execute<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.submit(Task::new(f))
    }

    /// Tasks currently queued and not yet picked up by a worker.
    pub fn pending_tasks(&self) -> usize {
        self.shared.state.lock().queue.len()
    }

    /// Total tasks executed across all workers, panicked ones included.
    pub fn completed_tasks(&self) -> u64 {
        self.workers
            .iter()
            .map(|w| w.state.tasks_executed.load(Ordering::Relaxed))
            .sum()
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Stop the pool. Pending tasks still in the queue are discarded, never
    /// executed.
    ///
    /// With `force == false`, blocks until every worker has finished its
    /// in-flight task (if any) and exited. With `force == true`, workers are
    /// detached and not waited for; they still observe the flag and exit on
    /// their own, but this call does not block on them. Idempotent.
    pub fn shutdown(&mut self, force: bool) {
        {
            let mut state = self.shared.state.lock();
            state.running = false;
        }

        // every worker must observe the flag, not just one
        self.shared.available.notify_all();

        for worker in &mut self.workers {
            match worker.thread.take() {
                Some(thread) if !force => {
                    if thread.join().is_err() {
                        // worker loops never panic; task panics are caught
                        eprintln!("[stoker] worker {} exited abnormally", worker.id);
                    }
                }
                // forced: drop the handle, do not wait
                _ => {}
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown(false);
    }
}
