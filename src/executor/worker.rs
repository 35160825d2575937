// worker thread stuff
use super::pool::Shared;
use super::task::Task;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub type WorkerId = usize;

// stats for each worker
pub struct WorkerState {
    pub tasks_executed: AtomicU64,
    pub tasks_panicked: AtomicU64,
}

impl WorkerState {
    fn new() -> Self {
        Self {
            tasks_executed: AtomicU64::new(0),
            tasks_panicked: AtomicU64::new(0),
        }
    }
}

pub(crate) struct Worker {
    pub id: WorkerId,
    pub state: Arc<WorkerState>,
}

impl Worker {
    pub fn new(id: WorkerId) -> Self {
        Self {
            id,
            state: Arc::new(WorkerState::new()),
        }
    }

    // main loop: wait for a task or for shutdown, whichever comes first
    pub fn run(&self, shared: Arc<Shared>) {
        let mut state = shared.state.lock();

        loop {
            if !state.running {
                break;
            }

            match state.queue.pop() {
                Some(task) => {
                    // run the task outside the lock, then come back
                    drop(state);
                    self.execute_task(task);
                    state = shared.state.lock();
                }
                None => {
                    // releases the lock while blocked, re-acquires on wake;
                    // the loop re-checks both predicates afterwards, so
                    // spurious wakeups are harmless
                    shared.available.wait(&mut state);
                }
            }
        }
    }

    fn execute_task(&self, task: Task) {
        let tid = task.id;

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            task.execute();
        }));

        if result.is_err() {
            eprintln!("[stoker] worker {}: task {:?} panicked", self.id, tid);
            self.state.tasks_panicked.fetch_add(1, Ordering::Relaxed);
        }

        self.state.tasks_executed.fetch_add(1, Ordering::Relaxed);
    }
}
