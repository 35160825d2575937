//! FIFO task queue.
//!
//! Pure data structure with no synchronization of its own: every operation
//! must run under the owning pool's mutex. Dequeue order equals submission
//! order; dropping the queue drops all still-pending tasks unexecuted.

use super::task::Task;
use crate::error::{Error, Result};
use std::collections::VecDeque;

pub(crate) struct TaskQueue {
    tasks: VecDeque<Task>,
    // synthetic growth limit, only set from tests
    limit: Option<usize>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
            limit: None,
        }
    }

    #[cfg(test)]
    fn with_limit(limit: usize) -> Self {
        Self {
            tasks: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Append a task at the tail.
    ///
    /// Fails only if storage cannot grow; the queue is left unchanged in
    /// that case.
    pub fn push(&mut self, task: Task) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.tasks.len() >= limit {
                return Err(Error::QueueExhausted);
            }
        }
        self.tasks
            .try_reserve(1)
            .map_err(|_| Error::QueueExhausted)?;
        self.tasks.push_back(task);
        Ok(())
    }

    /// Remove and return the head, or None when empty.
    pub fn pop(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = TaskQueue::new();
        let ids: Vec<_> = (0..3)
            .map(|_| {
                let task = Task::new(|| {});
                let id = task.id();
                queue.push(task).unwrap();
                id
            })
            .collect();

        let popped: Vec<_> = std::iter::from_fn(|| queue.pop().map(|t| t.id())).collect();
        assert_eq!(popped, ids);
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut queue = TaskQueue::new();
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_failed_push_leaves_queue_unchanged() {
        let mut queue = TaskQueue::with_limit(1);

        let first = Task::new(|| {});
        let first_id = first.id();
        queue.push(first).unwrap();

        let result = queue.push(Task::new(|| {}));
        assert!(matches!(result, Err(Error::QueueExhausted)));
        assert_eq!(queue.len(), 1);

        // a later push succeeds once there is room again
        assert_eq!(queue.pop().unwrap().id(), first_id);
        assert!(queue.push(Task::new(|| {})).is_ok());
    }
}
