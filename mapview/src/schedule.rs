//! Single-slot holder for work deferred to the next animation frame.
//!
//! The host requests at most one frame callback at a time. Whatever sits in
//! the slot when the callback fires is what runs; scheduling again before
//! then replaces the earlier task, so a stale fit can never land after a
//! fresher one.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;

/// At most one pending task.
#[derive(Debug)]
pub struct FrameSlot<T> {
    pending: RefCell<Option<T>>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: RefCell::new(None) }
    }
}

impl<T> FrameSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task`, returning the task it superseded, if any.
    pub fn schedule(&self, task: T) -> Option<T> {
        self.pending.borrow_mut().replace(task)
    }

    /// Remove the pending task for execution (or to drop it).
    pub fn take(&self) -> Option<T> {
        self.pending.borrow_mut().take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
