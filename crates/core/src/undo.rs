//! Bounded undo history.

use std::collections::VecDeque;

use crate::error::ActionError;
use crate::types::MAX_UNDO;

/// Stack of pre-action snapshots holding at most `capacity` entries
///
/// Pushing past capacity silently drops the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoLog<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> UndoLog<T> {
    pub fn new() -> Self {
        Self::with_capacity(MAX_UNDO)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a snapshot taken before a mutation
    pub fn push(&mut self, snapshot: T) {
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Take the most recent snapshot
    pub fn pop(&mut self) -> Result<T, ActionError> {
        self.entries.pop_back().ok_or(ActionError::EmptyUndoLog)
    }

    pub fn peek(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for UndoLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
