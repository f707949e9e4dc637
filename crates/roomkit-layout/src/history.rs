//! Undo/redo history over whole state values.
//!
//! `History<T>` keeps `past`, `present` and `future`. Every change replaces the
//! present with a new value, so snapshots are just clones of `T`.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default maximum number of undo steps.
pub const DEFAULT_MAX_DEPTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    past: VecDeque<T>,
    present: T,
    /// Next redo entry is at the back.
    future: Vec<T>,
    max_depth: usize,
}

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_depth(initial, DEFAULT_MAX_DEPTH)
    }

    /// Creates a history keeping at most `max_depth` undo steps.
    pub fn with_depth(initial: T, max_depth: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Current value.
    pub fn state(&self) -> &T {
        &self.present
    }

    /// Pushes the present onto `past`, installs `next` and clears `future`.
    pub fn set_state(&mut self, next: T) {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        if self.past.len() > self.max_depth {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Like [`set_state`](Self::set_state) with the new value computed from the present.
    pub fn update<F>(&mut self, updater: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = updater(&self.present);
        self.set_state(next);
    }

    /// Replaces the present without creating an undo step.
    pub fn replace_present(&mut self, next: T) {
        self.present = next;
    }

    /// Steps back. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    /// Steps forward. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push_back(current);
                true
            }
            None => false,
        }
    }

    /// Restores the latest past entry and discards the present without making
    /// it redoable. Used to abandon a gesture that already recorded a step.
    pub fn rollback(&mut self) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                self.present = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Drops all undo and redo entries, keeping the present.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Replaces the present and drops all history.
    pub fn reset(&mut self, state: T) {
        self.present = state;
        self.clear();
    }
}

impl<T: Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
