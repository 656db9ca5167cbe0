//! Bounded undo history.

use std::collections::VecDeque;

use crate::constants::HISTORY_CAPACITY;
use crate::game_state::GameState;

/// Stack of snapshots taken before each grid-changing move.
///
/// Undo pops the most recent snapshot. Once more than `capacity` snapshots
/// have been pushed the oldest ones are dropped first.
#[derive(Clone, Debug)]
pub struct History {
    capacity: usize,
    entries: VecDeque<GameState>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates an empty history holding up to [`HISTORY_CAPACITY`] snapshots.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Creates an empty history holding up to `capacity` snapshots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Stores a copy of `state`, evicting the oldest snapshot when full.
    pub fn push(&mut self, state: &GameState) {
        self.entries.push_back(state.clone());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.entries.pop_back()
    }

    /// Most recent snapshot, if any.
    pub fn peek(&self) -> Option<&GameState> {
        self.entries.back()
    }

    /// Discards every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
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
}
