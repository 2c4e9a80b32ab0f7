//! Insertion Order Module
//!
//! Tracks insertion order for oldest-first capacity eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks the order in which entries were inserted.
///
/// Each slot is a `(key, generation)` pair:
/// - Front = Oldest insertion
/// - Back = Newest insertion
///
/// Overwrites and removals do not search the queue. They leave stale slots
/// behind, which callers skip by comparing the generation with the live
/// entry.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    slots: VecDeque<(String, u64)>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            slots: VecDeque::new(),
        }
    }

    // == Push ==
    /// Records a new insertion as the newest slot.
    pub fn push(&mut self, key: &str, generation: u64) {
        self.slots.push_back((key.to_string(), generation));
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest slot, live or stale.
    pub fn pop_oldest(&mut self) -> Option<(String, u64)> {
        self.slots.pop_front()
    }

    // == Compact ==
    /// Drops every slot for which `is_live` returns false.
    pub fn compact<F>(&mut self, mut is_live: F)
    where
        F: FnMut(&str, u64) -> bool,
    {
        self.slots.retain(|(key, generation)| is_live(key, *generation));
    }

    // == Length ==
    /// Returns the number of slots, including stale ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
