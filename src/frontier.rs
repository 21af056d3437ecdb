//! Min-priority queue of pending search nodes.
//!
//! Ties on priority go to the entry pushed first, which makes the order of
//! expansion (and so the returned path) reproducible. The queue does not
//! suppress duplicates; stale entries are filtered by the caller on pop.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// `(priority, insertion sequence)`, compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    priority: u32,
    sequence: u64,
}

/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse`.
#[derive(Debug)]
struct FrontierEntry<T> {
    key: Reverse<FrontierKey>,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_sequence: u64,
    high_water: usize,
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Inserts `item` behind every entry of equal priority already queued.
    pub fn push(&mut self, item: T, priority: u32) {
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            item,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes the entry with the lowest priority, oldest first on ties.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the queue has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
