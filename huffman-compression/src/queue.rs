use std::{cmp::Reverse, collections::BinaryHeap};

/// Minimum-priority queue that hands out equal-weight items in the order they
/// were pushed.
///
/// `BinaryHeap` alone leaves ties unspecified, so every item is tagged with an
/// insertion counter that breaks them.
#[derive(Debug)]
pub struct StableQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    pushed: u64,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry<T> {
    weight: u64,
    order: u64,
    item: T,
}

impl<T: Ord> Default for StableQueue<T> {
    fn default() -> Self {
        StableQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<T: Ord> StableQueue<T> {
    pub fn push(&mut self, weight: u64, item: T) {
        let order = self.pushed;
        self.pushed += 1;
        self.heap.push(Reverse(Entry {
            weight,
            order,
            item,
        }));
    }

    /// Removes the lightest item; among equal weights, the one pushed first.
    pub fn pop(&mut self) -> Option<(u64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.weight, entry.item))
    }
}

impl<T: Ord> Extend<(u64, T)> for StableQueue<T> {
    fn extend<I: IntoIterator<Item = (u64, T)>>(&mut self, iter: I) {
        iter.into_iter()
            .for_each(move |(weight, item)| self.push(weight, item));
    }
}
