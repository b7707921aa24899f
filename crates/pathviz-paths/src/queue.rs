//! Min-priority queue used by the informed searches.
//!
//! Items are stored in a binary heap keyed by `(priority, insertion_order)`.
//! Lower priorities are dequeued first; ties are broken by insertion order
//! (FIFO), so every search run over the same input is reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A floating priority with a total order (`f64::total_cmp`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score(pub f64);

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct Entry<T, P> {
    item: T,
    priority: P,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap stores `Reverse` so the smallest pops first.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A generic min-priority queue.
///
/// [`enqueue`](Self::enqueue) and [`dequeue`](Self::dequeue) are the only
/// mutating operations. `dequeue` always yields an item whose priority is
/// minimal among those queued; among equal priorities the earliest enqueued
/// wins.
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Reverse<Entry<T, P>>>,
    seq: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn enqueue(&mut self, item: T, priority: P) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Remove and return the item with the lowest priority.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Remove the lowest-priority item, also returning its priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    /// Whether the queue is exhausted.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_minimum_first() {
        let mut q = PriorityQueue::new();
        q.enqueue("a", 3);
        q.enqueue("b", 1);
        q.enqueue("c", 2);

        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn ties_are_fifo() {
        let mut q = PriorityQueue::new();
        q.enqueue("first", 1);
        q.enqueue("second", 1);
        q.enqueue("zero", 0);
        q.enqueue("third", 1);

        assert_eq!(q.dequeue(), Some("zero"));
        assert_eq!(q.dequeue(), Some("first"));
        assert_eq!(q.dequeue(), Some("second"));
        assert_eq!(q.dequeue(), Some("third"));
    }

    #[test]
    fn interleaved_insert_keeps_global_minimum() {
        let mut q = PriorityQueue::new();
        q.enqueue(10, 10);
        q.enqueue(5, 5);
        assert_eq!(q.dequeue(), Some(5));
        q.enqueue(1, 1);
        q.enqueue(7, 7);
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(7));
        assert_eq!(q.dequeue(), Some(10));
    }

    #[test]
    fn float_scores() {
        let mut q = PriorityQueue::new();
        q.enqueue('x', Score(2.5));
        q.enqueue('y', Score(0.25));
        q.enqueue('z', Score(2.5));
        assert_eq!(q.dequeue_with_priority(), Some(('y', Score(0.25))));
        assert_eq!(q.dequeue(), Some('x'));
        assert_eq!(q.dequeue(), Some('z'));
    }

    #[test]
    fn is_empty_and_len() {
        let mut q = PriorityQueue::<i32, i32>::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);

        q.enqueue(1, 1);
        assert!(!q.is_empty());
        assert_eq!(q.len(), 1);

        q.dequeue();
        assert!(q.is_empty());
    }
}
