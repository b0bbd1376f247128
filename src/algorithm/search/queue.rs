use crate::model::edge_id::EdgeId;
use crate::unit::{Cost, ReverseCost};
use priority_queue::PriorityQueue;
use std::collections::hash_map::RandomState;
use std::ops::{Deref, DerefMut};

/// A decrease-key min-priority queue of `(EdgeId, Cost)`, implemented as a thin wrapper over the
/// `priority_queue` crate the way the reference engine's `InternalPriorityQueue` wraps the same
/// crate for its own A* frontier.
///
/// `priority_queue::PriorityQueue` pops the *greatest* priority and updates an entry's priority
/// in place rather than accumulating duplicates, so the "insert duplicates, skip stale pops"
/// design in `SPEC_FULL.md` §9 is replaced here by decrease-key semantics: every node has at most
/// one live queue entry, always reflecting its current best distance. `ReverseCost` flips the
/// ordering so the smallest `Cost` carries the greatest priority.
pub struct SearchQueue(PriorityQueue<EdgeId, ReverseCost, RandomState>);

impl Default for SearchQueue {
    fn default() -> Self {
        SearchQueue(PriorityQueue::new())
    }
}

impl Deref for SearchQueue {
    type Target = PriorityQueue<EdgeId, ReverseCost, RandomState>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SearchQueue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl SearchQueue {
    /// inserts `id` at `cost`, or lowers its existing priority if `cost` improves on it. Uses
    /// `push_increase` (priority_queue's "raise priority, or insert" primitive) rather than plain
    /// `push`, since plain `push` unconditionally overwrites -- `push_increase` is what gives us
    /// the "never regress an entry's distance" relaxation guard this crate's queries need, since
    /// a smaller `Cost` is a *greater* `ReverseCost` priority.
    pub fn push(&mut self, id: EdgeId, cost: Cost) {
        self.0.push_increase(id, cost.into());
    }

    /// pops the node with the smallest `Cost`, if any remain.
    pub fn pop_min(&mut self) -> Option<(EdgeId, Cost)> {
        self.0.pop().map(|(id, rc)| (id, rc.cost()))
    }

    /// the smallest `Cost` currently queued, if any.
    pub fn peek_min_cost(&self) -> Option<Cost> {
        self.0.peek().map(|(_, rc)| rc.cost())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_cost_first() {
        let mut q = SearchQueue::default();
        q.push(EdgeId(1), Cost::new(5.0));
        q.push(EdgeId(2), Cost::new(1.0));
        q.push(EdgeId(3), Cost::new(3.0));
        assert_eq!(q.pop_min(), Some((EdgeId(2), Cost::new(1.0))));
        assert_eq!(q.pop_min(), Some((EdgeId(3), Cost::new(3.0))));
        assert_eq!(q.pop_min(), Some((EdgeId(1), Cost::new(5.0))));
        assert_eq!(q.pop_min(), None);
    }

    #[test]
    fn repeated_push_keeps_the_better_priority() {
        let mut q = SearchQueue::default();
        q.push(EdgeId(1), Cost::new(10.0));
        q.push(EdgeId(1), Cost::new(2.0));
        assert_eq!(q.peek_min_cost(), Some(Cost::new(2.0)));
        // pushing a worse cost than the current best must not regress the entry
        q.push(EdgeId(1), Cost::new(50.0));
        assert_eq!(q.peek_min_cost(), Some(Cost::new(2.0)));
    }
}
