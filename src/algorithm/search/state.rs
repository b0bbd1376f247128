use crate::algorithm::search::queue::SearchQueue;
use crate::model::edge_id::EdgeId;
use crate::unit::Cost;
use std::collections::HashMap;

/// The per-direction search state of a bidirectional query: a best-known-distance map, a parent
/// map (with `parent[x] == x` iff `x` is an initial frontier node), and the priority queue. Born
/// at query start and discarded at return, per `SPEC_FULL.md` §3/§5.
#[derive(Default)]
pub struct SearchState {
    dist: HashMap<EdgeId, Cost>,
    parent: HashMap<EdgeId, EdgeId>,
    queue: SearchQueue,
}

impl SearchState {
    /// seeds a frontier node as its own parent, per the root invariant in `SPEC_FULL.md` §3.
    pub fn seed(&mut self, id: EdgeId, dist: Cost) {
        let improved = match self.dist.get(&id) {
            Some(&existing) => dist < existing,
            None => true,
        };
        if improved {
            self.dist.insert(id, dist);
            self.parent.insert(id, id);
        }
        self.queue.push(id, dist);
    }

    /// relaxes the edge `from -> to` with weight `via_cost`. Returns `true` if `to`'s distance
    /// improved, per the relaxation rule in `SPEC_FULL.md` §4.4 step 2b.
    pub fn relax(&mut self, from: EdgeId, to: EdgeId, candidate: Cost) -> bool {
        let current = self.dist.get(&to).copied().unwrap_or(Cost::INFINITY);
        if candidate < current {
            self.dist.insert(to, candidate);
            self.parent.insert(to, from);
            self.queue.push(to, candidate);
            true
        } else {
            false
        }
    }

    pub fn dist_of(&self, id: EdgeId) -> Option<Cost> {
        self.dist.get(&id).copied()
    }

    pub fn pop(&mut self) -> Option<(EdgeId, Cost)> {
        self.queue.pop_min()
    }

    pub fn peek_min_cost(&self) -> Option<Cost> {
        self.queue.peek_min_cost()
    }

    pub fn is_queue_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn parent_map(&self) -> &HashMap<EdgeId, EdgeId> {
        &self.parent
    }
}
