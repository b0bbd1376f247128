use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An unsigned integer naming a directed edge in the underlying road network. Edges are the
/// vertices of the search graph -- the search graph this crate queries is the edge-based dual of
/// the road graph -- so `EdgeId` is the unit every adjacency, distance map, and path in this
/// crate is keyed or indexed by.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Default)]
pub struct EdgeId(pub u64);

impl PartialOrd for EdgeId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(value: u64) -> Self {
        EdgeId(value)
    }
}
