use crate::unit::Cost;
use serde::{Deserialize, Serialize};

/// Immutable per-edge attributes loaded once into a [`crate::model::graph_store::GraphStore`].
/// An edge id absent from the store's metadata is treated as "global" (cell `0`, resolution
/// `-1`) by every cell-derived query, per `SPEC_FULL.md` §3.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeMetadata {
    pub incoming_cell: u64,
    pub outgoing_cell: u64,
    /// a non-negative hierarchy level, or `-1` for "global".
    pub lca_res: i8,
    pub length: f64,
    pub cost: Cost,
}
