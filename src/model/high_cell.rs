use crate::h3;
use crate::model::edge_id::EdgeId;
use crate::model::graph_store::GraphStore;

/// The LCA cell bounding a [`crate::algorithm::search::pruned`] query, paired with its
/// resolution. `cell == 0 && res == -1` is the sentinel "pruning disabled".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HighCell {
    pub cell: u64,
    pub res: i8,
}

impl HighCell {
    pub const DISABLED: HighCell = HighCell { cell: 0, res: -1 };

    pub fn is_disabled(&self) -> bool {
        self.cell == 0 || self.res < 0
    }
}

/// Derives the high cell for a `(source, target)` pair, per `SPEC_FULL.md` §4.3:
///
/// 1. Both endpoints must have edge metadata, else pruning is disabled.
/// 2. Both incoming cells must be nonzero, else pruning is disabled.
/// 3. Each cell is raised to its own record's `lca_res` (if non-negative).
/// 4. The LCA of the two raised cells is the high cell, unless it is `0`.
pub fn solve(graph: &GraphStore, source: EdgeId, target: EdgeId) -> HighCell {
    let (Some(src_meta), Some(dst_meta)) =
        (graph.edge_metadata(source), graph.edge_metadata(target))
    else {
        return HighCell::DISABLED;
    };

    if src_meta.incoming_cell == 0 || dst_meta.incoming_cell == 0 {
        return HighCell::DISABLED;
    }

    let raised_src = if src_meta.lca_res >= 0 {
        h3::parent(src_meta.incoming_cell, src_meta.lca_res)
    } else {
        src_meta.incoming_cell
    };
    let raised_dst = if dst_meta.lca_res >= 0 {
        h3::parent(dst_meta.incoming_cell, dst_meta.lca_res)
    } else {
        dst_meta.incoming_cell
    };

    let cell = h3::lca(raised_src, raised_dst);
    if cell == 0 {
        return HighCell::DISABLED;
    }
    HighCell {
        cell,
        res: h3::resolution(cell),
    }
}
