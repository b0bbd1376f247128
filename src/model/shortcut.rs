use crate::model::edge_id::EdgeId;
use crate::unit::Cost;
use serde::{Deserialize, Serialize};

/// The direction/role tag on a [`Shortcut`], restricting which search direction -- and, under
/// H3 pruning, which popped-node context -- may relax it.
///
/// See `SPEC_FULL.md` §3 and §4.5 for the exact admission rules; the variants here only carry the
/// tag itself; the filter logic lives with each query algorithm since it differs between Classic
/// and Pruned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsideTag {
    /// `+1`: upward, permitted only in forward search.
    Upward,
    /// `0`: lateral (same hierarchy level).
    Lateral,
    /// `-1`: downward, permitted in backward search only when the popped node passes the parent check.
    Downward,
    /// `-2`: direct-edge bypass, permitted in backward search only as a global fallback.
    EdgeShortcut,
}

/// A row's `inside` value did not match any of the four tags this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown shortcut inside tag: {0} (expected one of +1, 0, -1, -2)")]
pub struct UnknownInsideTag(pub i8);

impl TryFrom<i8> for InsideTag {
    type Error = UnknownInsideTag;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InsideTag::Upward),
            0 => Ok(InsideTag::Lateral),
            -1 => Ok(InsideTag::Downward),
            -2 => Ok(InsideTag::EdgeShortcut),
            other => Err(UnknownInsideTag(other)),
        }
    }
}

impl From<InsideTag> for i8 {
    fn from(tag: InsideTag) -> Self {
        match tag {
            InsideTag::Upward => 1,
            InsideTag::Lateral => 0,
            InsideTag::Downward => -1,
            InsideTag::EdgeShortcut => -2,
        }
    }
}

/// A directed search-graph edge: a precomputed shortcut between two road-network edge ids,
/// bounded by an H3 cell and tagged with the direction it may be traversed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    pub from: EdgeId,
    pub to: EdgeId,
    pub cost: Cost,
    /// optional intermediate edge id; `None` for a direct shortcut. Not consulted by the query
    /// core -- it exists purely as a pass-through attribute for callers inspecting results.
    pub via_edge: Option<EdgeId>,
    pub cell: u64,
    pub inside: InsideTag,
}
