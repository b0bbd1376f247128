use crate::model::edge_id::EdgeId;
use crate::unit::Cost;
use serde::{Deserialize, Serialize};

/// The outcome of a one-to-one or many-to-many query. Queries never fail other than by setting
/// `reachable = false` -- see `SPEC_FULL.md` §7.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub distance: Cost,
    pub path: Vec<EdgeId>,
    pub reachable: bool,
}

impl QueryResult {
    pub fn unreachable() -> QueryResult {
        QueryResult {
            distance: Cost::INVALID,
            path: Vec::new(),
            reachable: false,
        }
    }

    pub fn found(distance: Cost, path: Vec<EdgeId>) -> QueryResult {
        QueryResult {
            distance,
            path,
            reachable: true,
        }
    }
}
