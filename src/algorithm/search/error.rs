use crate::model::edge_id::EdgeId;

/// Programmer-error conditions surfaced by the search algorithms. These are distinct from "no
/// path found", which is reported as `QueryResult { reachable: false, .. }` per `SPEC_FULL.md`
/// §4.8/§7 -- `SearchError` exists only for preconditions a caller violated.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("multi-endpoint query received mismatched lengths: {0}")]
    InvalidInput(String),
    #[error("path reconstruction found a repeated edge {0}, indicating a cycle in the search tree")]
    LoopInPath(EdgeId),
    #[error("internal error due to search logic: {0}")]
    InternalError(String),
}
