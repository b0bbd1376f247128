use crate::algorithm::search::error::SearchError;
use crate::model::edge_id::EdgeId;
use std::collections::{HashMap, HashSet};

/// Walks a parent map from `start` up to its root (the node that is its own parent), collecting
/// edge ids in walk order (`start` first, root last). Guards against a malformed parent map
/// looping forever, the same defensive pattern the reference engine's `backtrack` module uses for
/// its own vertex-oriented parent walk -- this cannot happen via this crate's own query entry
/// points, since parent maps are only ever built by this crate's search loops, but a violated
/// invariant should fail loudly rather than hang.
fn walk_to_root(
    start: EdgeId,
    parent: &HashMap<EdgeId, EdgeId>,
) -> Result<Vec<EdgeId>, SearchError> {
    let mut visited = HashSet::new();
    let mut path = Vec::new();
    let mut current = start;
    loop {
        if !visited.insert(current) {
            return Err(SearchError::LoopInPath(current));
        }
        path.push(current);
        let next = *parent.get(&current).ok_or_else(|| {
            SearchError::InternalError(format!("edge {current} missing from parent map"))
        })?;
        if next == current {
            return Ok(path);
        }
        current = next;
    }
}

/// Assembles the meeting-point parent maps into a source->target edge list, per `SPEC_FULL.md`
/// §4.7: the forward half (source..=meeting, reversed into traversal order) followed by the
/// backward half (meeting's successor..=target, already in traversal order).
pub fn reconstruct(
    meeting: EdgeId,
    parent_fwd: &HashMap<EdgeId, EdgeId>,
    parent_bwd: &HashMap<EdgeId, EdgeId>,
) -> Result<Vec<EdgeId>, SearchError> {
    let mut forward_half = walk_to_root(meeting, parent_fwd)?;
    forward_half.reverse();

    let mut backward_half = walk_to_root(meeting, parent_bwd)?;
    // the meeting node is already the last element of `forward_half`; drop it here.
    backward_half.remove(0);

    forward_half.extend(backward_half);
    Ok(forward_half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_path_when_source_equals_meeting_equals_target() {
        let mut parent_fwd = HashMap::new();
        parent_fwd.insert(EdgeId(1), EdgeId(1));
        let mut parent_bwd = HashMap::new();
        parent_bwd.insert(EdgeId(1), EdgeId(1));

        let path = reconstruct(EdgeId(1), &parent_fwd, &parent_bwd).unwrap();
        assert_eq!(path, vec![EdgeId(1)]);
    }

    #[test]
    fn concatenates_forward_and_backward_halves() {
        // forward: 1 -> 2 -> 3 (meeting = 3); backward: 5 -> 4 -> 3 (meeting = 3)
        let mut parent_fwd = HashMap::new();
        parent_fwd.insert(EdgeId(1), EdgeId(1));
        parent_fwd.insert(EdgeId(2), EdgeId(1));
        parent_fwd.insert(EdgeId(3), EdgeId(2));

        let mut parent_bwd = HashMap::new();
        parent_bwd.insert(EdgeId(5), EdgeId(5));
        parent_bwd.insert(EdgeId(4), EdgeId(5));
        parent_bwd.insert(EdgeId(3), EdgeId(4));

        let path = reconstruct(EdgeId(3), &parent_fwd, &parent_bwd).unwrap();
        assert_eq!(path, vec![EdgeId(1), EdgeId(2), EdgeId(3), EdgeId(4), EdgeId(5)]);
    }

    #[test]
    fn detects_cycle_in_parent_map() {
        let mut parent_fwd = HashMap::new();
        parent_fwd.insert(EdgeId(1), EdgeId(2));
        parent_fwd.insert(EdgeId(2), EdgeId(1));
        let parent_bwd = HashMap::new();

        let err = reconstruct(EdgeId(1), &parent_fwd, &parent_bwd).unwrap_err();
        assert!(matches!(err, SearchError::LoopInPath(_)));
    }
}
