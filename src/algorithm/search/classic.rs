use crate::algorithm::search::path;
use crate::algorithm::search::state::SearchState;
use crate::model::edge_id::EdgeId;
use crate::model::graph_store::GraphStore;
use crate::model::query_result::QueryResult;
use crate::model::shortcut::InsideTag;
use crate::unit::Cost;

/// Bidirectional Dijkstra with no spatial pruning: forward relaxes only `Upward` shortcuts,
/// backward relaxes `Downward`/`Lateral`, and both directions step once per iteration.
pub fn query(graph: &GraphStore, source: EdgeId, target: EdgeId) -> QueryResult {
    log::debug!("classic query: source={source} target={target}");

    if source == target {
        return QueryResult::found(graph.edge_cost(source), vec![source]);
    }

    let mut fwd = SearchState::default();
    let mut bwd = SearchState::default();
    fwd.seed(source, Cost::ZERO);
    bwd.seed(target, graph.edge_cost(target));

    let mut best = Cost::INFINITY;
    let mut meeting: Option<EdgeId> = None;

    let exhausted = |state: &SearchState, best: Cost| state.peek_min_cost().map(|c| c >= best).unwrap_or(true);
    loop {
        step_forward(graph, &mut fwd, &bwd, &mut best, &mut meeting);
        step_backward(graph, &mut bwd, &fwd, &mut best, &mut meeting);

        if exhausted(&fwd, best) && exhausted(&bwd, best) {
            break;
        }
    }

    finish(graph, best, meeting, &fwd, &bwd)
}

/// performs one forward pop-and-expand step, a no-op if the queue is empty.
fn step_forward(
    graph: &GraphStore,
    fwd: &mut SearchState,
    bwd: &SearchState,
    best: &mut Cost,
    meeting: &mut Option<EdgeId>,
) {
    let Some((u, d)) = fwd.pop() else {
        return;
    };
    if d > fwd.dist_of(u).unwrap_or(Cost::INFINITY) || d >= *best {
        return;
    }
    for sc in graph.forward_adj(u) {
        if sc.inside != InsideTag::Upward {
            continue;
        }
        let nd = d + sc.cost;
        fwd.relax(u, sc.to, nd);
        if let Some(bd) = bwd.dist_of(sc.to) {
            let total = nd + bd;
            if total < *best {
                *best = total;
                *meeting = Some(sc.to);
            }
        }
    }
}

fn step_backward(
    graph: &GraphStore,
    bwd: &mut SearchState,
    fwd: &SearchState,
    best: &mut Cost,
    meeting: &mut Option<EdgeId>,
) {
    let Some((u, d)) = bwd.pop() else {
        return;
    };
    if d > bwd.dist_of(u).unwrap_or(Cost::INFINITY) || d >= *best {
        return;
    }
    for sc in graph.backward_adj(u) {
        if !matches!(sc.inside, InsideTag::Downward | InsideTag::Lateral) {
            continue;
        }
        let nd = d + sc.cost;
        bwd.relax(u, sc.from, nd);
        if let Some(fd) = fwd.dist_of(sc.from) {
            let total = nd + fd;
            if total < *best {
                *best = total;
                *meeting = Some(sc.from);
            }
        }
    }
}

/// Shared by all three algorithms: turns a resolved `best`/`meeting` pair into a `QueryResult`,
/// reporting unreachable on any path-reconstruction failure rather than propagating it, since a
/// malformed parent map here would be this crate's own bug, not the caller's.
pub(super) fn finish(
    _graph: &GraphStore,
    best: Cost,
    meeting: Option<EdgeId>,
    fwd: &SearchState,
    bwd: &SearchState,
) -> QueryResult {
    let Some(meeting) = meeting else {
        return QueryResult::unreachable();
    };
    match path::reconstruct(meeting, fwd.parent_map(), bwd.parent_map()) {
        Ok(p) => QueryResult::found(best, p),
        Err(err) => {
            log::warn!("path reconstruction failed for meeting point {meeting}: {err}");
            QueryResult::unreachable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph_store::GraphStoreBuilder;
    use crate::model::rows::{EdgeMetadataRow, ShortcutRow};

    fn meta(id: u64, cost: f64) -> EdgeMetadataRow {
        EdgeMetadataRow {
            id,
            incoming_cell: 0,
            outgoing_cell: 0,
            lca_res: -1,
            length: 1.0,
            cost,
        }
    }

    fn shortcut(from: u64, to: u64, cost: f64, inside: i8) -> ShortcutRow {
        ShortcutRow {
            incoming_edge: from,
            outgoing_edge: to,
            via_edge: 0,
            cost,
            cell: 0,
            inside,
        }
    }

    #[test]
    fn identity_query_returns_self_path() {
        let store = GraphStoreBuilder::new()
            .with_metadata_rows(vec![meta(42, 7.5)])
            .build()
            .unwrap();
        let result = query(&store, EdgeId(42), EdgeId(42));
        assert_eq!(result, QueryResult::found(Cost::new(7.5), vec![EdgeId(42)]));
    }

    #[test]
    fn two_hop_upward_then_downward() {
        // backward_adj is keyed by `to`, so the downward shortcut must name the hub as its
        // `from` and the target as its `to` for the seeded-at-target backward search to find it.
        let store = GraphStoreBuilder::new()
            .with_metadata_rows(vec![meta(1, 1.0), meta(2, 1.0), meta(3, 1.0)])
            .with_shortcut_rows(vec![shortcut(1, 2, 2.0, 1), shortcut(2, 3, 3.0, -1)])
            .build()
            .unwrap();
        let result = query(&store, EdgeId(1), EdgeId(3));
        assert!(result.reachable);
        // 0 (source seed) + 2 (upward) + 3 (downward) + 1 (edge_cost(target) backward seed)
        assert_eq!(result.distance, Cost::new(6.0));
        assert_eq!(result.path, vec![EdgeId(1), EdgeId(2), EdgeId(3)]);
    }

    #[test]
    fn unreachable_with_no_shortcuts() {
        let store = GraphStoreBuilder::new()
            .with_metadata_rows(vec![meta(1, 1.0), meta(5, 1.0)])
            .build()
            .unwrap();
        let result = query(&store, EdgeId(1), EdgeId(5));
        assert_eq!(result, QueryResult::unreachable());
    }

    #[test]
    fn forward_search_ignores_non_upward_shortcuts() {
        let store = GraphStoreBuilder::new()
            .with_metadata_rows(vec![meta(1, 1.0), meta(2, 1.0)])
            .with_shortcut_rows(vec![shortcut(1, 2, 1.0, -1)])
            .build()
            .unwrap();
        let result = query(&store, EdgeId(1), EdgeId(2));
        assert_eq!(result, QueryResult::unreachable());
    }
}
