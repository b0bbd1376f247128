use crate::algorithm::search::classic::finish;
use crate::algorithm::search::error::SearchError;
use crate::algorithm::search::state::SearchState;
use crate::model::edge_id::EdgeId;
use crate::model::graph_store::GraphStore;
use crate::model::query_result::QueryResult;
use crate::model::shortcut::InsideTag;
use crate::unit::Cost;

/// Multi-endpoint query: multiple weighted sources and targets seed the same bidirectional search
/// used by [`crate::algorithm::search::classic`], with no spatial pruning (a single high cell
/// cannot be derived for more than one source/target pair). See `SPEC_FULL.md` §4.6.
///
/// `source_edges[i]` seeds at approach cost `source_dists[i]`; `target_edges[j]` seeds at
/// `edge_cost(target_edges[j]) + target_dists[j]`. An endpoint absent from edge metadata is
/// dropped silently; duplicate edge ids keep the minimum distance. Mismatched slice lengths are a
/// caller error.
pub fn query(
    graph: &GraphStore,
    source_edges: &[EdgeId],
    source_dists: &[Cost],
    target_edges: &[EdgeId],
    target_dists: &[Cost],
) -> Result<QueryResult, SearchError> {
    if source_edges.len() != source_dists.len() {
        return Err(SearchError::InvalidInput(format!(
            "{} source edges vs {} source distances",
            source_edges.len(),
            source_dists.len()
        )));
    }
    if target_edges.len() != target_dists.len() {
        return Err(SearchError::InvalidInput(format!(
            "{} target edges vs {} target distances",
            target_edges.len(),
            target_dists.len()
        )));
    }

    log::debug!(
        "multi query: {} source endpoints, {} target endpoints",
        source_edges.len(),
        target_edges.len()
    );

    let mut fwd = SearchState::default();
    let mut bwd = SearchState::default();

    let mut seeded_sources = 0usize;
    for (&s, &a) in source_edges.iter().zip(source_dists) {
        if graph.edge_metadata(s).is_none() {
            continue;
        }
        fwd.seed(s, a);
        seeded_sources += 1;
    }

    let mut seeded_targets = 0usize;
    for (&t, &e) in target_edges.iter().zip(target_dists) {
        if graph.edge_metadata(t).is_none() {
            continue;
        }
        bwd.seed(t, graph.edge_cost(t) + e);
        seeded_targets += 1;
    }

    if seeded_sources == 0 || seeded_targets == 0 {
        return Ok(QueryResult::unreachable());
    }

    let mut best = Cost::INFINITY;
    let mut meeting: Option<EdgeId> = None;

    let exhausted = |state: &SearchState, best: Cost| state.peek_min_cost().map(|c| c >= best).unwrap_or(true);
    loop {
        if !exhausted(&fwd, best) {
            step_forward(graph, &mut fwd, &bwd, &mut best, &mut meeting);
        }
        if !exhausted(&bwd, best) {
            step_backward(graph, &mut bwd, &fwd, &mut best, &mut meeting);
        }
        if exhausted(&fwd, best) && exhausted(&bwd, best) {
            break;
        }
    }

    Ok(finish(graph, best, meeting, &fwd, &bwd))
}

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
