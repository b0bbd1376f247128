use crate::algorithm::search::classic::finish;
use crate::algorithm::search::state::SearchState;
use crate::h3;
use crate::model::edge_id::EdgeId;
use crate::model::graph_store::GraphStore;
use crate::model::high_cell::{self, HighCell};
use crate::model::query_result::QueryResult;
use crate::model::shortcut::InsideTag;
use crate::unit::Cost;

/// Bidirectional Dijkstra with H3 popped-node pruning. See `SPEC_FULL.md` §4.5: the meeting check
/// happens before staleness/bound on every pop (so a node already known to the opposite direction
/// always gets a chance to improve `best`, even when it would otherwise be skipped), forward
/// hard-prunes on the parent check, and backward admits shortcuts by the `inside`/`check`/`at_high`
/// table.
pub fn query(graph: &GraphStore, source: EdgeId, target: EdgeId) -> QueryResult {
    log::debug!("pruned query: source={source} target={target}");

    if source == target {
        return QueryResult::found(graph.edge_cost(source), vec![source]);
    }

    let high = high_cell::solve(graph, source, target);
    if high.is_disabled() {
        log::debug!("pruned query: high-cell pruning disabled for source={source} target={target}");
    } else {
        log::debug!("pruned query: high-cell={} res={}", high.cell, high.res);
    }

    let mut fwd = SearchState::default();
    let mut bwd = SearchState::default();
    fwd.seed(source, Cost::ZERO);
    bwd.seed(target, graph.edge_cost(target));

    let mut best = Cost::INFINITY;
    let mut meeting: Option<EdgeId> = None;

    loop {
        step_forward(graph, &high, &mut fwd, &bwd, &mut best, &mut meeting);
        step_backward(graph, &high, &mut bwd, &fwd, &mut best, &mut meeting);

        let exhausted = |state: &SearchState| state.peek_min_cost().map(|c| c >= best).unwrap_or(true);
        if exhausted(&fwd) && exhausted(&bwd) {
            break;
        }
    }

    finish(graph, best, meeting, &fwd, &bwd)
}

fn step_forward(
    graph: &GraphStore,
    high: &HighCell,
    fwd: &mut SearchState,
    bwd: &SearchState,
    best: &mut Cost,
    meeting: &mut Option<EdgeId>,
) {
    let Some((u, d)) = fwd.pop() else {
        return;
    };

    if let Some(bd) = bwd.dist_of(u) {
        let total = d + bd;
        if total <= *best {
            *best = total;
            *meeting = Some(u);
        }
    }

    if d > fwd.dist_of(u).unwrap_or(Cost::INFINITY) || d >= *best {
        return;
    }

    let u_cell = graph.edge_cell(u);
    if !h3::parent_check(u_cell, high.cell, high.res) {
        return;
    }

    for sc in graph.forward_adj(u) {
        if sc.inside != InsideTag::Upward {
            continue;
        }
        fwd.relax(u, sc.to, d + sc.cost);
    }
}

fn step_backward(
    graph: &GraphStore,
    high: &HighCell,
    bwd: &mut SearchState,
    fwd: &SearchState,
    best: &mut Cost,
    meeting: &mut Option<EdgeId>,
) {
    let Some((u, d)) = bwd.pop() else {
        return;
    };

    if let Some(fd) = fwd.dist_of(u) {
        let total = d + fd;
        if total < *best {
            *best = total;
            *meeting = Some(u);
        }
    }

    if d > bwd.dist_of(u).unwrap_or(Cost::INFINITY) || d >= *best {
        return;
    }

    let u_cell = graph.edge_cell(u);
    let check = h3::parent_check(u_cell, high.cell, high.res);
    let at_high = u_cell == high.cell;

    for sc in graph.backward_adj(u) {
        let admitted = match sc.inside {
            InsideTag::Downward => check,
            InsideTag::Lateral => at_high || !check,
            InsideTag::EdgeShortcut => !check,
            InsideTag::Upward => false,
        };
        if !admitted {
            continue;
        }
        bwd.relax(u, sc.from, d + sc.cost);
    }
}
