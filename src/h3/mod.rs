//! Thin, total wrapper over the H3 primitives this crate depends on: resolution lookup,
//! ancestor computation, lowest-common-ancestor, and the parent-check predicate used to prune
//! popped nodes against a high cell (see [`crate::model::high_cell`]).
//!
//! Cell `0` is this crate's private sentinel for "absent/global" and is never a valid H3 index,
//! so every function here intercepts it (and any other value that fails to parse as an H3 index)
//! before touching the underlying `h3o` types. None of these functions can fail or panic.

use h3o::{CellIndex, Resolution};

fn to_cell(cell: u64) -> Option<CellIndex> {
    if cell == 0 {
        return None;
    }
    CellIndex::try_from(cell).ok()
}

fn to_resolution(res: i8) -> Option<Resolution> {
    if res < 0 {
        return None;
    }
    Resolution::try_from(res as u8).ok()
}

/// Hierarchy level of `cell`, or `-1` if `cell` is `0` or not a valid H3 index.
pub fn resolution(cell: u64) -> i8 {
    match to_cell(cell) {
        None => -1,
        Some(c) => u8::from(c.resolution()) as i8,
    }
}

/// Ancestor of `cell` at `target_res`. Returns `0` if `cell == 0` or `target_res < 0`; returns
/// `cell` unchanged if `target_res >= resolution(cell)`.
pub fn parent(cell: u64, target_res: i8) -> u64 {
    let Some(c) = to_cell(cell) else {
        return 0;
    };
    let Some(target) = to_resolution(target_res) else {
        return 0;
    };
    if u8::from(target) as i8 >= u8::from(c.resolution()) as i8 {
        return cell;
    }
    c.parent(target).map(u64::from).unwrap_or(0)
}

/// Lowest common ancestor of `a` and `b`, or `0` if either is `0`/invalid or no common ancestor
/// exists. Raises both cells to the coarser of their two resolutions, then walks both upward in
/// lockstep one level at a time until they agree or resolution `0` is exhausted.
pub fn lca(a: u64, b: u64) -> u64 {
    let (Some(ca), Some(cb)) = (to_cell(a), to_cell(b)) else {
        return 0;
    };
    let coarse_res = u8::from(ca.resolution()).min(u8::from(cb.resolution()));
    // `coarse_res` never exceeds either cell's own resolution, so these parent calls always
    // succeed.
    let coarse = Resolution::try_from(coarse_res).expect("coarse_res is a valid H3 resolution");
    let mut pa = ca.parent(coarse).expect("raising to a coarser resolution always succeeds");
    let mut pb = cb.parent(coarse).expect("raising to a coarser resolution always succeeds");
    let mut res = coarse_res;
    loop {
        if pa == pb {
            return u64::from(pa);
        }
        if res == 0 {
            return 0;
        }
        res -= 1;
        let next = Resolution::try_from(res).expect("res was decremented from a valid resolution");
        pa = pa.parent(next).expect("parent at a lower resolution always succeeds");
        pb = pb.parent(next).expect("parent at a lower resolution always succeeds");
    }
}

/// `true` iff pruning is disabled (`high_cell == 0 || high_res < 0`); otherwise `false` if
/// `node_cell` is `0`/invalid or `high_res` is finer than `node_cell`'s own resolution, else
/// whether `node_cell`'s ancestor at `high_res` equals `high_cell`.
pub fn parent_check(node_cell: u64, high_cell: u64, high_res: i8) -> bool {
    if high_cell == 0 || high_res < 0 {
        return true;
    }
    if node_cell == 0 {
        return false;
    }
    if high_res > resolution(node_cell) {
        return false;
    }
    parent(node_cell, high_res) == high_cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use h3o::LatLng;

    // resolution-9 cells derived from real coordinates via h3o, rather than hardcoded index
    // literals, so the tests don't depend on memorized-correct H3 index bit patterns. The two
    // points are on opposite sides of the globe and land in different base cells.
    fn cell_at(lat: f64, lng: f64, res: Resolution) -> u64 {
        u64::from(LatLng::new(lat, lng).unwrap().to_cell(res))
    }

    fn res9(lat: f64, lng: f64) -> u64 {
        cell_at(lat, lng, Resolution::Nine)
    }

    // San Francisco, the canonical H3 documentation example point.
    fn sf_cell() -> u64 {
        res9(37.775938728915946, -122.41795063018799)
    }

    // Null Island, on the opposite side of the globe from San Francisco.
    fn far_cell() -> u64 {
        res9(0.0, 0.0)
    }

    #[test]
    fn resolution_of_global_is_negative_one() {
        assert_eq!(resolution(0), -1);
    }

    #[test]
    fn resolution_of_real_cell_matches_h3() {
        let raw = sf_cell();
        let cell = CellIndex::try_from(raw).unwrap();
        assert_eq!(resolution(raw), u8::from(cell.resolution()) as i8);
    }

    #[test]
    fn parent_of_global_is_global() {
        assert_eq!(parent(0, 3), 0);
    }

    #[test]
    fn parent_with_negative_target_is_global() {
        assert_eq!(parent(sf_cell(), -1), 0);
    }

    #[test]
    fn parent_at_own_resolution_is_identity() {
        let r = resolution(sf_cell());
        assert_eq!(parent(sf_cell(), r), sf_cell());
    }

    #[test]
    fn parent_at_finer_resolution_is_unchanged() {
        let r = resolution(sf_cell());
        assert_eq!(parent(sf_cell(), r + 1), sf_cell());
    }

    #[test]
    fn lca_of_equal_cells_is_identity() {
        assert_eq!(lca(sf_cell(), sf_cell()), sf_cell());
    }

    #[test]
    fn lca_is_commutative() {
        let parent_cell = parent(sf_cell(), resolution(sf_cell()) - 1);
        assert_eq!(lca(sf_cell(), parent_cell), lca(parent_cell, sf_cell()));
    }

    #[test]
    fn lca_of_ancestor_and_descendant_is_the_ancestor() {
        let ancestor = parent(sf_cell(), 2);
        assert_eq!(lca(sf_cell(), ancestor), ancestor);
    }

    #[test]
    fn lca_with_global_is_global() {
        assert_eq!(lca(0, sf_cell()), 0);
        assert_eq!(lca(sf_cell(), 0), 0);
    }

    #[test]
    fn parent_check_disabled_is_always_true() {
        assert!(parent_check(sf_cell(), 0, -1));
        assert!(parent_check(0, 0, -1));
    }

    #[test]
    fn parent_check_rejects_global_node_when_enabled() {
        assert!(!parent_check(0, sf_cell(), resolution(sf_cell())));
    }

    #[test]
    fn parent_check_true_for_self() {
        let r = resolution(sf_cell());
        assert!(parent_check(sf_cell(), sf_cell(), r));
    }

    #[test]
    fn parent_check_false_when_high_res_finer_than_node() {
        let parent_cell = parent(sf_cell(), resolution(sf_cell()) - 1);
        // node is coarser than high_res -> can't have an ancestor at a finer resolution
        assert!(!parent_check(parent_cell, sf_cell(), resolution(sf_cell())));
    }

    #[test]
    fn parent_check_false_when_outside_subtree() {
        // far_cell() sits in a different base cell, so it is not a descendant of a high cell
        // derived from sf_cell().
        let high = parent(sf_cell(), resolution(sf_cell()) - 1);
        assert!(!parent_check(far_cell(), high, resolution(high)));
    }
}
