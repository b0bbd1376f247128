use crate::model::edge_id::EdgeId;
use crate::model::edge_metadata::EdgeMetadata;
use crate::model::graph_error::GraphStoreError;
use crate::model::rows::{EdgeMetadataRow, ShortcutRow};
use crate::model::shortcut::{InsideTag, Shortcut};
use crate::unit::Cost;
use indexmap::IndexMap;

/// Read-only in-memory graph: a flat shortcut array plus per-direction adjacency from edge id to
/// the indices of shortcuts that depart from (forward) or arrive at (backward) it, and a map of
/// immutable per-edge metadata.
///
/// Adjacency is an insertion-ordered map rather than a dense CSR array, per `SPEC_FULL.md` §9:
/// edge ids come from an external loader and are not guaranteed to be densely packed from zero,
/// but iteration order must still be stable for reproducible path output.
#[derive(Debug)]
pub struct GraphStore {
    shortcuts: Vec<Shortcut>,
    forward: IndexMap<EdgeId, Vec<u32>>,
    backward: IndexMap<EdgeId, Vec<u32>>,
    metadata: IndexMap<EdgeId, EdgeMetadata>,
}

impl GraphStore {
    /// shortcuts departing `u`, in input order.
    pub fn forward_adj(&self, u: EdgeId) -> impl Iterator<Item = &Shortcut> {
        self.forward
            .get(&u)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.shortcuts[idx as usize])
    }

    /// shortcuts arriving at `u`, in input order.
    pub fn backward_adj(&self, u: EdgeId) -> impl Iterator<Item = &Shortcut> {
        self.backward
            .get(&u)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.shortcuts[idx as usize])
    }

    pub fn edge_metadata(&self, id: EdgeId) -> Option<&EdgeMetadata> {
        self.metadata.get(&id)
    }

    /// the edge's own traversal cost, or `0` if the edge has no metadata.
    pub fn edge_cost(&self, id: EdgeId) -> Cost {
        self.metadata.get(&id).map(|m| m.cost).unwrap_or(Cost::ZERO)
    }

    /// the edge's incoming cell, or `0` (global) if the edge has no metadata.
    pub fn edge_cell(&self, id: EdgeId) -> u64 {
        self.metadata.get(&id).map(|m| m.incoming_cell).unwrap_or(0)
    }

    pub fn n_shortcuts(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn n_known_edges(&self) -> usize {
        self.metadata.len()
    }
}

/// Validates and assembles a [`GraphStore`] from caller-supplied rows. See `SPEC_FULL.md` §6/§7
/// for the row shapes and malformed-row handling this builder implements.
#[derive(Default)]
pub struct GraphStoreBuilder {
    shortcut_rows: Vec<ShortcutRow>,
    metadata_rows: Vec<EdgeMetadataRow>,
}

impl GraphStoreBuilder {
    pub fn new() -> GraphStoreBuilder {
        GraphStoreBuilder::default()
    }

    pub fn with_shortcut_rows<I: IntoIterator<Item = ShortcutRow>>(mut self, rows: I) -> Self {
        self.shortcut_rows.extend(rows);
        self
    }

    pub fn with_metadata_rows<I: IntoIterator<Item = EdgeMetadataRow>>(mut self, rows: I) -> Self {
        self.metadata_rows.extend(rows);
        self
    }

    pub fn build(self) -> Result<GraphStore, GraphStoreError> {
        let mut metadata: IndexMap<EdgeId, EdgeMetadata> = IndexMap::new();
        let mut skipped_metadata = 0usize;
        for row in self.metadata_rows {
            match validate_metadata_row(&row) {
                Some((id, meta)) => {
                    metadata.insert(id, meta);
                }
                None => skipped_metadata += 1,
            }
        }
        if skipped_metadata > 0 {
            log::warn!("skipped {skipped_metadata} malformed edge metadata rows during graph build");
        }
        if metadata.is_empty() {
            return Err(GraphStoreError::EmptyMetadata);
        }

        let mut shortcuts: Vec<Shortcut> = Vec::with_capacity(self.shortcut_rows.len());
        let mut forward: IndexMap<EdgeId, Vec<u32>> = IndexMap::new();
        let mut backward: IndexMap<EdgeId, Vec<u32>> = IndexMap::new();
        let mut rejected_inside = 0usize;
        for row in self.shortcut_rows {
            let inside = match InsideTag::try_from(row.inside) {
                Ok(tag) => tag,
                Err(err) => {
                    log::warn!("rejecting shortcut {}->{}: {err}", row.incoming_edge, row.outgoing_edge);
                    rejected_inside += 1;
                    continue;
                }
            };
            let from = EdgeId(row.incoming_edge);
            let to = EdgeId(row.outgoing_edge);
            let idx = shortcuts.len() as u32;
            shortcuts.push(Shortcut {
                from,
                to,
                cost: Cost::new(row.cost),
                via_edge: if row.via_edge == 0 { None } else { Some(EdgeId(row.via_edge)) },
                cell: row.cell,
                inside,
            });
            forward.entry(from).or_default().push(idx);
            backward.entry(to).or_default().push(idx);
        }

        log::info!(
            "graph store built: {} shortcuts accepted, {} rejected for unknown inside tag, {} edges with metadata",
            shortcuts.len(),
            rejected_inside,
            metadata.len(),
        );

        Ok(GraphStore {
            shortcuts,
            forward,
            backward,
            metadata,
        })
    }
}

/// returns `None` (and the row is silently skipped, per `SPEC_FULL.md` §7) if `lca_res` is less
/// than `-1`, or if `cost`/`length` are not finite and non-negative.
fn validate_metadata_row(row: &EdgeMetadataRow) -> Option<(EdgeId, EdgeMetadata)> {
    if row.lca_res < -1 {
        return None;
    }
    if !row.cost.is_finite() || row.cost < 0.0 {
        return None;
    }
    if !row.length.is_finite() || row.length < 0.0 {
        return None;
    }
    Some((
        EdgeId(row.id),
        EdgeMetadata {
            incoming_cell: row.incoming_cell,
            outgoing_cell: row.outgoing_cell,
            lca_res: row.lca_res,
            length: row.length,
            cost: Cost::new(row.cost),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sync<T: Sync>() {}

    #[test]
    fn graph_store_is_sync() {
        assert_sync::<GraphStore>();
    }

    fn meta_row(id: u64, cost: f64) -> EdgeMetadataRow {
        EdgeMetadataRow {
            id,
            incoming_cell: 0,
            outgoing_cell: 0,
            lca_res: -1,
            length: 1.0,
            cost,
        }
    }

    fn shortcut_row(from: u64, to: u64, cost: f64, inside: i8) -> ShortcutRow {
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
    fn empty_metadata_is_a_load_failure() {
        let result = GraphStoreBuilder::new().build();
        assert!(matches!(result, Err(GraphStoreError::EmptyMetadata)));
    }

    #[test]
    fn malformed_metadata_rows_are_skipped_not_fatal() {
        let store = GraphStoreBuilder::new()
            .with_metadata_rows(vec![meta_row(1, -5.0), meta_row(2, 3.0)])
            .build()
            .unwrap();
        assert_eq!(store.n_known_edges(), 1);
        assert_eq!(store.edge_cost(EdgeId(2)), Cost::new(3.0));
    }

    #[test]
    fn unknown_inside_tag_is_rejected() {
        let store = GraphStoreBuilder::new()
            .with_metadata_rows(vec![meta_row(1, 1.0), meta_row(2, 1.0)])
            .with_shortcut_rows(vec![shortcut_row(1, 2, 1.0, 2)])
            .build()
            .unwrap();
        assert_eq!(store.n_shortcuts(), 0);
        assert_eq!(store.forward_adj(EdgeId(1)).count(), 0);
    }

    #[test]
    fn adjacency_preserves_insertion_order() {
        let store = GraphStoreBuilder::new()
            .with_metadata_rows(vec![meta_row(1, 1.0), meta_row(2, 1.0), meta_row(3, 1.0)])
            .with_shortcut_rows(vec![
                shortcut_row(1, 3, 5.0, 1),
                shortcut_row(1, 2, 1.0, 1),
            ])
            .build()
            .unwrap();
        let tos: Vec<EdgeId> = store.forward_adj(EdgeId(1)).map(|sc| sc.to).collect();
        assert_eq!(tos, vec![EdgeId(3), EdgeId(2)]);
    }

    #[test]
    fn unknown_edge_defaults_to_zero_cost_and_global_cell() {
        let store = GraphStoreBuilder::new()
            .with_metadata_rows(vec![meta_row(1, 1.0)])
            .build()
            .unwrap();
        assert_eq!(store.edge_cost(EdgeId(999)), Cost::ZERO);
        assert_eq!(store.edge_cell(EdgeId(999)), 0);
    }
}
