use serde::{Deserialize, Serialize};

/// The shape of a single shortcut record as produced by the (out-of-scope) columnar-file loader.
/// `GraphStoreBuilder` consumes an iterator of these; this crate never reads a file itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortcutRow {
    pub incoming_edge: u64,
    pub outgoing_edge: u64,
    /// `0` means direct (no intermediate edge).
    pub via_edge: u64,
    pub cost: f64,
    pub cell: u64,
    pub inside: i8,
}

/// The shape of a single edge-metadata record as produced by the (out-of-scope) tabular-file
/// loader. Extra columns beyond these six fields are the loader's concern, not this crate's --
/// `GraphStoreBuilder` only ever sees what has already been projected down to this struct.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeMetadataRow {
    pub id: u64,
    pub incoming_cell: u64,
    pub outgoing_cell: u64,
    pub lca_res: i8,
    pub length: f64,
    pub cost: f64,
}
