#[derive(thiserror::Error, Debug)]
pub enum GraphStoreError {
    /// every supplied [`crate::model::rows::EdgeMetadataRow`] was malformed, or none were
    /// supplied at all. An empty shortcut set is not an error -- it just leaves every
    /// non-identity query unreachable.
    #[error("graph store has no valid edge metadata rows; at least one is required")]
    EmptyMetadata,
}
