//! Core query engine for hierarchical shortest-path search over precomputed, H3-keyed shortcut
//! edges. Builds a [`model::GraphStore`] from caller-supplied rows, then answers one-to-one
//! ([`algorithm::search::classic`], [`algorithm::search::pruned`]) and many-to-many
//! ([`algorithm::search::multi`]) queries against it.
//!
//! Loading shortcut/metadata records from files, CLI parsing, and timing instrumentation are
//! callers' concerns; this crate only ever sees already-parsed rows.

pub mod algorithm;
pub mod h3;
pub mod model;
pub mod unit;
