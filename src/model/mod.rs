pub mod edge_id;
pub mod edge_metadata;
pub mod graph_error;
pub mod graph_store;
pub mod high_cell;
pub mod query_result;
pub mod rows;
pub mod shortcut;

pub use edge_id::EdgeId;
pub use graph_error::GraphStoreError;
pub use graph_store::{GraphStore, GraphStoreBuilder};
pub use high_cell::HighCell;
pub use query_result::QueryResult;
pub use shortcut::{InsideTag, Shortcut};
