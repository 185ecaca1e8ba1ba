//! Core catalog logic for Varo.
//! This crate is the single source of truth for grouping, categorization,
//! default-variant resolution, and filter composition over node catalogs.

pub mod grouping;
pub mod logging;
pub mod model;
pub mod source;
pub mod store;
pub mod view;

pub use grouping::{build_categories, build_groups, selected_node, selected_node_id};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::Category;
pub use model::display::{DisplayMode, ParseDisplayModeError, DISPLAY_MODES};
pub use model::group::NodeGroup;
pub use model::node::{node_by_id, Node, NodeId, NodeStatus, UNCATEGORIZED};
pub use source::{parse_node_payload, parse_nodes_json, NodeLoadResult, SourceError, SourceResult};
pub use store::{CatalogStore, StoreError};
pub use view::{filter_groups, filter_nodes, normalize_query};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
