//! Category (domain partition) model.
//!
//! # Responsibility
//! - Represent one domain partition holding loose node ids and group ids.
//!
//! # Invariants
//! - `name` is unique within one derived category collection.
//! - `expanded` is UI-only state and never affects filtering.

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// A domain partition (e.g. "3D", "Compositing") over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Domain label.
    pub name: String,
    /// UI expand/collapse flag; preserved across reloads when possible.
    pub expanded: bool,
    /// Loose (ungrouped) member node ids.
    pub nodes: Vec<NodeId>,
    /// Member group ids.
    pub groups: Vec<String>,
}

impl Category {
    /// Creates an empty, expanded category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expanded: true,
            nodes: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Drops all member ids, keeping name and UI state.
    ///
    /// Used by the projector's reset-then-repopulate pass.
    pub fn clear_members(&mut self) {
        self.nodes.clear();
        self.groups.clear();
    }
}
