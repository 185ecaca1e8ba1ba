//! Node group (version family) model.
//!
//! # Responsibility
//! - Represent one family of nodes sharing a group id.
//! - Carry the explicit variant override; resolution lives in `grouping`.
//!
//! # Invariants
//! - `nodes` holds member ids in encounter order; it is never empty in
//!   engine output (empty families are not materialized).
//! - `selected_node_id` stores only an explicit user choice; `None` means
//!   the default chain is re-derived on every read.

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// A family of nodes sharing a group identifier (e.g. every "Maya" build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroup {
    /// The shared group id of the member nodes.
    pub id: String,
    /// Display label; the data source keys families by id, so this mirrors it.
    pub name: String,
    /// Category label of the first-seen member (see grouping tie-break).
    pub category: String,
    /// Soft override hiding the whole family regardless of member state.
    pub visible: bool,
    /// Member node ids, encounter order from the source collection.
    pub nodes: Vec<NodeId>,
    /// Explicit user-selected variant; `None` derives from member defaults.
    pub selected_node_id: Option<NodeId>,
}

impl NodeGroup {
    /// Creates an empty family shell for the engine to populate.
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            category: category.into(),
            visible: true,
            nodes: Vec::new(),
            selected_node_id: None,
        }
    }

    /// Whether the given node id belongs to this family.
    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.iter().any(|member| member == node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::NodeGroup;

    #[test]
    fn new_mirrors_id_into_name() {
        let group = NodeGroup::new("3dsmax", "3D");

        assert_eq!(group.id, "3dsmax");
        assert_eq!(group.name, "3dsmax");
        assert_eq!(group.category, "3D");
        assert!(group.visible);
        assert!(group.nodes.is_empty());
        assert_eq!(group.selected_node_id, None);
    }

    #[test]
    fn contains_checks_membership() {
        let mut group = NodeGroup::new("maya", "3D");
        group.nodes.push("uuid-maya-2024".to_string());

        assert!(group.contains("uuid-maya-2024"));
        assert!(!group.contains("uuid-maya-2020"));
    }
}
