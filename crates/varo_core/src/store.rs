//! Catalog store: the single owner of current catalog state.
//!
//! # Responsibility
//! - Hold the canonical node collection plus derived groups/categories.
//! - Hold UI filter state (search text, hidden toggle, display mode).
//! - Expose every mutation entry point and the filtered views.
//!
//! # Invariants
//! - `set_nodes` is the only mutation path into derived structure; it
//!   rebuilds groups and categories synchronously and wholesale.
//! - Visibility toggles mutate canonical objects in place and are visible
//!   through every view without a rebuild.
//! - `filtered_categories` is non-reentrant; the `&mut self` receiver is
//!   the lock.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::info;

use crate::grouping;
use crate::model::category::Category;
use crate::model::display::DisplayMode;
use crate::model::group::NodeGroup;
use crate::model::node::{node_by_id, Node, NodeId};
use crate::source::{self, SourceError};
use crate::view;

/// Error for store mutations that target a specific catalog object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No node with the given id exists in the current catalog.
    NodeNotFound(NodeId),
    /// No group with the given id exists in the current catalog.
    GroupNotFound(String),
    /// No category with the given name exists in the current catalog.
    CategoryNotFound(String),
    /// The node exists but is not a member of the addressed group.
    NodeNotInGroup { group_id: String, node_id: NodeId },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodeNotFound(id) => write!(f, "node not found: {id}"),
            Self::GroupNotFound(id) => write!(f, "group not found: {id}"),
            Self::CategoryNotFound(name) => write!(f, "category not found: {name}"),
            Self::NodeNotInGroup { group_id, node_id } => {
                write!(f, "node {node_id} is not a member of group {group_id}")
            }
        }
    }
}

impl Error for StoreError {}

/// Process-wide catalog state container.
///
/// Constructed once per session and passed by reference to whatever
/// consumes it; nothing here is a global.
#[derive(Debug, Default)]
pub struct CatalogStore {
    nodes: Vec<Node>,
    groups: Vec<NodeGroup>,
    categories: Vec<Category>,
    /// Current search text; matched case-insensitively after trimming.
    pub search_query: String,
    /// When true, soft-hidden nodes and groups pass visibility filtering.
    pub show_hidden_nodes: bool,
    /// Active view style for the presentation layer.
    pub display_mode: DisplayMode,
}

impl CatalogStore {
    /// Creates an empty store with default filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the node collection wholesale and rebuilds derived state.
    ///
    /// Fresh groups discard any explicit variant selections. Category
    /// expand/collapse flags are carried over by matching name.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        let collapsed: Vec<String> = self
            .categories
            .iter()
            .filter(|category| !category.expanded)
            .map(|category| category.name.clone())
            .collect();

        self.nodes = nodes;
        self.groups = grouping::build_groups(&self.nodes);
        self.categories = grouping::build_categories(&self.nodes, &self.groups);

        for category in &mut self.categories {
            if collapsed.iter().any(|name| *name == category.name) {
                category.expanded = false;
            }
        }

        info!(
            "event=catalog_rebuilt module=store status=ok nodes={} groups={} categories={}",
            self.nodes.len(),
            self.groups.len(),
            self.categories.len()
        );
    }

    /// Ingests a raw data-source payload.
    ///
    /// On success the catalog is replaced and accumulated data warnings are
    /// returned. On failure prior state is left completely untouched.
    ///
    /// # Errors
    /// - [`SourceError`] when the payload is not a JSON array.
    pub fn ingest_payload(
        &mut self,
        payload: &serde_json::Value,
    ) -> Result<Vec<String>, SourceError> {
        let result = source::parse_node_payload(payload)?;
        self.set_nodes(result.nodes);
        Ok(result.warnings)
    }

    /// Canonical node collection, raw order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Derived version-family groups, first-encounter order.
    pub fn groups(&self) -> &[NodeGroup] {
        &self.groups
    }

    /// Derived domain categories, alphabetical order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up one node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        node_by_id(&self.nodes, id)
    }

    /// Looks up one group by id.
    pub fn group(&self, id: &str) -> Option<&NodeGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// Flips one node's soft-hidden flag in place; no rebuild.
    ///
    /// Returns the new visibility state. Reverse scan so a duplicate id
    /// addresses the same record every other id-keyed lookup resolves.
    pub fn toggle_node_visibility(&mut self, id: &str) -> Result<bool, StoreError> {
        let node = self
            .nodes
            .iter_mut()
            .rev()
            .find(|node| node.id == id)
            .ok_or_else(|| StoreError::NodeNotFound(id.to_string()))?;
        node.visible = !node.visible;
        Ok(node.visible)
    }

    /// Flips one group's soft-hidden override in place; no rebuild.
    ///
    /// Returns the new visibility state.
    pub fn toggle_group_visibility(&mut self, id: &str) -> Result<bool, StoreError> {
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.id == id)
            .ok_or_else(|| StoreError::GroupNotFound(id.to_string()))?;
        group.visible = !group.visible;
        Ok(group.visible)
    }

    /// Marks every node visible. Idempotent.
    pub fn unhide_all_nodes(&mut self) {
        for node in &mut self.nodes {
            node.visible = true;
        }
    }

    /// Marks every group visible. Idempotent.
    pub fn unhide_all_groups(&mut self) {
        for group in &mut self.groups {
            group.visible = true;
        }
    }

    /// Flips whether soft-hidden entries pass visibility filtering.
    pub fn toggle_hidden_node_visibility(&mut self) {
        self.show_hidden_nodes = !self.show_hidden_nodes;
    }

    /// Replaces the current search text.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Switches the active view style.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// Flips one category's expand/collapse flag.
    ///
    /// Returns the new expanded state. UI-only; never affects filtering.
    pub fn toggle_category_expanded(&mut self, name: &str) -> Result<bool, StoreError> {
        let category = self
            .categories
            .iter_mut()
            .find(|category| category.name == name)
            .ok_or_else(|| StoreError::CategoryNotFound(name.to_string()))?;
        category.expanded = !category.expanded;
        Ok(category.expanded)
    }

    /// Records an explicit variant selection for a family.
    ///
    /// The override persists until the next `set_nodes` rebuild.
    ///
    /// # Errors
    /// - `GroupNotFound` when no such family exists.
    /// - `NodeNotInGroup` when the node is not one of its members.
    pub fn select_group_variant(&mut self, group_id: &str, node_id: &str) -> Result<(), StoreError> {
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.id == group_id)
            .ok_or_else(|| StoreError::GroupNotFound(group_id.to_string()))?;
        if !group.contains(node_id) {
            return Err(StoreError::NodeNotInGroup {
                group_id: group_id.to_string(),
                node_id: node_id.to_string(),
            });
        }
        group.selected_node_id = Some(node_id.to_string());
        Ok(())
    }

    /// Resolves a family's active variant through the default chain.
    pub fn selected_node(&self, group_id: &str) -> Option<&Node> {
        let group = self.group(group_id)?;
        grouping::selected_node(group, &self.nodes)
    }

    /// Nodes passing the current search and visibility filters, raw order.
    pub fn filtered_nodes(&self) -> Vec<&Node> {
        view::filter_nodes(&self.nodes, &self.search_query, self.show_hidden_nodes)
    }

    /// Groups passing the current filters, first-encounter order.
    pub fn filtered_groups(&self) -> Vec<&NodeGroup> {
        view::filter_groups(
            &self.groups,
            &self.nodes,
            &self.search_query,
            self.show_hidden_nodes,
        )
    }

    /// Recomputes every category's member lists from the current filters.
    ///
    /// Full reset-then-repopulate over the store's own category objects on
    /// every call; O(categories x filtered entries), fine at catalog scale.
    /// In `category` mode every filtered node lands loose and no group is
    /// attached; in every other mode loose membership is restricted to
    /// ungrouped nodes and filtered groups attach by category equality, so
    /// a node never appears both loose and inside a group in one snapshot.
    pub fn filtered_categories(&mut self) -> &[Category] {
        let loose_all = self.display_mode == DisplayMode::Category;

        let picked_nodes: Vec<(String, NodeId)> = self
            .filtered_nodes()
            .into_iter()
            .filter(|node| loose_all || node.group_key().is_none())
            .map(|node| (node.category_label().to_string(), node.id.clone()))
            .collect();

        let picked_groups: Vec<(String, String)> = if loose_all {
            Vec::new()
        } else {
            self.filtered_groups()
                .into_iter()
                .map(|group| (group.category.clone(), group.id.clone()))
                .collect()
        };

        for category in &mut self.categories {
            category.clear_members();
        }
        for category in &mut self.categories {
            for (label, id) in &picked_nodes {
                if *label == category.name {
                    category.nodes.push(id.clone());
                }
            }
            for (label, id) in &picked_groups {
                if *label == category.name {
                    category.groups.push(id.clone());
                }
            }
        }

        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogStore, StoreError};
    use crate::model::node::Node;

    fn grouped(id: &str, name: &str, group: &str, category: &str) -> Node {
        let mut node = Node::new(id, name);
        node.group_id = group.to_string();
        node.category = category.to_string();
        node
    }

    #[test]
    fn toggle_node_visibility_flips_in_place() {
        let mut store = CatalogStore::new();
        store.set_nodes(vec![Node::new("a", "Tool")]);

        assert_eq!(store.toggle_node_visibility("a"), Ok(false));
        assert_eq!(store.toggle_node_visibility("a"), Ok(true));
        assert_eq!(
            store.toggle_node_visibility("missing"),
            Err(StoreError::NodeNotFound("missing".to_string()))
        );
    }

    #[test]
    fn select_group_variant_validates_membership() {
        let mut store = CatalogStore::new();
        store.set_nodes(vec![
            grouped("a", "Tool 1.0", "g1", "3D"),
            Node::new("loose", "Other"),
        ]);

        assert_eq!(store.select_group_variant("g1", "a"), Ok(()));
        assert_eq!(
            store.select_group_variant("g1", "loose"),
            Err(StoreError::NodeNotInGroup {
                group_id: "g1".to_string(),
                node_id: "loose".to_string(),
            })
        );
        assert_eq!(
            store.select_group_variant("nope", "a"),
            Err(StoreError::GroupNotFound("nope".to_string()))
        );
    }

    #[test]
    fn set_nodes_preserves_collapsed_categories_by_name() {
        let mut store = CatalogStore::new();
        store.set_nodes(vec![grouped("a", "Tool 1.0", "g1", "3D")]);
        assert_eq!(store.toggle_category_expanded("3D"), Ok(false));

        store.set_nodes(vec![
            grouped("a", "Tool 1.0", "g1", "3D"),
            Node::new("b", "Other"),
        ]);

        let by_name: Vec<(&str, bool)> = store
            .categories()
            .iter()
            .map(|category| (category.name.as_str(), category.expanded))
            .collect();
        assert_eq!(by_name, vec![("3D", false), ("Uncategorized", true)]);
    }
}
