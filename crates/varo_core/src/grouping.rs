//! Grouping engine: pure derivation of groups and categories.
//!
//! # Responsibility
//! - Partition a node collection into version-family groups.
//! - Partition nodes and groups into domain categories.
//! - Resolve each family's selected/default variant.
//!
//! # Invariants
//! - No empty group is ever materialized.
//! - Group and member ordering is stable first-encounter order.
//! - Category ordering is alphabetical, case-insensitive.
//! - A group's category is taken from its first-seen member and never moves.

use crate::model::category::Category;
use crate::model::group::NodeGroup;
use crate::model::node::{node_by_id, Node, NodeId};

/// Builds version-family groups from a node collection.
///
/// Nodes without a grouping key are excluded entirely; they surface only
/// through category loose lists, never as singleton families. Groups come
/// out in first-encounter order, members in encounter order.
pub fn build_groups(nodes: &[Node]) -> Vec<NodeGroup> {
    let mut groups: Vec<NodeGroup> = Vec::new();

    for node in nodes {
        let Some(key) = node.group_key() else {
            continue;
        };

        let index = match groups.iter().position(|group| group.id == key) {
            Some(index) => index,
            None => {
                // First-seen member fixes the family's category for good.
                groups.push(NodeGroup::new(key, node.category_label()));
                groups.len() - 1
            }
        };
        groups[index].nodes.push(node.id.clone());
    }

    groups
}

/// Builds domain categories from a node collection and its derived groups.
///
/// Every node's own category label gets a Category; ungrouped nodes land in
/// their category's loose list, and each group is attached exactly once,
/// under the group's own category (not the visiting member's, so a family
/// never straddles two domains). Categories are sorted alphabetically,
/// case-insensitive, for stable presentation across reloads.
pub fn build_categories(nodes: &[Node], groups: &[NodeGroup]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for node in nodes {
        let label = node.category_label();
        ensure_category(&mut categories, label);

        match node.group_key() {
            None => {
                if let Some(category) = category_mut(&mut categories, label) {
                    category.nodes.push(node.id.clone());
                }
            }
            Some(key) => {
                let Some(group) = groups.iter().find(|group| group.id == key) else {
                    continue;
                };
                let group_category = group.category.clone();
                ensure_category(&mut categories, &group_category);
                if let Some(category) = category_mut(&mut categories, &group_category) {
                    if !category.groups.iter().any(|id| *id == group.id) {
                        category.groups.push(group.id.clone());
                    }
                }
            }
        }
    }

    categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    categories
}

/// Resolves a family's active variant id.
///
/// Chain: explicit override while it still names a member, else the first
/// member flagged `defaultForGroup`, else the first member. Pure over the
/// inputs, so re-derivation stays deterministic.
pub fn selected_node_id<'a>(group: &'a NodeGroup, nodes: &'a [Node]) -> Option<&'a NodeId> {
    if let Some(explicit) = &group.selected_node_id {
        if group.contains(explicit) && node_by_id(nodes, explicit).is_some() {
            return Some(explicit);
        }
    }

    let members: Vec<&Node> = group
        .nodes
        .iter()
        .filter_map(|id| node_by_id(nodes, id))
        .collect();

    members
        .iter()
        .copied()
        .find(|member| member.default_for_group)
        .or_else(|| members.first().copied())
        .map(|member| &member.id)
}

/// Resolves a family's active variant node.
pub fn selected_node<'a>(group: &NodeGroup, nodes: &'a [Node]) -> Option<&'a Node> {
    let id = selected_node_id(group, nodes)?.clone();
    node_by_id(nodes, &id)
}

fn ensure_category(categories: &mut Vec<Category>, name: &str) {
    if !categories.iter().any(|category| category.name == name) {
        categories.push(Category::new(name));
    }
}

fn category_mut<'a>(categories: &'a mut [Category], name: &str) -> Option<&'a mut Category> {
    categories.iter_mut().find(|category| category.name == name)
}
