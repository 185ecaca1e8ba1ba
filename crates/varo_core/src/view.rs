//! View projector: search and visibility filtering.
//!
//! # Responsibility
//! - Filter node and group collections by search text and hidden-state.
//! - Keep filtering pure; the store composes these into its derived views.
//!
//! # Invariants
//! - Input order is preserved in every filtered result.
//! - Node matching tests name and description; group matching tests the
//!   *group's* visible flag against each member's *name* match. The
//!   asymmetry is observable contract, not an accident.

use crate::model::group::NodeGroup;
use crate::model::node::{node_by_id, Node};

/// Trims and lowercases raw search input; empty means "match everything".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Filters nodes by visibility and search text, preserving input order.
///
/// A node passes when `show_hidden || node.visible`, and the normalized
/// query is empty or matches its name or description case-insensitively.
pub fn filter_nodes<'a>(nodes: &'a [Node], query: &str, show_hidden: bool) -> Vec<&'a Node> {
    let query = normalize_query(query);

    nodes
        .iter()
        .filter(|node| {
            let matches_search = query.is_empty()
                || node.name.to_lowercase().contains(&query)
                || node
                    .description
                    .as_ref()
                    .is_some_and(|text| text.to_lowercase().contains(&query));
            let is_visible = show_hidden || node.visible;
            matches_search && is_visible
        })
        .collect()
}

/// Filters groups by family visibility and per-member name matches.
///
/// A group passes when at least one member satisfies
/// `(show_hidden || group.visible) && (query empty || member name matches)`.
/// Member descriptions do not participate, and a hidden family stays
/// excluded even when a member's name matches.
pub fn filter_groups<'a>(
    groups: &'a [NodeGroup],
    nodes: &[Node],
    query: &str,
    show_hidden: bool,
) -> Vec<&'a NodeGroup> {
    let query = normalize_query(query);

    groups
        .iter()
        .filter(|group| {
            group.nodes.iter().any(|id| {
                let Some(member) = node_by_id(nodes, id) else {
                    return false;
                };
                let matches_search =
                    query.is_empty() || member.name.to_lowercase().contains(&query);
                let is_visible = show_hidden || group.visible;
                matches_search && is_visible
            })
        })
        .collect()
}
