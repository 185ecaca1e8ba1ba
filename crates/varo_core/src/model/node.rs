//! Node domain model.
//!
//! # Responsibility
//! - Define the wire-faithful catalog entry record.
//! - Provide the defaulting helpers used uniformly by grouping and views.
//!
//! # Invariants
//! - `id` is unique across one loaded catalog and never rewritten in-process.
//! - A blank-after-trim `category` always reads as `"Uncategorized"`.
//! - A blank-after-trim `group_id` means the node is ungrouped.

use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog node.
///
/// Ids are opaque strings minted by the data source; the core never
/// generates or interprets them.
pub type NodeId = String;

/// Category label applied when a node carries none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Presentational badge attached to a node (e.g. "Beta" / "Deprecated").
///
/// Never consulted by filtering or derivation logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub name: String,
    pub color: String,
}

/// One installable/launchable version of a tool.
///
/// Field names on the wire are camelCase, matching the data-source payload
/// (`groupId`, `defaultForGroup`, ...). Everything except `id` and `name`
/// is optional in serialized form and falls back to a defined default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Stable opaque id from the data source.
    pub id: NodeId,
    /// Display label.
    pub name: String,
    /// Domain label; read through [`Node::category_label`] for defaulting.
    #[serde(default = "default_category")]
    pub category: String,
    /// Family identifier; empty means ungrouped.
    #[serde(default)]
    pub group_id: String,
    /// Opaque display-asset reference.
    #[serde(default)]
    pub icon: String,
    /// Soft "hidden" flag the user can toggle; distinct from deletion.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Opaque source-file passthrough; never interpreted by the core.
    #[serde(default)]
    pub filepath: Option<String>,
    /// Marks this node as the preferred variant within its group.
    #[serde(default)]
    pub default_for_group: bool,
    /// Optional free text; participates in node search.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional presentational badge.
    #[serde(default)]
    pub status: Option<NodeStatus>,
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

fn default_visible() -> bool {
    true
}

impl Node {
    /// Creates a node with the same defaults the wire format applies.
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: default_category(),
            group_id: String::new(),
            icon: String::new(),
            visible: true,
            filepath: None,
            default_for_group: false,
            description: None,
            status: None,
        }
    }

    /// Effective category: trimmed label, or [`UNCATEGORIZED`] when blank.
    pub fn category_label(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            UNCATEGORIZED
        } else {
            trimmed
        }
    }

    /// Effective grouping key: `Some(trimmed group id)`, or `None` when the
    /// node is ungrouped.
    pub fn group_key(&self) -> Option<&str> {
        let trimmed = self.group_id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Linear id lookup into a canonical node collection.
///
/// Catalogs top out at a few hundred nodes, so a scan beats maintaining a
/// side index that could drift from the canonical order. Scans from the
/// back: when the data source ships a duplicate id, the later record wins
/// on every id-keyed lookup.
pub fn node_by_id<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    nodes.iter().rev().find(|node| node.id == id)
}
