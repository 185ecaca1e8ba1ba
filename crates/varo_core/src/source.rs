//! Data-source ingestion boundary.
//!
//! # Responsibility
//! - Decode raw backend payloads into the canonical node collection.
//! - Surface data-integrity problems as warnings, not crashes.
//!
//! # Invariants
//! - A non-array payload is rejected outright; nothing is partially applied.
//! - A malformed record is skipped with a warning; the rest of the payload
//!   still loads.
//! - Duplicate node ids load as-is with a warning (the later record wins on
//!   any id-keyed lookup downstream).

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{info, warn};
use serde_json::Value;

use crate::model::node::Node;

/// Result type for ingestion APIs.
pub type SourceResult<T> = Result<T, SourceError>;

/// Error rejecting an entire payload at the ingestion boundary.
#[derive(Debug)]
pub enum SourceError {
    /// Payload text is not valid JSON.
    Json(serde_json::Error),
    /// Payload parsed, but the top level is not an array of records.
    NotAnArray { found: &'static str },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid node payload JSON: {err}"),
            Self::NotAnArray { found } => {
                write!(f, "node payload must be a JSON array, got {found}")
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::NotAnArray { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Decoded payload: loaded nodes plus accumulated data warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLoadResult {
    /// Nodes in payload order, minus skipped malformed records.
    pub nodes: Vec<Node>,
    /// Human-readable data-integrity warnings for the diagnostics surface.
    pub warnings: Vec<String>,
}

/// Decodes a node payload from JSON text.
///
/// # Errors
/// - `SourceError::Json` when the text is not valid JSON.
/// - `SourceError::NotAnArray` when the top level is not an array.
pub fn parse_nodes_json(text: &str) -> SourceResult<NodeLoadResult> {
    let payload: Value = serde_json::from_str(text)?;
    parse_node_payload(&payload)
}

/// Decodes an already-parsed node payload value.
///
/// Malformed records are skipped with a warning; duplicate ids are loaded
/// but flagged. Every warning is also emitted through the log facade.
///
/// # Errors
/// - `SourceError::NotAnArray` when the top level is not an array.
pub fn parse_node_payload(payload: &Value) -> SourceResult<NodeLoadResult> {
    let records = payload.as_array().ok_or_else(|| {
        let err = SourceError::NotAnArray {
            found: json_type_name(payload),
        };
        warn!("event=nodes_rejected module=source status=error reason={err}");
        err
    })?;

    let mut nodes: Vec<Node> = Vec::with_capacity(records.len());
    let mut warnings: Vec<String> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        match serde_json::from_value::<Node>(record.clone()) {
            Ok(node) => {
                if !seen_ids.insert(node.id.clone()) {
                    warnings.push(format!(
                        "duplicate node id `{}` at record {index}; later record wins on id lookups",
                        node.id
                    ));
                }
                nodes.push(node);
            }
            Err(err) => {
                warnings.push(format!("skipped malformed node record {index}: {err}"));
            }
        }
    }

    for warning in &warnings {
        warn!("event=node_data_warning module=source status=warn detail={warning}");
    }
    info!(
        "event=nodes_loaded module=source status=ok count={} warnings={}",
        nodes.len(),
        warnings.len()
    );

    Ok(NodeLoadResult { nodes, warnings })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_node_payload, parse_nodes_json, SourceError};
    use serde_json::json;

    #[test]
    fn parses_records_with_wire_defaults() {
        let payload = json!([
            {"id": "uuid-3dsmax-2024", "name": "3ds Max 2024", "groupId": "3dsmax",
             "category": "3D", "defaultForGroup": true},
            {"id": "loose", "name": "Standalone"}
        ]);

        let result = parse_node_payload(&payload).expect("valid payload");

        assert!(result.warnings.is_empty());
        assert_eq!(result.nodes.len(), 2);
        assert!(result.nodes[0].default_for_group);
        assert_eq!(result.nodes[0].group_key(), Some("3dsmax"));
        assert_eq!(result.nodes[1].category_label(), "Uncategorized");
        assert!(result.nodes[1].visible);
    }

    #[test]
    fn non_array_payload_is_rejected() {
        let err = parse_node_payload(&json!({"nodes": []})).expect_err("must reject");
        assert!(matches!(err, SourceError::NotAnArray { found: "an object" }));
    }

    #[test]
    fn malformed_record_is_skipped_with_warning() {
        let payload = json!([
            {"id": "a", "name": "Tool"},
            {"name": "missing id"},
            {"id": "b", "name": "Other"}
        ]);

        let result = parse_node_payload(&payload).expect("array payload");

        assert_eq!(result.nodes.len(), 2);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("record 1"));
    }

    #[test]
    fn duplicate_ids_load_with_warning() {
        let payload = json!([
            {"id": "a", "name": "Tool 1.0"},
            {"id": "a", "name": "Tool 2.0"}
        ]);

        let result = parse_node_payload(&payload).expect("array payload");

        assert_eq!(result.nodes.len(), 2);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("duplicate node id `a`"));
    }

    #[test]
    fn invalid_json_text_is_rejected() {
        let err = parse_nodes_json("not json").expect_err("must reject");
        assert!(matches!(err, SourceError::Json(_)));
    }
}
