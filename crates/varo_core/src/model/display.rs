//! Display mode enumeration.
//!
//! # Responsibility
//! - Enumerate the view styles the projector can expose.
//! - Keep wire values and UI strings in one place.
//!
//! # Invariants
//! - Wire values are the kebab-case strings of the data contract
//!   (`ungrouped`, `grouped`, `category`, `category-grouped`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// View style controlling which partitioning the projector exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Flat filtered node list, no grouping or categorization.
    Ungrouped,
    /// Nodes partitioned into version-family groups only.
    #[default]
    Grouped,
    /// Nodes partitioned into domain categories, no group sub-partition.
    Category,
    /// Categories containing both loose nodes and groups.
    CategoryGrouped,
}

/// Every recognized mode, in UI presentation order.
pub const DISPLAY_MODES: [DisplayMode; 4] = [
    DisplayMode::Ungrouped,
    DisplayMode::Grouped,
    DisplayMode::Category,
    DisplayMode::CategoryGrouped,
];

impl DisplayMode {
    /// Stable wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ungrouped => "ungrouped",
            Self::Grouped => "grouped",
            Self::Category => "category",
            Self::CategoryGrouped => "category-grouped",
        }
    }

    /// Short UI label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ungrouped => "Flat",
            Self::Grouped => "Grouped",
            Self::Category => "Category",
            Self::CategoryGrouped => "Category + Grouped",
        }
    }

    /// One-line UI description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Ungrouped => "All apps listed individually without grouping or categorization.",
            Self::Grouped => "Apps grouped by their group id (e.g., 3ds Max, Nuke, Maya).",
            Self::Category => "Apps displayed by domain (e.g., 3D, 2D, Utility).",
            Self::CategoryGrouped => "Apps categorized by domain and grouped by version family.",
        }
    }
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized display-mode strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDisplayModeError {
    pub value: String,
}

impl Display for ParseDisplayModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized display mode `{}`; expected ungrouped|grouped|category|category-grouped",
            self.value
        )
    }
}

impl Error for ParseDisplayModeError {}

impl FromStr for DisplayMode {
    type Err = ParseDisplayModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "ungrouped" => Ok(Self::Ungrouped),
            "grouped" => Ok(Self::Grouped),
            "category" => Ok(Self::Category),
            "category-grouped" => Ok(Self::CategoryGrouped),
            other => Err(ParseDisplayModeError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayMode, DISPLAY_MODES};

    #[test]
    fn wire_values_round_trip_from_str() {
        for mode in DISPLAY_MODES {
            let parsed: DisplayMode = mode.as_str().parse().expect("wire value should parse");
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn serde_uses_kebab_case_wire_values() {
        let json = serde_json::to_string(&DisplayMode::CategoryGrouped).expect("serialize");
        assert_eq!(json, "\"category-grouped\"");

        let decoded: DisplayMode = serde_json::from_str("\"ungrouped\"").expect("deserialize");
        assert_eq!(decoded, DisplayMode::Ungrouped);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = "tree".parse::<DisplayMode>().expect_err("must reject");
        assert!(err.to_string().contains("tree"));
    }

    #[test]
    fn default_mode_is_grouped() {
        assert_eq!(DisplayMode::default(), DisplayMode::Grouped);
    }
}
