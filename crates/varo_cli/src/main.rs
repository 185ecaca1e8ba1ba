//! CLI catalog probe.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `varo_core` linkage.
//! - Optionally load a node payload file and print per-view summaries.

use std::process::ExitCode;

use varo_core::{CatalogStore, DISPLAY_MODES};

fn main() -> ExitCode {
    println!("varo_core ping={}", varo_core::ping());
    println!("varo_core version={}", varo_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    let payload = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match varo_core::parse_nodes_json(&payload) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("failed to parse `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    let mut store = CatalogStore::new();
    store.set_nodes(result.nodes);

    println!(
        "catalog: {} nodes, {} groups, {} categories",
        store.nodes().len(),
        store.groups().len(),
        store.categories().len()
    );

    for mode in DISPLAY_MODES {
        store.set_display_mode(mode);
        match mode {
            varo_core::DisplayMode::Ungrouped => {
                println!("[{}] {} nodes", mode, store.filtered_nodes().len());
            }
            varo_core::DisplayMode::Grouped => {
                println!("[{}] {} groups", mode, store.filtered_groups().len());
            }
            _ => {
                let categories = store.filtered_categories();
                for category in categories {
                    println!(
                        "[{}] {}: {} loose, {} groups",
                        mode,
                        category.name,
                        category.nodes.len(),
                        category.groups.len()
                    );
                }
            }
        }
    }

    ExitCode::SUCCESS
}
