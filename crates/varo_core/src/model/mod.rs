//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical node record and the derived group/category shapes.
//! - Keep derived structures id-indexed so they share the store's canonical
//!   node instances instead of copying them.
//!
//! # Invariants
//! - Every catalog object is addressed by a stable, data-source-supplied id.
//! - Derived structures never duplicate node data; they reference by id.

pub mod category;
pub mod display;
pub mod group;
pub mod node;
