//! Learning-domain picker model
//!
//! This crate provides the state behind the "choose your domains" step of
//! learnflow sign-up. It supports:
//! - A two-level hierarchy of categories and learning domains
//! - Per-category expand/collapse state
//! - A flat, render-ready row sequence derived from the expansion state
//! - Per-domain selection that survives collapsing its category
//! - Serializable catalogs with a built-in seed
//!
//! # Example
//!
//! ```
//! use learnflow_core::{Catalog, ExpandableListModel, FlatRow};
//!
//! let mut model = ExpandableListModel::from_catalog(&Catalog::seed());
//! assert_eq!(model.flatten().len(), 3);
//!
//! model.toggle_expanded(0).unwrap();
//! model.toggle_selected(0, 1).unwrap();
//!
//! let rows = model.flatten();
//! assert!(matches!(rows[2], FlatRow::Domain { domain, .. } if domain.is_selected()));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod catalog;
pub mod error;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalog::{Catalog, CategoryDef, DomainDef};
pub use error::{CatalogError, ModelError, RangeTarget};
pub use model::{
    Activation, Category, Domain, DomainRef, ExpandableListModel, FlatRow, IconRef, RowTarget,
};
