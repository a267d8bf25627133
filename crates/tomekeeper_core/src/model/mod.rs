//! Catalog domain model.
//!
//! # Responsibility
//! - Define canonical catalog records and their typed edit drafts.
//! - Keep field validation next to the data it guards.
//!
//! # Invariants
//! - Every `CatalogItem` in a canonical collection has a unique `id`.
//! - Drafts are plain strings until `CatalogItemDraft::validate` succeeds.
//! - `RareItem` records are read-only once loaded.

pub mod catalog_item;
pub mod rare_item;
