//! Catalog query entry points.
//!
//! # Responsibility
//! - Derive filtered views and aggregate statistics from a canonical
//!   collection without mutating it.

pub mod query;
