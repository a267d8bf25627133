//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into catalog use-cases.
//! - Own the canonical collection and its derived filtered view.
//! - Keep renderers decoupled from backing-store details.

pub mod catalog_service;
