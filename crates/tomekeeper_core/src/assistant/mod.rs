//! Catalog assistant.
//!
//! # Responsibility
//! - Ask an external chat-completions endpoint about the current catalog.
//! - Answer locally with a keyword responder whenever that call cannot
//!   complete (no key, transport failure, bad status, bad payload).
//!
//! # Invariants
//! - `CatalogAssistant::reply` always returns text; failures never escape.

pub mod client;
pub mod fallback;
pub mod snapshot;
