//! Pointer-relative surface geometry.
//!
//! # Responsibility
//! - Translate a pointer sample into position/direction/edge metrics for a
//!   rectangular surface.
//!
//! # Invariants
//! - Every function is pure; nothing is cached between samples.
//! - Degenerate surfaces never escape as errors from the default entry
//!   points; they produce neutral metrics.

pub mod pointer;
