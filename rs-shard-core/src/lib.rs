//! Hash-key partitioning simulator library.
//!
//! This crate approximates Kinesis-style hash-key partitioning and provides:
//! - Exact 128-bit digest-to-partition mapping
//! - Batch key analysis and distribution statistics
//! - A restricted-pattern random key generator for stress tests
//!
//! Everything is synchronous and side-effect-free apart from reading the
//! process random source; each call takes all of its inputs as arguments
//! and returns a freshly built result.

/// Error taxonomy shared by all components.
pub mod error;

/// 128-bit digest encoding (the external hash primitive, behind a trait).
pub mod digest;

/// Hash-key conversion, partition mapping, batch analysis and
/// distribution statistics.
pub mod partition;

/// Restricted-pattern compilation and random sequence generation.
pub mod pattern;
