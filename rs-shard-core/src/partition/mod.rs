//! Top-level module for the partition assignment system.
//!
//! This module covers the full key-to-partition pipeline:
//! - Exact digest-to-integer conversion (`hash_key`)
//! - Proportional range division of the 128-bit keyspace (`mapper`)
//! - Batch analysis of key lists (`analyzer`)
//! - Per-partition counts and summary statistics (`summary`)

/// Batch analysis applying the digest encoder, the hash-key converter
/// and the partition mapper across a list of keys.
pub mod analyzer;

/// Exact conversion of a 32-hex-character digest into a `u128` hash key.
pub mod hash_key;

/// Equal-width range partitioning of the `[0, 2^128)` keyspace.
pub mod mapper;

/// Aggregation of partition indexes into counts and summary statistics.
pub mod summary;
