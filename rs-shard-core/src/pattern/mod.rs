//! Top-level module for the pattern-based key generator.
//!
//! The supported dialect is a strict subset of regular-expression
//! syntax: literals, bracket character classes (with ranges), the
//! `\d`/`\w`/`\s` escape classes and quantifiers. Groups, alternation
//! and negated classes are rejected by design.

/// Random sampling of concrete strings from compiled patterns.
pub mod generator;

/// Single-pass compilation of a pattern string into atom/repeat pieces.
pub mod parser;
