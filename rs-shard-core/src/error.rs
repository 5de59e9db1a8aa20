use thiserror::Error;

/// Errors raised by the partitioning and pattern components.
///
/// Every error is raised at the point of detection and propagates
/// unchanged to the caller; no component retries or substitutes a
/// default. The two deliberate exceptions are documented on
/// [`summarize`](crate::partition::summary::summarize) (out-of-range
/// indexes are dropped) and
/// [`generate_many`](crate::pattern::generator::generate_many)
/// (counts are clamped, not rejected).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The digest string is not exactly 32 hex characters after
	/// trimming and lowercasing.
	#[error("digest must be exactly 32 hex characters, got {0:?}")]
	InvalidDigestFormat(String),

	/// The partition count is zero (the keyspace cannot be divided
	/// into zero ranges).
	#[error("partition count must be >= 1, got {0}")]
	InvalidPartitionCount(u64),

	/// The pattern uses syntax outside the supported dialect
	/// (groups, alternation or negated character classes).
	#[error("unsupported pattern syntax: {0}")]
	UnsupportedSyntax(String),

	/// A character class closed without collecting any candidate.
	#[error("empty character class")]
	EmptyCharClass,

	/// A character range runs backwards (end before start).
	#[error("invalid character range {start:?}-{end:?}")]
	InvalidRange { start: char, end: char },

	/// A character class was opened but its `]` never appeared.
	#[error("unterminated character class")]
	UnterminatedCharClass,

	/// The pattern ends on a bare `\`.
	#[error("unterminated escape at end of pattern")]
	UnterminatedEscape,

	/// A quantifier character appeared with no atom before it.
	#[error("quantifier {0:?} has no preceding atom")]
	DanglingQuantifier(char),

	/// A `{...}` repetition is malformed or out of bounds.
	#[error("invalid quantifier: {0}")]
	InvalidQuantifier(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
