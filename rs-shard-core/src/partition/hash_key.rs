use crate::error::{Error, Result};

/// Converts a 128-bit digest hex string into its exact integer value.
///
/// The input is trimmed and lowercased before validation, then must be
/// exactly 32 hexadecimal characters. The returned `u128` is the exact
/// base-16 value of those digits; no floating point is involved, so the
/// full 128-bit resolution survives for downstream partitioning.
///
/// # Errors
/// Returns [`Error::InvalidDigestFormat`] if the normalized input is not
/// exactly 32 hex characters. Other lengths are never truncated or padded.
pub fn to_hash_key(digest_hex: &str) -> Result<u128> {
	let normalized = digest_hex.trim().to_lowercase();

	if normalized.len() != 32 || !normalized.bytes().all(|b| b.is_ascii_hexdigit()) {
		return Err(Error::InvalidDigestFormat(digest_hex.to_owned()));
	}

	u128::from_str_radix(&normalized, 16)
		.map_err(|_| Error::InvalidDigestFormat(digest_hex.to_owned()))
}
