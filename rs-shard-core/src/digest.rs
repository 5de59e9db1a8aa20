use md5::{Digest, Md5};

/// The external hash primitive reducing an arbitrary string to a
/// 128-bit digest.
///
/// Implementations must be total (never fail) and deterministic
/// (the same input always yields the same output), and must return
/// exactly 32 lowercase hexadecimal characters.
///
/// # Notes
/// - The production encoder is [`Md5Digest`], the scheme this tool
///   models.
/// - Any `Fn(&str) -> String` also implements the trait, so tests
///   and callers can inject a fixed or synthetic encoder.
pub trait Digest128 {
	/// Returns the 128-bit digest of `input` as 32 lowercase hex
	/// characters.
	fn digest128_hex(&self, input: &str) -> String;
}

impl<F: Fn(&str) -> String> Digest128 for F {
	fn digest128_hex(&self, input: &str) -> String {
		self(input)
	}
}

/// MD5-based digest encoder.
///
/// MD5 is used here purely as a well-distributed 128-bit fingerprint;
/// no cryptographic property is relied upon.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Digest;

impl Digest128 for Md5Digest {
	fn digest128_hex(&self, input: &str) -> String {
		let digest = Md5::digest(input.as_bytes());
		digest.iter().map(|byte| format!("{byte:02x}")).collect()
	}
}
