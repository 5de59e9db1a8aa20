use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::error::Result;
use crate::pattern::parser::{PatternAtom, PatternPiece, compile};

/// Hard ceiling on the number of strings one call may generate.
pub const MAX_GENERATE_COUNT: i64 = 50_000;

const DIGIT_CHARS: &[u8] = b"0123456789";
const WORD_CHARS: &[u8] =
	b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";
const SPACE_CHARS: &[u8] = b" \t";

/// Samples one concrete string from a compiled piece sequence.
///
/// For each piece in order, a repeat count is drawn (fixed when
/// `min_repeat == max_repeat`, otherwise uniform over the inclusive
/// range) and that many characters are sampled from the atom's
/// alphabet. A character class samples uniformly over its candidate
/// list, so duplicated candidates weigh proportionally more.
pub fn generate_one(pieces: &[PatternPiece]) -> String {
	generate_one_with(pieces, &mut rand::rng())
}

fn generate_one_with<R: Rng>(pieces: &[PatternPiece], rng: &mut R) -> String {
	let mut output = String::new();

	for piece in pieces {
		let repeat = if piece.min_repeat == piece.max_repeat {
			piece.min_repeat
		} else {
			rng.random_range(piece.min_repeat..=piece.max_repeat)
		};

		for _ in 0..repeat {
			output.push(sample_atom(&piece.atom, rng));
		}
	}

	output
}

fn sample_atom<R: Rng>(atom: &PatternAtom, rng: &mut R) -> char {
	match atom {
		PatternAtom::Literal(c) => *c,
		// The parser never produces an empty candidate list
		PatternAtom::CharClass(candidates) => {
			*candidates.choose(rng).unwrap_or(&'\u{0}')
		}
		PatternAtom::DigitClass => sample_byte(DIGIT_CHARS, rng),
		PatternAtom::WordClass => sample_byte(WORD_CHARS, rng),
		PatternAtom::SpaceClass => sample_byte(SPACE_CHARS, rng),
	}
}

fn sample_byte<R: Rng>(alphabet: &[u8], rng: &mut R) -> char {
	// Alphabets are non-empty compile-time constants
	*alphabet.choose(rng).unwrap_or(&b'?') as char
}

/// Compiles `pattern` once and samples `count` strings from it.
///
/// The count is silently clamped to `[0, MAX_GENERATE_COUNT]`; a
/// negative count yields an empty result rather than an error. Each
/// string is generated independently and results come back in
/// generation order.
///
/// # Errors
/// Whatever [`compile`] fails with, before anything is generated.
pub fn generate_many(pattern: &str, count: i64) -> Result<Vec<String>> {
	let pieces = compile(pattern)?;
	let count = count.clamp(0, MAX_GENERATE_COUNT) as usize;

	let mut rng = rand::rng();
	Ok((0..count)
		.map(|_| generate_one_with(&pieces, &mut rng))
		.collect())
}
