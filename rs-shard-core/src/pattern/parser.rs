use crate::error::{Error, Result};

/// Repeat span granted to the open-ended quantifiers `+`, `*` and `{n,}`.
pub const OPEN_REPEAT_SPAN: usize = 16;

/// Hard ceiling on any quantifier upper bound.
pub const MAX_REPEAT: usize = 100_000;

/// One generatable unit of a pattern.
///
/// A closed set of variants is all the dialect needs; character
/// classes keep their candidates as an ordered list, duplicates
/// included, so duplicated members weigh more when sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternAtom {
	/// A single fixed character.
	Literal(char),
	/// A bracket expression, expanded to its candidate characters.
	CharClass(Vec<char>),
	/// `\d`: the decimal digits.
	DigitClass,
	/// `\w`: ASCII letters, digits and underscore.
	WordClass,
	/// `\s`: space and horizontal tab.
	SpaceClass,
}

/// An atom together with its repeat range.
///
/// The ordered sequence of pieces produced by [`compile`] is the whole
/// compiled form of a pattern; it is immutable and can be sampled any
/// number of times.
///
/// # Invariants
/// - `min_repeat <= max_repeat`
/// - `max_repeat <= MAX_REPEAT`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternPiece {
	pub atom: PatternAtom,
	pub min_repeat: usize,
	pub max_repeat: usize,
}

/// Compiles a restricted pattern string into an ordered piece sequence.
///
/// One left-to-right scan with a single cursor and no backtracking.
/// Anchors (`^`, `$`) are consumed and ignored since they cannot affect
/// generation. After each atom the scanner immediately tries to read a
/// quantifier suffix; without one the atom repeats exactly once.
///
/// # Errors
/// - [`Error::UnsupportedSyntax`] for `(`, `)`, `|` anywhere, or a
///   negated character class.
/// - [`Error::UnterminatedEscape`] when the pattern ends on `\`.
/// - [`Error::DanglingQuantifier`] when `{ } ? + *` starts an atom.
/// - [`Error::InvalidQuantifier`] for malformed or out-of-bound `{...}`.
/// - [`Error::EmptyCharClass`], [`Error::InvalidRange`] and
///   [`Error::UnterminatedCharClass`] for malformed bracket expressions.
pub fn compile(pattern: &str) -> Result<Vec<PatternPiece>> {
	if let Some(c) = pattern.chars().find(|c| matches!(c, '(' | ')' | '|')) {
		return Err(Error::UnsupportedSyntax(format!(
			"groups and alternation are not supported ({c:?})"
		)));
	}

	let chars: Vec<char> = pattern.chars().collect();
	let mut pieces = Vec::new();
	let mut cursor = 0;

	while cursor < chars.len() {
		let atom = match chars[cursor] {
			'^' | '$' => {
				// Anchors have no effect on generation
				cursor += 1;
				continue;
			}
			'[' => scan_char_class(&chars, &mut cursor)?,
			'\\' => scan_escape(&chars, &mut cursor)?,
			c @ ('{' | '}' | '?' | '+' | '*') => {
				return Err(Error::DanglingQuantifier(c));
			}
			c => {
				cursor += 1;
				PatternAtom::Literal(c)
			}
		};

		let (min_repeat, max_repeat) = scan_quantifier(&chars, &mut cursor)?;
		pieces.push(PatternPiece { atom, min_repeat, max_repeat });
	}

	Ok(pieces)
}

/// Escape sub-scan: consumes the `\` and exactly one following character.
fn scan_escape(chars: &[char], cursor: &mut usize) -> Result<PatternAtom> {
	let escaped = match chars.get(*cursor + 1) {
		Some(c) => *c,
		None => return Err(Error::UnterminatedEscape),
	};
	*cursor += 2;

	Ok(match escaped {
		'd' => PatternAtom::DigitClass,
		'w' => PatternAtom::WordClass,
		's' => PatternAtom::SpaceClass,
		c => PatternAtom::Literal(c),
	})
}

/// Character-class sub-scan: cursor sits on `[`, ends past the `]`.
fn scan_char_class(chars: &[char], cursor: &mut usize) -> Result<PatternAtom> {
	let mut position = *cursor + 1;

	if chars.get(position) == Some(&'^') {
		return Err(Error::UnsupportedSyntax(
			"negated character classes are not supported".to_owned(),
		));
	}

	let mut candidates = Vec::new();
	loop {
		let current = match chars.get(position) {
			Some(c) => *c,
			None => return Err(Error::UnterminatedCharClass),
		};

		match current {
			']' => {
				if candidates.is_empty() {
					return Err(Error::EmptyCharClass);
				}
				*cursor = position + 1;
				return Ok(PatternAtom::CharClass(candidates));
			}
			'\\' => {
				match chars.get(position + 1) {
					Some(c) => candidates.push(*c),
					None => return Err(Error::UnterminatedCharClass),
				}
				position += 2;
			}
			start if chars.get(position + 1) == Some(&'-')
				&& chars.get(position + 2).is_some_and(|c| *c != ']') =>
			{
				// A-B expands to every code point between the two bounds
				let end = chars[position + 2];
				if (end as u32) < (start as u32) {
					return Err(Error::InvalidRange { start, end });
				}
				candidates.extend(
					(start as u32..=end as u32).filter_map(char::from_u32),
				);
				position += 3;
			}
			c => {
				candidates.push(c);
				position += 1;
			}
		}
	}
}

/// Quantifier sub-scan at the position right after an atom.
///
/// Returns `(1, 1)` when the next character does not start a quantifier.
fn scan_quantifier(chars: &[char], cursor: &mut usize) -> Result<(usize, usize)> {
	let (min, max) = match chars.get(*cursor) {
		Some('?') => {
			*cursor += 1;
			(0, 1)
		}
		Some('+') => {
			*cursor += 1;
			(1, OPEN_REPEAT_SPAN)
		}
		Some('*') => {
			*cursor += 1;
			(0, OPEN_REPEAT_SPAN)
		}
		Some('{') => scan_repeat_bounds(chars, cursor)?,
		_ => (1, 1),
	};

	if max < min {
		return Err(Error::InvalidQuantifier(format!(
			"upper bound {max} is below lower bound {min}"
		)));
	}
	if max > MAX_REPEAT {
		return Err(Error::InvalidQuantifier(format!(
			"upper bound {max} exceeds the {MAX_REPEAT} ceiling"
		)));
	}

	Ok((min, max))
}

/// `{...}` sub-scan: cursor sits on `{`, ends past the `}`.
fn scan_repeat_bounds(chars: &[char], cursor: &mut usize) -> Result<(usize, usize)> {
	let mut position = *cursor + 1;

	let min = match scan_number(chars, &mut position) {
		Some(n) => n,
		None => {
			return Err(Error::InvalidQuantifier(
				"no digits after '{'".to_owned(),
			));
		}
	};

	let bounds = match chars.get(position) {
		Some('}') => {
			position += 1;
			(min, min)
		}
		Some(',') => {
			position += 1;
			match scan_number(chars, &mut position) {
				// {n,m}
				Some(max) if chars.get(position) == Some(&'}') => {
					position += 1;
					(min, max)
				}
				// {n,}
				None if chars.get(position) == Some(&'}') => {
					position += 1;
					(min, min.saturating_add(OPEN_REPEAT_SPAN))
				}
				_ => {
					return Err(Error::InvalidQuantifier(
						"missing closing '}'".to_owned(),
					));
				}
			}
		}
		_ => {
			return Err(Error::InvalidQuantifier(
				"missing closing '}'".to_owned(),
			));
		}
	};

	*cursor = position;
	Ok(bounds)
}

/// Reads a run of decimal digits at `position`, if any.
///
/// Saturates instead of overflowing; anything saturated is far beyond
/// `MAX_REPEAT` and rejected by the caller's bound check.
fn scan_number(chars: &[char], position: &mut usize) -> Option<usize> {
	let mut value: Option<usize> = None;
	while let Some(digit) = chars.get(*position).and_then(|c| c.to_digit(10)) {
		let current = value.unwrap_or(0);
		value = Some(
			current
				.saturating_mul(10)
				.saturating_add(digit as usize),
		);
		*position += 1;
	}
	value
}

#[cfg(test)]
mod tests {
	use super::*;

	fn piece(atom: PatternAtom, min: usize, max: usize) -> PatternPiece {
		PatternPiece { atom, min_repeat: min, max_repeat: max }
	}

	#[test]
	fn literals_compile_one_piece_per_character() {
		let pieces = compile("abc").unwrap();
		assert_eq!(
			pieces,
			vec![
				piece(PatternAtom::Literal('a'), 1, 1),
				piece(PatternAtom::Literal('b'), 1, 1),
				piece(PatternAtom::Literal('c'), 1, 1),
			]
		);
	}

	#[test]
	fn anchors_are_consumed_and_ignored() {
		assert_eq!(compile("^a$").unwrap(), compile("a").unwrap());
		assert_eq!(compile("^$").unwrap(), vec![]);
	}

	#[test]
	fn escape_classes_map_to_their_atoms() {
		let pieces = compile(r"\d\w\s\.").unwrap();
		assert_eq!(
			pieces,
			vec![
				piece(PatternAtom::DigitClass, 1, 1),
				piece(PatternAtom::WordClass, 1, 1),
				piece(PatternAtom::SpaceClass, 1, 1),
				piece(PatternAtom::Literal('.'), 1, 1),
			]
		);
	}

	#[test]
	fn escaped_quantifier_chars_are_plain_literals() {
		let pieces = compile(r"\+\{").unwrap();
		assert_eq!(
			pieces,
			vec![
				piece(PatternAtom::Literal('+'), 1, 1),
				piece(PatternAtom::Literal('{'), 1, 1),
			]
		);
	}

	#[test]
	fn char_class_range_expands_inclusively() {
		let pieces = compile("[A-C]{2}").unwrap();
		assert_eq!(
			pieces,
			vec![piece(PatternAtom::CharClass(vec!['A', 'B', 'C']), 2, 2)]
		);
	}

	#[test]
	fn char_class_keeps_duplicates_and_order() {
		let pieces = compile("[aab-d]").unwrap();
		assert_eq!(
			pieces,
			vec![piece(
				PatternAtom::CharClass(vec!['a', 'a', 'b', 'c', 'd']),
				1,
				1
			)]
		);
	}

	#[test]
	fn char_class_escape_contributes_the_raw_character() {
		let pieces = compile(r"[\]\d]").unwrap();
		assert_eq!(
			pieces,
			vec![piece(PatternAtom::CharClass(vec![']', 'd']), 1, 1)]
		);
	}

	#[test]
	fn dash_before_closing_bracket_is_literal() {
		let pieces = compile("[a-]").unwrap();
		assert_eq!(
			pieces,
			vec![piece(PatternAtom::CharClass(vec!['a', '-']), 1, 1)]
		);
	}

	#[test]
	fn quantifier_suffixes_set_the_repeat_range() {
		assert_eq!(compile("a?").unwrap()[0].min_repeat, 0);
		assert_eq!(compile("a?").unwrap()[0].max_repeat, 1);
		assert_eq!(compile("a+").unwrap()[0].min_repeat, 1);
		assert_eq!(compile("a+").unwrap()[0].max_repeat, 16);
		assert_eq!(compile("a*").unwrap()[0].min_repeat, 0);
		assert_eq!(compile("a*").unwrap()[0].max_repeat, 16);
	}

	#[test]
	fn braced_quantifiers_set_exact_bounds() {
		assert_eq!(
			compile("a{3}").unwrap(),
			vec![piece(PatternAtom::Literal('a'), 3, 3)]
		);
		assert_eq!(
			compile("a{2,5}").unwrap(),
			vec![piece(PatternAtom::Literal('a'), 2, 5)]
		);
		assert_eq!(
			compile("a{4,}").unwrap(),
			vec![piece(PatternAtom::Literal('a'), 4, 20)]
		);
	}

	#[test]
	fn quantifier_binds_to_the_class_before_it() {
		let pieces = compile(r"x\d{3,4}").unwrap();
		assert_eq!(
			pieces,
			vec![
				piece(PatternAtom::Literal('x'), 1, 1),
				piece(PatternAtom::DigitClass, 3, 4),
			]
		);
	}

	#[test]
	fn groups_and_alternation_are_rejected_up_front() {
		for pattern in ["(a|b)", "a|b", "a(b)c", "a)b"] {
			assert!(matches!(
				compile(pattern),
				Err(Error::UnsupportedSyntax(_))
			));
		}
	}

	#[test]
	fn negated_class_is_rejected() {
		assert!(matches!(
			compile("[^abc]"),
			Err(Error::UnsupportedSyntax(_))
		));
	}

	#[test]
	fn dangling_quantifiers_are_rejected() {
		assert_eq!(compile("?a"), Err(Error::DanglingQuantifier('?')));
		assert_eq!(compile("+"), Err(Error::DanglingQuantifier('+')));
		assert_eq!(compile("*x"), Err(Error::DanglingQuantifier('*')));
		assert_eq!(compile("{2}"), Err(Error::DanglingQuantifier('{')));
		assert_eq!(compile("}"), Err(Error::DanglingQuantifier('}')));
		// Anchors produce no atom for a quantifier to bind to
		assert_eq!(compile("^?"), Err(Error::DanglingQuantifier('?')));
	}

	#[test]
	fn malformed_braced_quantifiers_are_rejected() {
		for pattern in ["a{}", "a{,3}", "a{3", "a{3,", "a{3,x}", "a{x}"] {
			assert!(
				matches!(compile(pattern), Err(Error::InvalidQuantifier(_))),
				"{pattern} should be rejected"
			);
		}
	}

	#[test]
	fn inverted_and_oversized_bounds_are_rejected() {
		assert!(matches!(
			compile("a{3,2}"),
			Err(Error::InvalidQuantifier(_))
		));
		assert!(matches!(
			compile("a{0,100001}"),
			Err(Error::InvalidQuantifier(_))
		));
		// The ceiling itself is fine
		assert!(compile("a{0,100000}").is_ok());
	}

	#[test]
	fn open_ended_quantifier_near_the_ceiling_is_rejected() {
		// {99990,} grants 16 more than the minimum, crossing 100000
		assert!(matches!(
			compile("a{99990,}"),
			Err(Error::InvalidQuantifier(_))
		));
	}

	#[test]
	fn trailing_escape_is_rejected() {
		assert_eq!(compile("\\"), Err(Error::UnterminatedEscape));
		assert_eq!(compile("ab\\"), Err(Error::UnterminatedEscape));
	}

	#[test]
	fn malformed_classes_are_rejected() {
		assert_eq!(compile("[]"), Err(Error::EmptyCharClass));
		assert_eq!(
			compile("[z-a]"),
			Err(Error::InvalidRange { start: 'z', end: 'a' })
		);
		assert_eq!(compile("[abc"), Err(Error::UnterminatedCharClass));
		assert_eq!(compile("[ab\\"), Err(Error::UnterminatedCharClass));
	}

	#[test]
	fn empty_pattern_compiles_to_no_pieces() {
		assert_eq!(compile("").unwrap(), vec![]);
	}
}
