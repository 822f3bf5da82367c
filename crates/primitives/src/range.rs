use std::fmt;

use crate::position::Position;

/// A span between two positions, start inclusive and end exclusive.
///
/// Ranges are host rendering targets: the dimmer never clamps the end
/// against the document, so an end line past the last line or an
/// [`Position::END_OF_LINE`] column is valid and resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
	/// Start position (inclusive).
	pub start: Position,
	/// End position (exclusive).
	pub end: Position,
}

impl TextRange {
	/// Creates a range, ordering the two ends.
	pub fn new(a: Position, b: Position) -> Self {
		if b < a { Self { start: b, end: a } } else { Self { start: a, end: b } }
	}

	/// Covers whole lines from column 0 of `first` to the end of `last`.
	pub fn lines(first: u32, last: u32) -> Self {
		Self::new(Position::line_start(first), Position::line_end(last))
	}
}

impl fmt::Display for TextRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.start, self.end)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn new_orders_ends() {
		let r = TextRange::new(Position::new(5, 2), Position::new(3, 9));
		assert_eq!(r.start, Position::new(3, 9));
		assert_eq!(r.end, Position::new(5, 2));
	}

	#[test]
	fn lines_span_whole_lines() {
		let r = TextRange::lines(4, 6);
		assert_eq!(r.start, Position::new(4, 0));
		assert_eq!(r.end, Position::line_end(6));
		assert_eq!(r.to_string(), "[4,0]-[6,MAX]");
	}

	proptest! {
		#[test]
		fn new_is_ordered_and_symmetric(al in 0u32..1000, ac in 0u32..200, bl in 0u32..1000, bc in 0u32..200) {
			let (a, b) = (Position::new(al, ac), Position::new(bl, bc));
			let r = TextRange::new(a, b);
			prop_assert!(r.start <= r.end);
			prop_assert_eq!(r, TextRange::new(b, a));
		}
	}
}
