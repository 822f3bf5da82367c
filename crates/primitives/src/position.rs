use std::fmt;

/// A position in line/column coordinates.
///
/// Ordering is line-major, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
	/// Zero-based line index.
	pub line: u32,
	/// Zero-based column offset in the line.
	pub column: u32,
}

impl Position {
	/// Column sentinel meaning "end of the line, whatever its length".
	pub const END_OF_LINE: u32 = u32::MAX;

	/// Creates a new position.
	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}

	/// Position at column 0 of `line`.
	pub const fn line_start(line: u32) -> Self {
		Self::new(line, 0)
	}

	/// Position at the end-of-line sentinel of `line`.
	pub const fn line_end(line: u32) -> Self {
		Self::new(line, Self::END_OF_LINE)
	}

	/// Returns true if the column is the end-of-line sentinel.
	pub const fn is_line_end(&self) -> bool {
		self.column == Self::END_OF_LINE
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_line_end() {
			write!(f, "[{},MAX]", self.line)
		} else {
			write!(f, "[{},{}]", self.line, self.column)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn orders_line_major() {
		assert!(Position::new(1, 50) < Position::new(2, 0));
		assert!(Position::new(2, 0) < Position::new(2, 1));
		assert!(Position::new(2, 7) < Position::line_end(2));
	}

	#[test]
	fn display_uses_max_for_sentinel() {
		assert_eq!(Position::new(4, 0).to_string(), "[4,0]");
		assert_eq!(Position::line_end(6).to_string(), "[6,MAX]");
	}
}
