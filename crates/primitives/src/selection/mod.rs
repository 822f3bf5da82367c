use smallvec::{SmallVec, smallvec};

use crate::position::Position;
use crate::range::TextRange;


/// A single selection defined by anchor and active (cursor) positions.
///
/// The anchor is the fixed end; the active end moves as the selection is
/// extended. A zero-width selection is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
	/// The fixed end of the selection.
	pub anchor: Position,
	/// The moving end of the selection.
	pub active: Position,
}

impl Selection {
	/// Creates a selection from anchor to active.
	pub const fn new(anchor: Position, active: Position) -> Self {
		Self { anchor, active }
	}

	/// Creates a zero-width selection (cursor).
	pub const fn cursor(pos: Position) -> Self {
		Self::new(pos, pos)
	}

	/// The earlier of the two ends.
	#[inline]
	pub fn start(&self) -> Position {
		std::cmp::min(self.anchor, self.active)
	}

	/// The later of the two ends.
	#[inline]
	pub fn end(&self) -> Position {
		std::cmp::max(self.anchor, self.active)
	}

	/// Returns true for a cursor.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.active
	}

	/// The selected span as an ordered range.
	pub fn range(&self) -> TextRange {
		TextRange {
			start: self.start(),
			end: self.end(),
		}
	}
}

/// The selections of one document, in host order.
///
/// Unlike an editing selection set this never normalizes: overlapping or
/// duplicate selections are kept as reported by the host, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
	ranges: SmallVec<[Selection; 1]>,
}

impl Default for Selections {
	fn default() -> Self {
		Self::single(Selection::default())
	}
}

impl Selections {
	/// Creates a set from a first selection and any others.
	pub fn new(first: Selection, others: impl IntoIterator<Item = Selection>) -> Self {
		let mut ranges: SmallVec<[Selection; 1]> = smallvec![first];
		ranges.extend(others);
		Self { ranges }
	}

	/// Creates a set holding exactly one selection.
	pub fn single(selection: Selection) -> Self {
		Self::new(selection, [])
	}

	/// All selections in host order.
	pub fn as_slice(&self) -> &[Selection] {
		&self.ranges
	}

	/// Iterates selections in host order.
	pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
		self.ranges.iter()
	}

	/// Number of selections (always at least one).
	#[allow(clippy::len_without_is_empty, reason = "a selection set is never empty")]
	pub fn len(&self) -> usize {
		self.ranges.len()
	}
}

impl<'a> IntoIterator for &'a Selections {
	type Item = &'a Selection;
	type IntoIter = std::slice::Iter<'a, Selection>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
