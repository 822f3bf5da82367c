//! Computes which ranges stay undimmed.
//!
//! One range is produced per selection, in selection order; overlapping
//! results are neither merged nor deduplicated.

use dimmer_config::Settings;
use dimmer_primitives::{Position, Selection, TextRange};

/// How a selection maps to its undimmed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
	/// Exactly the selected text stays undimmed.
	Exact,
	/// The selected lines, widened by `context` lines on each side.
	Lines {
		/// Lines added above and below.
		context: u32,
	},
}

impl RangePolicy {
	/// Derives the policy from settings.
	///
	/// A negative `context` or `dimSelectedLines` selects [`RangePolicy::Exact`];
	/// with `dimSelectedLines` the context is ignored.
	pub fn from_settings(settings: &Settings) -> Self {
		match settings.context_lines() {
			Some(context) if !settings.dim_selected_lines => RangePolicy::Lines { context },
			_ => RangePolicy::Exact,
		}
	}
}

impl From<&Settings> for RangePolicy {
	fn from(settings: &Settings) -> Self {
		Self::from_settings(settings)
	}
}

/// The undimmed range for one selection.
///
/// Widening clamps at the first line but not at the last; the host clamps
/// past-the-end lines.
pub fn undimmed_range(selection: &Selection, policy: RangePolicy) -> TextRange {
	match policy {
		RangePolicy::Exact => selection.range(),
		RangePolicy::Lines { context } => TextRange {
			start: Position::line_start(selection.start().line.saturating_sub(context)),
			end: Position::line_end(selection.end().line.saturating_add(context)),
		},
	}
}

/// The undimmed ranges for a set of selections.
pub fn undimmed_ranges<'a, I>(selections: I, policy: RangePolicy) -> Vec<TextRange>
where
	I: IntoIterator<Item = &'a Selection>,
{
	selections.into_iter().map(|s| undimmed_range(s, policy)).collect()
}

/// The range the dim style covers: the whole document.
pub fn dim_range(line_count: u32) -> TextRange {
	TextRange::lines(0, line_count.saturating_sub(1))
}
