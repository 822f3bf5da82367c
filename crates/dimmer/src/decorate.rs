//! Applying and clearing decorations on one document.

use dimmer_primitives::DocumentId;

use crate::host::Host;
use crate::ranges::{RangePolicy, dim_range, undimmed_ranges};
use crate::style::StyleRegistry;

/// Dims `doc` entirely, then marks its undimmed ranges with the normal style.
///
/// Returns false, touching nothing, when either style is missing or the
/// host no longer knows the document.
pub fn apply<H: Host>(host: &mut H, styles: &StyleRegistry, doc: DocumentId, policy: RangePolicy) -> bool {
	let Some((dim, normal)) = styles.pair() else {
		return false;
	};
	let (Some(line_count), Some(selections)) = (host.line_count(doc), host.selections(doc)) else {
		tracing::trace!(%doc, "decorate.skip_closed");
		return false;
	};

	let ranges = undimmed_ranges(&selections, policy);
	host.apply_style(doc, dim, &[dim_range(line_count)]);
	host.apply_style(doc, normal, &ranges);
	tracing::debug!(%doc, line_count, undimmed = ranges.len(), ?policy, "decorate.apply");
	true
}

/// Clears both styles from `doc`.
pub fn reset<H: Host>(host: &mut H, styles: &StyleRegistry, doc: DocumentId) {
	if let Some(normal) = styles.normal() {
		host.apply_style(doc, normal, &[]);
	}
	if let Some(dim) = styles.dim() {
		host.apply_style(doc, dim, &[]);
	}
}
