//! The seam between the dimmer and its host editor.

use dimmer_config::{ConfigScope, ConfigSource, ConfigValue};
use dimmer_primitives::{DocumentId, Selections, TextRange};

use crate::error::Result;
use crate::event::{EventKind, EventSender};

/// Opaque, host-issued handle to a decoration style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleHandle(pub u64);

/// Opaque, host-issued handle to an event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Rendering directive for a decoration style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationStyle {
	/// Text opacity factor, `1.0` being fully opaque.
	pub opacity: f32,
}

impl DecorationStyle {
	/// Style for de-emphasized text.
	pub const fn dimmed(opacity: f32) -> Self {
		Self { opacity }
	}

	/// Style that restores full opacity.
	pub const fn normal() -> Self {
		Self { opacity: 1.0 }
	}
}

/// Everything the dimmer needs from an editor.
///
/// All methods are called from the host's event loop; none of them may
/// block on the dimmer.
pub trait Host {
	/// Configuration the settings snapshot is read from.
	type Config: ConfigSource;

	/// Current host configuration.
	fn config(&self) -> &Self::Config;

	/// Persists `section.key` at `scope`.
	///
	/// Hosts report the write back through a configuration-changed event;
	/// the dimmer does not update its own state from this call.
	fn update_setting(&mut self, section: &str, key: &str, value: ConfigValue, scope: ConfigScope) -> Result<()>;

	/// Documents currently shown in some editor view.
	fn visible_documents(&self) -> Vec<DocumentId>;

	/// Current selections of `doc`, or `None` if the document is gone.
	fn selections(&self, doc: DocumentId) -> Option<Selections>;

	/// Number of lines in `doc`, or `None` if the document is gone.
	fn line_count(&self, doc: DocumentId) -> Option<u32>;

	/// Creates a decoration style.
	fn create_style(&mut self, style: DecorationStyle) -> StyleHandle;

	/// Replaces the ranges `style` covers in `doc`. An empty slice clears it.
	fn apply_style(&mut self, doc: DocumentId, style: StyleHandle, ranges: &[TextRange]);

	/// Disposes a style, removing it from every document.
	fn dispose_style(&mut self, style: StyleHandle);

	/// Starts delivering events of `kind` to `events`.
	fn subscribe(&mut self, kind: EventKind, events: EventSender) -> SubscriptionId;

	/// Stops a subscription. Unknown ids are ignored.
	fn unsubscribe(&mut self, id: SubscriptionId);
}
