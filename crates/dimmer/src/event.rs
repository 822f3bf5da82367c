//! Host events and the bridge that subscribes to them.
//!
//! The host pushes [`HostEvent`]s into an [`EventSender`] per subscription;
//! all subscriptions of one dimmer share a single channel, so events are
//! handled in the order the host emitted them.

use dimmer_primitives::DocumentId;
use tokio::sync::mpsc;

use crate::host::{Host, SubscriptionId};

/// Command that flips the `enabled` setting.
pub const TOGGLE_COMMAND: &str = "dimmer.ToggleDimmer";

/// Describes which configuration sections changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigChange {
	/// Changed sections; empty when the host cannot tell.
	sections: Vec<String>,
}

impl ConfigChange {
	/// A change the host cannot attribute; affects every section.
	pub fn unknown() -> Self {
		Self::default()
	}

	/// A change limited to the given sections.
	pub fn sections<I, S>(sections: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			sections: sections.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns true if `section` may have changed.
	pub fn affects(&self, section: &str) -> bool {
		self.sections.is_empty() || self.sections.iter().any(|s| s == section)
	}
}

/// A notification from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
	/// Configuration was modified.
	ConfigurationChanged(ConfigChange),
	/// Selections changed in a document.
	SelectionChanged(DocumentId),
	/// Focus moved to another document, or to none.
	ActiveDocumentChanged(Option<DocumentId>),
	/// The user invoked a command.
	Command(String),
}

/// Event streams a subscription can select.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
	/// [`HostEvent::ConfigurationChanged`].
	ConfigurationChanged,
	/// [`HostEvent::SelectionChanged`].
	SelectionChanged,
	/// [`HostEvent::ActiveDocumentChanged`].
	ActiveDocumentChanged,
	/// [`HostEvent::Command`] with this command id.
	Command(String),
}

impl EventKind {
	/// Returns true if `event` belongs to this stream.
	pub fn accepts(&self, event: &HostEvent) -> bool {
		match (self, event) {
			(EventKind::ConfigurationChanged, HostEvent::ConfigurationChanged(_))
			| (EventKind::SelectionChanged, HostEvent::SelectionChanged(_))
			| (EventKind::ActiveDocumentChanged, HostEvent::ActiveDocumentChanged(_)) => true,
			(EventKind::Command(id), HostEvent::Command(invoked)) => id == invoked,
			_ => false,
		}
	}
}

/// Host-side end of the event channel.
#[derive(Debug, Clone)]
pub struct EventSender(mpsc::UnboundedSender<HostEvent>);

impl EventSender {
	/// Delivers an event. Returns false once the dimmer is gone.
	pub fn send(&self, event: HostEvent) -> bool {
		self.0.send(event).is_ok()
	}

	/// Returns true once the receiving dimmer has been dropped.
	pub fn is_closed(&self) -> bool {
		self.0.is_closed()
	}
}

/// Owns the dimmer's host subscriptions and the receiving end of their
/// shared channel.
#[derive(Debug)]
pub struct EventBridge {
	subscriptions: Vec<SubscriptionId>,
	events: mpsc::UnboundedReceiver<HostEvent>,
}

impl EventBridge {
	/// Streams the dimmer listens to.
	pub fn kinds() -> [EventKind; 4] {
		[
			EventKind::ConfigurationChanged,
			EventKind::SelectionChanged,
			EventKind::ActiveDocumentChanged,
			EventKind::Command(TOGGLE_COMMAND.to_string()),
		]
	}

	/// Subscribes to every stream in [`EventBridge::kinds`].
	pub fn register<H: Host>(host: &mut H) -> Self {
		let (tx, events) = mpsc::unbounded_channel();
		let subscriptions = Self::kinds()
			.into_iter()
			.map(|kind| {
				tracing::trace!(?kind, "bridge.subscribe");
				host.subscribe(kind, EventSender(tx.clone()))
			})
			.collect();
		Self { subscriptions, events }
	}

	/// Live subscriptions, in registration order.
	pub fn subscriptions(&self) -> &[SubscriptionId] {
		&self.subscriptions
	}

	/// Unsubscribes everything. Events already queued stay readable.
	pub fn teardown<H: Host>(&mut self, host: &mut H) {
		for id in self.subscriptions.drain(..) {
			tracing::trace!(?id, "bridge.unsubscribe");
			host.unsubscribe(id);
		}
	}

	/// Waits for the next event. `None` once the host dropped every sender.
	pub async fn recv(&mut self) -> Option<HostEvent> {
		self.events.recv().await
	}

	/// Returns a queued event without waiting.
	pub fn try_recv(&mut self) -> Option<HostEvent> {
		self.events.try_recv().ok()
	}
}
