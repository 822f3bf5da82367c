//! The per-instance dimmer: settings, styles, timers and subscriptions.

use dimmer_config::settings::keys;
use dimmer_config::{SECTION, Settings};
use dimmer_primitives::DocumentId;
use dimmer_worker::Debouncer;
use tokio_util::sync::CancellationToken;

use crate::decorate;
use crate::error::Result;
use crate::event::{EventBridge, HostEvent, TOGGLE_COMMAND};
use crate::host::Host;
use crate::ranges::RangePolicy;
use crate::style::StyleRegistry;

/// Whether dimming is on, as last read from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimmerState {
	/// No decorations are shown.
	Disabled,
	/// Visible documents are dimmed around their selections.
	Enabled,
}

/// Update phase of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentPhase {
	/// No update is scheduled.
	Idle,
	/// An update is waiting for its debounce delay.
	Pending,
}

/// A dimmer bound to one host for the lifetime of an activation.
///
/// Created by [`Dimmer::activate`] and torn down by [`Dimmer::deactivate`],
/// which hands the host back.
pub struct Dimmer<H: Host> {
	host: H,
	settings: Settings,
	styles: StyleRegistry,
	debouncer: Debouncer<DocumentId>,
	bridge: EventBridge,
}

impl<H: Host> std::fmt::Debug for Dimmer<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Dimmer")
			.field("settings", &self.settings)
			.field("styles", &self.styles)
			.field("debouncer", &self.debouncer)
			.field("bridge", &self.bridge)
			.finish_non_exhaustive()
	}
}

impl<H: Host> Dimmer<H> {
	/// Subscribes to the host, creates the normal style and performs the
	/// initial settings read.
	pub fn activate(mut host: H) -> Self {
		let bridge = EventBridge::register(&mut host);
		let mut styles = StyleRegistry::new();
		styles.ensure_normal(&mut host);

		let mut dimmer = Self {
			host,
			settings: Settings::default(),
			styles,
			debouncer: Debouncer::new(),
			bridge,
		};
		dimmer.reload();
		tracing::info!(enabled = dimmer.settings.enabled, "dimmer.activate");
		dimmer
	}

	/// Cancels pending updates, clears every visible document, disposes the
	/// styles and unsubscribes. Returns the host.
	pub fn deactivate(mut self) -> H {
		self.debouncer.cancel_all();
		self.reset_all();
		self.styles.dispose_all(&mut self.host);
		self.bridge.teardown(&mut self.host);
		tracing::info!("dimmer.deactivate");
		self.host
	}

	/// The host.
	pub fn host(&self) -> &H {
		&self.host
	}

	/// The host, mutably.
	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	/// The current settings snapshot.
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// The live styles.
	pub fn styles(&self) -> &StyleRegistry {
		&self.styles
	}

	/// The event bridge.
	pub fn bridge(&self) -> &EventBridge {
		&self.bridge
	}

	/// Whether dimming is on.
	pub fn state(&self) -> DimmerState {
		if self.settings.enabled { DimmerState::Enabled } else { DimmerState::Disabled }
	}

	/// Update phase of `doc`.
	pub fn document_phase(&self, doc: DocumentId) -> DocumentPhase {
		if self.debouncer.is_pending(&doc) { DocumentPhase::Pending } else { DocumentPhase::Idle }
	}

	/// Number of documents with an update waiting for its delay.
	pub fn pending_updates(&self) -> usize {
		self.debouncer.pending_count()
	}

	/// Re-reads settings and redraws.
	///
	/// Clears every visible document first so no decoration outlives the
	/// style it was drawn with, then rebuilds the dim style and, if enabled,
	/// schedules an update for each visible document.
	pub fn reload(&mut self) {
		self.reset_all();
		self.debouncer.cancel_all();

		self.settings = Settings::read(self.host.config());
		self.styles.rebuild_dim(&mut self.host, self.settings.dim_opacity());
		tracing::debug!(
			enabled = self.settings.enabled,
			opacity = self.settings.opacity,
			context = self.settings.context,
			delay_ms = u64::try_from(self.settings.delay.as_millis()).unwrap_or(u64::MAX),
			dim_selected_lines = self.settings.dim_selected_lines,
			"dimmer.reload"
		);

		if self.settings.enabled {
			for doc in self.host.visible_documents() {
				self.schedule(doc);
			}
		}
	}

	/// Clears both styles from every visible document.
	pub fn reset_all(&mut self) {
		for doc in self.host.visible_documents() {
			decorate::reset(&mut self.host, &self.styles, doc);
		}
	}

	/// Schedules a debounced update of `doc` when enabled.
	///
	/// Returns false when disabled.
	pub fn update_if_enabled(&mut self, doc: DocumentId) -> bool {
		if !self.settings.enabled {
			return false;
		}
		self.schedule(doc);
		true
	}

	fn schedule(&mut self, doc: DocumentId) {
		let generation = self.debouncer.trigger(doc, self.settings.delay);
		tracing::trace!(%doc, generation, "dimmer.schedule");
	}

	/// Applies decorations to `doc` immediately, bypassing the debounce.
	///
	/// Returns false when disabled or when the document is gone.
	pub fn apply_now(&mut self, doc: DocumentId) -> bool {
		if !self.settings.enabled {
			return false;
		}
		decorate::apply(&mut self.host, &self.styles, doc, RangePolicy::from_settings(&self.settings))
	}

	/// Writes the inverted `enabled` setting at the configured scope.
	///
	/// In-memory state is untouched; the host's configuration-changed event
	/// triggers the redraw.
	pub fn toggle(&mut self) -> Result<()> {
		let enabled = !self.settings.enabled;
		tracing::debug!(enabled, scope = self.settings.command_scope.as_str(), "dimmer.toggle");
		self.host
			.update_setting(SECTION, keys::ENABLED, enabled.into(), self.settings.command_scope)
	}

	/// Routes one host event.
	pub fn handle_event(&mut self, event: HostEvent) -> Result<()> {
		match event {
			HostEvent::ConfigurationChanged(change) => {
				if change.affects(SECTION) {
					self.reload();
				}
			}
			HostEvent::SelectionChanged(doc) => {
				self.update_if_enabled(doc);
			}
			HostEvent::ActiveDocumentChanged(Some(doc)) => {
				self.update_if_enabled(doc);
			}
			HostEvent::ActiveDocumentChanged(None) => {}
			HostEvent::Command(id) if id == TOGGLE_COMMAND => self.toggle()?,
			HostEvent::Command(id) => tracing::trace!(%id, "dimmer.ignore_command"),
		}
		Ok(())
	}

	/// Handles every queued host event without waiting.
	///
	/// Errors are logged and do not stop processing. Returns the number of
	/// events handled.
	pub fn handle_pending_events(&mut self) -> usize {
		let mut handled = 0;
		while let Some(event) = self.bridge.try_recv() {
			self.handle_logged(event);
			handled += 1;
		}
		handled
	}

	/// Applies every update whose debounce delay has already elapsed.
	///
	/// Returns the number of documents decorated.
	pub fn flush_due(&mut self) -> usize {
		let mut applied = 0;
		while let Some(doc) = self.debouncer.try_next_due() {
			if self.apply_now(doc) {
				applied += 1;
			}
		}
		applied
	}

	/// Waits for the next debounced update, applies it and returns its
	/// document.
	pub async fn apply_next_due(&mut self) -> DocumentId {
		let doc = self.debouncer.next_due().await;
		self.apply_now(doc);
		doc
	}

	/// Runs the event loop until `shutdown` fires or the host drops every
	/// subscription, then deactivates.
	pub async fn run(mut self, shutdown: CancellationToken) -> H {
		loop {
			tokio::select! {
				biased;
				_ = shutdown.cancelled() => break,
				event = self.bridge.recv() => match event {
					Some(event) => self.handle_logged(event),
					None => {
						tracing::debug!("dimmer.host_closed");
						break;
					}
				},
				doc = self.debouncer.next_due() => {
					self.apply_now(doc);
				}
			}
		}
		self.deactivate()
	}

	fn handle_logged(&mut self, event: HostEvent) {
		if let Err(error) = self.handle_event(event) {
			tracing::warn!(%error, "dimmer.event_failed");
		}
	}
}
