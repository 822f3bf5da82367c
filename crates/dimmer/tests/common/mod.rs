//! Recording host for dimmer integration tests.

#![allow(dead_code, reason = "shared across test binaries")]

use std::collections::{BTreeMap, HashMap};

use dimmer::{
	ConfigChange, ConfigScope, ConfigStore, ConfigValue, DecorationStyle, DimmerError, DocumentId, EventKind,
	EventSender, Host, HostEvent, Position, Selection, Selections, StyleHandle, SubscriptionId, TextRange,
};
use dimmer_config::{ConfigLayer, SECTION};

/// Installs a test-writer tracing subscriber once per binary.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn pos(line: u32, column: u32) -> Position {
	Position::new(line, column)
}

pub fn cursor(line: u32, column: u32) -> Selections {
	Selections::single(Selection::cursor(pos(line, column)))
}

/// One `apply_style` call as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyCall {
	pub doc: DocumentId,
	pub style: StyleHandle,
	pub opacity: f32,
	pub ranges: Vec<TextRange>,
}

#[derive(Debug, Clone)]
struct MockDocument {
	line_count: u32,
	selections: Selections,
}

/// Cloneable handle that can emit events after the host moved into a dimmer.
#[derive(Debug, Clone)]
pub struct Remote {
	subscriptions: Vec<(EventKind, EventSender)>,
}

impl Remote {
	pub fn emit(&self, event: HostEvent) {
		for (kind, tx) in &self.subscriptions {
			if kind.accepts(&event) {
				tx.send(event.clone());
			}
		}
	}

	/// Returns true once the dimmer behind every subscription is gone.
	pub fn is_closed(&self) -> bool {
		self.subscriptions.iter().all(|(_, tx)| tx.is_closed())
	}
}

#[derive(Debug, Default)]
pub struct MockHost {
	pub config: ConfigStore,
	docs: BTreeMap<DocumentId, MockDocument>,
	visible: Vec<DocumentId>,
	next_doc: u64,
	next_style: u64,
	next_subscription: u64,
	live_styles: BTreeMap<StyleHandle, DecorationStyle>,
	pub created: Vec<StyleHandle>,
	pub disposed: Vec<StyleHandle>,
	decorations: HashMap<(DocumentId, StyleHandle), Vec<TextRange>>,
	pub apply_log: Vec<ApplyCall>,
	subscriptions: BTreeMap<SubscriptionId, (EventKind, EventSender)>,
	pub fail_updates: bool,
}

impl MockHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Host whose user settings are the given KDL text.
	pub fn with_settings(kdl: &str) -> Self {
		let user = ConfigLayer::parse(kdl).expect("valid test settings");
		Self {
			config: ConfigStore::with_layers(user, ConfigLayer::new()),
			..Self::default()
		}
	}

	/// Opens a visible document.
	pub fn open(&mut self, line_count: u32, selections: Selections) -> DocumentId {
		self.next_doc += 1;
		let doc = DocumentId(self.next_doc);
		self.docs.insert(doc, MockDocument { line_count, selections });
		self.visible.push(doc);
		doc
	}

	/// Closes a document without notifying anyone.
	pub fn close(&mut self, doc: DocumentId) {
		self.docs.remove(&doc);
		self.visible.retain(|d| *d != doc);
	}

	/// Moves the selections of `doc` and emits a selection change.
	pub fn select(&mut self, doc: DocumentId, selections: Selections) {
		if let Some(document) = self.docs.get_mut(&doc) {
			document.selections = selections;
		}
		self.emit(HostEvent::SelectionChanged(doc));
	}

	/// Emits an active-document change.
	pub fn focus(&self, doc: Option<DocumentId>) {
		self.emit(HostEvent::ActiveDocumentChanged(doc));
	}

	/// Writes a user setting and emits a configuration change.
	pub fn set_setting(&mut self, key: &str, value: impl Into<ConfigValue>) {
		self.config
			.update(SECTION, key, value.into(), ConfigScope::User)
			.expect("valid test setting");
		self.emit(HostEvent::ConfigurationChanged(ConfigChange::sections([SECTION])));
	}

	/// Invokes a command.
	pub fn invoke(&self, command: &str) {
		self.emit(HostEvent::Command(command.to_string()));
	}

	pub fn emit(&self, event: HostEvent) {
		self.remote().emit(event);
	}

	pub fn remote(&self) -> Remote {
		Remote {
			subscriptions: self.subscriptions.values().cloned().collect(),
		}
	}

	/// Drops every subscription sender, as a host shutting down would.
	pub fn drop_subscriptions(&mut self) {
		self.subscriptions.clear();
	}

	pub fn subscription_count(&self) -> usize {
		self.subscriptions.len()
	}

	/// Ranges currently covered by `style` in `doc`.
	pub fn decorations(&self, doc: DocumentId, style: StyleHandle) -> Vec<TextRange> {
		self.decorations.get(&(doc, style)).cloned().unwrap_or_default()
	}

	/// Returns true if no live style covers anything in `doc`.
	pub fn is_clear(&self, doc: DocumentId) -> bool {
		self.decorations
			.iter()
			.filter(|((d, style), _)| *d == doc && self.live_styles.contains_key(style))
			.all(|(_, ranges)| ranges.is_empty())
	}

	pub fn live_style_count(&self) -> usize {
		self.live_styles.len()
	}

	pub fn style(&self, handle: StyleHandle) -> Option<DecorationStyle> {
		self.live_styles.get(&handle).copied()
	}

	/// Number of times `doc` was dimmed (non-empty dim-style applications).
	pub fn dim_fills(&self, doc: DocumentId) -> usize {
		self.apply_log
			.iter()
			.filter(|call| call.doc == doc && call.opacity < 1.0 && !call.ranges.is_empty())
			.count()
	}
}

impl Host for MockHost {
	type Config = ConfigStore;

	fn config(&self) -> &ConfigStore {
		&self.config
	}

	fn update_setting(&mut self, section: &str, key: &str, value: ConfigValue, scope: ConfigScope) -> dimmer::Result<()> {
		if self.fail_updates {
			return Err(DimmerError::Host("settings are read-only".to_string()));
		}
		self.config.update(section, key, value, scope)?;
		self.emit(HostEvent::ConfigurationChanged(ConfigChange::sections([section])));
		Ok(())
	}

	fn visible_documents(&self) -> Vec<DocumentId> {
		self.visible.clone()
	}

	fn selections(&self, doc: DocumentId) -> Option<Selections> {
		self.docs.get(&doc).map(|d| d.selections.clone())
	}

	fn line_count(&self, doc: DocumentId) -> Option<u32> {
		self.docs.get(&doc).map(|d| d.line_count)
	}

	fn create_style(&mut self, style: DecorationStyle) -> StyleHandle {
		self.next_style += 1;
		let handle = StyleHandle(self.next_style);
		self.live_styles.insert(handle, style);
		self.created.push(handle);
		handle
	}

	fn apply_style(&mut self, doc: DocumentId, style: StyleHandle, ranges: &[TextRange]) {
		let opacity = self
			.live_styles
			.get(&style)
			.map(|s| s.opacity)
			.expect("apply_style with a disposed handle");
		self.apply_log.push(ApplyCall {
			doc,
			style,
			opacity,
			ranges: ranges.to_vec(),
		});
		self.decorations.insert((doc, style), ranges.to_vec());
	}

	fn dispose_style(&mut self, style: StyleHandle) {
		self.live_styles.remove(&style);
		self.decorations.retain(|(_, s), _| *s != style);
		self.disposed.push(style);
	}

	fn subscribe(&mut self, kind: EventKind, events: EventSender) -> SubscriptionId {
		self.next_subscription += 1;
		let id = SubscriptionId(self.next_subscription);
		self.subscriptions.insert(id, (kind, events));
		id
	}

	fn unsubscribe(&mut self, id: SubscriptionId) {
		self.subscriptions.remove(&id);
	}
}
