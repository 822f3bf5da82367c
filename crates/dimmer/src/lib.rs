//! Focus dimming for a host editor.
//!
//! Everything in a visible document is drawn at reduced opacity except the
//! lines around the current selections. The host is abstracted by the
//! [`Host`] trait; a [`Dimmer`] owns the settings snapshot, the two
//! decoration styles, per-document debounce timers and the host
//! subscriptions for one activation.
//!
//! # Event Flow
//!
//! - configuration change: clear all visible documents, re-read settings,
//!   rebuild the dim style, then schedule updates if enabled
//! - selection change or focus change: schedule a debounced update of that
//!   document if enabled
//! - `dimmer.ToggleDimmer`: write the inverted `enabled` setting; the
//!   resulting configuration change does the rest
//!
//! # Example
//!
//! ```ignore
//! let dimmer = Dimmer::activate(host);
//! let shutdown = CancellationToken::new();
//! let host = dimmer.run(shutdown.clone()).await;
//! ```

pub mod decorate;
mod dimmer;
pub mod error;
pub mod event;
pub mod host;
pub mod ranges;
pub mod style;

pub use dimmer::{Dimmer, DimmerState, DocumentPhase};
pub use dimmer_config::{ConfigScope, ConfigStore, ConfigValue, Settings};
pub use dimmer_primitives::{DocumentId, Position, Selection, Selections, TextRange};
pub use error::{DimmerError, Result};
pub use event::{ConfigChange, EventBridge, EventKind, EventSender, HostEvent, TOGGLE_COMMAND};
pub use host::{DecorationStyle, Host, StyleHandle, SubscriptionId};
pub use ranges::RangePolicy;
pub use style::StyleRegistry;
