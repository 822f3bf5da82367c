//! The dimmer settings snapshot.

use std::time::Duration;

use crate::error::ConfigWarning;
use crate::store::ConfigScope;
use crate::value::{ConfigSource, ConfigValue, ValueType};

/// Configuration section holding every dimmer setting.
pub const SECTION: &str = "dimmer";

/// Setting keys inside [`SECTION`].
pub mod keys {
	/// Whether dimming is on.
	pub const ENABLED: &str = "enabled";
	/// Opacity of dimmed text, in percent.
	pub const OPACITY: &str = "opacity";
	/// Lines kept undimmed above and below each selection.
	pub const CONTEXT: &str = "context";
	/// Debounce delay in milliseconds.
	pub const DELAY: &str = "delay";
	/// Keep only the selected text undimmed instead of whole lines.
	pub const DIM_SELECTED_LINES: &str = "dimSelectedLines";
	/// Scope the toggle command writes `enabled` to.
	pub const COMMAND_SCOPE: &str = "toggleDimmerCommandScope";

	/// Every recognized key.
	pub const ALL: &[&str] = &[ENABLED, OPACITY, CONTEXT, DELAY, DIM_SELECTED_LINES, COMMAND_SCOPE];
}

/// Values used when a key is absent or mistyped.
pub mod defaults {
	/// Dimming starts off.
	pub const ENABLED: bool = false;
	/// Half opacity.
	pub const OPACITY: i64 = 50;
	/// Only the selected lines stay undimmed.
	pub const CONTEXT: i64 = 0;
	/// Debounce delay in milliseconds.
	pub const DELAY_MS: i64 = 200;
	/// Whole lines stay undimmed.
	pub const DIM_SELECTED_LINES: bool = false;
	/// The toggle command writes to user settings.
	pub const COMMAND_SCOPE: &str = "user";
}

/// Returns the value type a dimmer setting expects, if `key` is recognized.
pub fn expected_type(key: &str) -> Option<ValueType> {
	match key {
		keys::ENABLED | keys::DIM_SELECTED_LINES => Some(ValueType::Bool),
		keys::OPACITY | keys::CONTEXT | keys::DELAY => Some(ValueType::Int),
		keys::COMMAND_SCOPE => Some(ValueType::String),
		_ => None,
	}
}

/// Immutable snapshot of the dimmer settings.
///
/// Replaced wholesale on every configuration read. Only `delay` is
/// normalized (clamped to zero); `opacity` and `context` are kept as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Whether dimming is on.
	pub enabled: bool,
	/// Opacity of dimmed text in percent, nominally 0 to 100.
	pub opacity: i64,
	/// Context lines around each selection; negative means exact-selection mode.
	pub context: i64,
	/// Debounce delay between a trigger and the redraw.
	pub delay: Duration,
	/// Keep only the selected text undimmed.
	pub dim_selected_lines: bool,
	/// Scope the toggle command persists `enabled` to.
	pub command_scope: ConfigScope,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			enabled: defaults::ENABLED,
			opacity: defaults::OPACITY,
			context: defaults::CONTEXT,
			delay: clamp_delay(defaults::DELAY_MS),
			dim_selected_lines: defaults::DIM_SELECTED_LINES,
			command_scope: ConfigScope::from_setting(defaults::COMMAND_SCOPE),
		}
	}
}

impl Settings {
	/// Reads a snapshot, logging any warnings.
	pub fn read(source: &(impl ConfigSource + ?Sized)) -> Self {
		let (settings, warnings) = Self::read_with_warnings(source);
		for warning in &warnings {
			tracing::warn!(section = SECTION, "{warning}");
		}
		settings
	}

	/// Reads a snapshot and returns the non-fatal warnings alongside it.
	pub fn read_with_warnings(source: &(impl ConfigSource + ?Sized)) -> (Self, Vec<ConfigWarning>) {
		let mut reader = Reader {
			source,
			warnings: Vec::new(),
		};

		let settings = Self {
			enabled: reader.bool(keys::ENABLED, defaults::ENABLED),
			opacity: reader.int(keys::OPACITY, defaults::OPACITY),
			context: reader.int(keys::CONTEXT, defaults::CONTEXT),
			delay: clamp_delay(reader.int(keys::DELAY, defaults::DELAY_MS)),
			dim_selected_lines: reader.bool(keys::DIM_SELECTED_LINES, defaults::DIM_SELECTED_LINES),
			command_scope: ConfigScope::from_setting(&reader.string(keys::COMMAND_SCOPE, defaults::COMMAND_SCOPE)),
		};

		for key in source.keys(SECTION) {
			if !keys::ALL.contains(&key.as_str()) {
				reader.warnings.push(ConfigWarning::UnknownKey { key });
			}
		}

		(settings, reader.warnings)
	}

	/// Opacity of the dim style as a factor (`opacity / 100`).
	pub fn dim_opacity(&self) -> f32 {
		self.opacity as f32 / 100.0
	}

	/// Context lines, or `None` in exact-selection mode.
	pub fn context_lines(&self) -> Option<u32> {
		if self.context < 0 {
			None
		} else {
			Some(u32::try_from(self.context).unwrap_or(u32::MAX))
		}
	}
}

fn clamp_delay(ms: i64) -> Duration {
	Duration::from_millis(ms.max(0).unsigned_abs())
}

struct Reader<'a, S: ?Sized> {
	source: &'a S,
	warnings: Vec<ConfigWarning>,
}

impl<S: ConfigSource + ?Sized> Reader<'_, S> {
	fn value(&mut self, key: &'static str, expected: ValueType) -> Option<ConfigValue> {
		let value = self.source.get(SECTION, key)?;
		if value.value_type() == expected {
			Some(value)
		} else {
			self.warnings.push(ConfigWarning::TypeMismatch {
				key,
				expected: expected.name(),
				got: value.type_name(),
			});
			None
		}
	}

	fn bool(&mut self, key: &'static str, default: bool) -> bool {
		self.value(key, ValueType::Bool).and_then(|v| v.as_bool()).unwrap_or(default)
	}

	fn int(&mut self, key: &'static str, default: i64) -> i64 {
		self.value(key, ValueType::Int).and_then(|v| v.as_int()).unwrap_or(default)
	}

	fn string(&mut self, key: &'static str, default: &str) -> String {
		self.value(key, ValueType::String)
			.and_then(|v| v.as_str().map(str::to_string))
			.unwrap_or_else(|| default.to_string())
	}
}
