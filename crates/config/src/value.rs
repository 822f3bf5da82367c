//! Typed setting values and the read-only source abstraction.

use std::collections::HashMap;

/// The type of a setting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
	/// Boolean.
	Bool,
	/// Integer.
	Int,
	/// String.
	String,
}

impl ValueType {
	/// Returns a human-readable name for the type.
	pub const fn name(self) -> &'static str {
		match self {
			ValueType::Bool => "bool",
			ValueType::Int => "int",
			ValueType::String => "string",
		}
	}
}

/// A setting value as read from the host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
	/// Boolean value.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// String value.
	String(String),
}

impl ConfigValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ConfigValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			ConfigValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ConfigValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the type of this value.
	pub fn value_type(&self) -> ValueType {
		match self {
			ConfigValue::Bool(_) => ValueType::Bool,
			ConfigValue::Int(_) => ValueType::Int,
			ConfigValue::String(_) => ValueType::String,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		self.value_type().name()
	}
}

impl From<bool> for ConfigValue {
	fn from(v: bool) -> Self {
		ConfigValue::Bool(v)
	}
}

impl From<i64> for ConfigValue {
	fn from(v: i64) -> Self {
		ConfigValue::Int(v)
	}
}

impl From<&str> for ConfigValue {
	fn from(v: &str) -> Self {
		ConfigValue::String(v.to_string())
	}
}

impl From<String> for ConfigValue {
	fn from(v: String) -> Self {
		ConfigValue::String(v)
	}
}

/// Read access to host configuration, addressed by section and key.
///
/// Absent keys return `None`; callers fall back to their own defaults.
pub trait ConfigSource {
	/// Looks up `section.key`.
	fn get(&self, section: &str, key: &str) -> Option<ConfigValue>;

	/// Lists the keys present in `section`.
	fn keys(&self, section: &str) -> Vec<String>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
	fn get(&self, section: &str, key: &str) -> Option<ConfigValue> {
		(**self).get(section, key)
	}

	fn keys(&self, section: &str) -> Vec<String> {
		(**self).keys(section)
	}
}

/// Flat `(section, key)` map, for hosts that already hold settings in memory.
impl ConfigSource for HashMap<(String, String), ConfigValue> {
	fn get(&self, section: &str, key: &str) -> Option<ConfigValue> {
		HashMap::get(self, &(section.to_string(), key.to_string())).cloned()
	}

	fn keys(&self, section: &str) -> Vec<String> {
		let mut keys: Vec<String> = HashMap::keys(self).filter(|(s, _)| s == section).map(|(_, k)| k.clone()).collect();
		keys.sort();
		keys
	}
}
