//! Layered configuration storage.
//!
//! A [`ConfigStore`] holds one KDL document per [`ConfigScope`]. Reads
//! resolve the workspace layer first, then the user layer; writes go to the
//! layer named by the caller and are persisted when that layer is backed by
//! a file.

use std::path::{Path, PathBuf};

use kdl::KdlDocument;

use crate::error::{ConfigError, Result};
use crate::kdl_util;
use crate::settings::{self, SECTION};
use crate::value::{ConfigSource, ConfigValue};

/// Where a setting is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigScope {
	/// Per-user settings, shared across workspaces.
	#[default]
	User,
	/// Settings of the current workspace, overriding user settings.
	Workspace,
}

impl ConfigScope {
	/// Maps a `toggleDimmerCommandScope` value to a scope.
	///
	/// Only the literal `"user"` selects [`ConfigScope::User`]; every other
	/// string selects the workspace.
	pub fn from_setting(value: &str) -> Self {
		if value == "user" { ConfigScope::User } else { ConfigScope::Workspace }
	}

	/// Returns the setting spelling of this scope.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConfigScope::User => "user",
			ConfigScope::Workspace => "workspace",
		}
	}
}

/// One scope's settings document, optionally backed by a file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLayer {
	doc: KdlDocument,
	path: Option<PathBuf>,
}

impl ConfigLayer {
	/// Creates an empty in-memory layer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses an in-memory layer from KDL text.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(Self {
			doc: input.parse()?,
			path: None,
		})
	}

	/// Loads a file-backed layer. A missing file yields an empty layer that
	/// is created on the first write.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let doc = read_document(path)?;
		Ok(Self {
			doc,
			path: Some(path.to_path_buf()),
		})
	}

	/// Returns the backing file, if any.
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Looks up `section.key` in this layer only.
	pub fn get(&self, section: &str, key: &str) -> Option<ConfigValue> {
		kdl_util::get_setting(&self.doc, section, key)
	}

	/// Sets `section.key` in memory.
	pub fn set(&mut self, section: &str, key: &str, value: &ConfigValue) {
		kdl_util::set_setting(&mut self.doc, section, key, value);
	}

	/// Re-reads the backing file. In-memory layers are left untouched.
	pub fn reload(&mut self) -> Result<()> {
		if let Some(path) = &self.path {
			self.doc = read_document(path)?;
		}
		Ok(())
	}

	/// Writes the layer to its backing file. In-memory layers are a no-op.
	pub fn save(&mut self) -> Result<()> {
		let Some(path) = &self.path else {
			return Ok(());
		};
		self.doc.autoformat();
		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			std::fs::create_dir_all(parent).map_err(|error| ConfigError::Write {
				path: path.clone(),
				error,
			})?;
		}
		std::fs::write(path, self.to_kdl_string()).map_err(|error| ConfigError::Write {
			path: path.clone(),
			error,
		})
	}

	/// Renders the layer as KDL text.
	pub fn to_kdl_string(&self) -> String {
		self.doc.to_string()
	}
}

impl ConfigSource for ConfigLayer {
	fn get(&self, section: &str, key: &str) -> Option<ConfigValue> {
		ConfigLayer::get(self, section, key)
	}

	fn keys(&self, section: &str) -> Vec<String> {
		kdl_util::setting_keys(&self.doc, section)
	}
}

fn read_document(path: &Path) -> Result<KdlDocument> {
	match std::fs::read_to_string(path) {
		Ok(content) => Ok(content.parse()?),
		Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(KdlDocument::new()),
		Err(error) => Err(ConfigError::Io {
			path: path.to_path_buf(),
			error,
		}),
	}
}

/// User and workspace settings layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
	user: ConfigLayer,
	workspace: ConfigLayer,
}

impl ConfigStore {
	/// Creates a store with two empty in-memory layers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store from existing layers.
	pub fn with_layers(user: ConfigLayer, workspace: ConfigLayer) -> Self {
		Self { user, workspace }
	}

	/// Returns the layer for a scope.
	pub fn layer(&self, scope: ConfigScope) -> &ConfigLayer {
		match scope {
			ConfigScope::User => &self.user,
			ConfigScope::Workspace => &self.workspace,
		}
	}

	/// Returns the layer for a scope mutably.
	pub fn layer_mut(&mut self, scope: ConfigScope) -> &mut ConfigLayer {
		match scope {
			ConfigScope::User => &mut self.user,
			ConfigScope::Workspace => &mut self.workspace,
		}
	}

	/// Writes `section.key` at `scope` and persists that layer.
	///
	/// Dimmer settings are type-checked; a workspace value keeps overriding
	/// a user write, as reads always prefer the workspace layer.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::TypeMismatch`] when a dimmer setting gets a
	/// value of the wrong type, or [`ConfigError::Write`] when persisting
	/// fails.
	pub fn update(&mut self, section: &str, key: &str, value: ConfigValue, scope: ConfigScope) -> Result<()> {
		if section == SECTION
			&& let Some(expected) = settings::expected_type(key)
			&& expected != value.value_type()
		{
			return Err(ConfigError::TypeMismatch {
				key: key.to_string(),
				expected: expected.name(),
				got: value.type_name(),
			});
		}

		tracing::debug!(section, key, scope = scope.as_str(), ?value, "config.update");
		let layer = self.layer_mut(scope);
		layer.set(section, key, &value);
		layer.save()
	}

	/// Re-reads both file-backed layers.
	pub fn reload(&mut self) -> Result<()> {
		self.user.reload()?;
		self.workspace.reload()
	}
}

impl ConfigSource for ConfigStore {
	fn get(&self, section: &str, key: &str) -> Option<ConfigValue> {
		self.workspace.get(section, key).or_else(|| self.user.get(section, key))
	}

	fn keys(&self, section: &str) -> Vec<String> {
		let mut keys = self.user.keys(section);
		for key in self.workspace.keys(section) {
			if !keys.contains(&key) {
				keys.push(key);
			}
		}
		keys
	}
}
