//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error writing a configuration file.
	#[error("I/O error writing {path}: {error}")]
	Write {
		/// Path to the file that failed to write.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A setting was written with a value of the wrong type.
	#[error("type mismatch for setting '{key}': expected {expected}, got {got}")]
	TypeMismatch {
		/// The setting key.
		key: String,
		/// The expected type name.
		expected: &'static str,
		/// The actual type name.
		got: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal warning during configuration reads.
///
/// A warned key falls back to its default; the rest of the snapshot loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A setting holds a value of the wrong type.
	TypeMismatch {
		/// The setting key.
		key: &'static str,
		/// The expected type name.
		expected: &'static str,
		/// The actual type name.
		got: &'static str,
	},
	/// A setting in the `dimmer` section is not recognized.
	UnknownKey {
		/// The unrecognized key.
		key: String,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::TypeMismatch { key, expected, got } => {
				write!(f, "'{key}' expects {expected} but is {got}; using the default")
			}
			ConfigWarning::UnknownKey { key } => write!(f, "unknown setting '{key}' will be ignored"),
		}
	}
}
