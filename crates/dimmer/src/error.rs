//! Error types for the dimmer.

use dimmer_config::ConfigError;
use thiserror::Error;

/// Errors surfaced by fallible dimmer operations.
///
/// Decorating never fails; only writing settings back (the toggle command)
/// can.
#[derive(Debug, Error)]
pub enum DimmerError {
	/// Reading or writing configuration failed.
	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),

	/// The host rejected an operation.
	#[error("host error: {0}")]
	Host(String),
}

/// Result type for dimmer operations.
pub type Result<T> = std::result::Result<T, DimmerError>;
