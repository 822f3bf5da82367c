//! Configuration for the dimmer.
//!
//! Settings live in a `dimmer` section of a KDL (v2) document, one document
//! per scope:
//!
//! ```kdl
//! dimmer {
//!     enabled #true
//!     opacity 40
//!     context 1
//!     delay 150
//!     dimSelectedLines #false
//!     toggleDimmerCommandScope "user"
//! }
//! ```
//!
//! [`Settings::read`] turns any [`ConfigSource`] into an immutable snapshot,
//! falling back to defaults for absent or mistyped keys. [`ConfigStore`] is a
//! ready-made source with user and workspace layers that hosts can embed.
//!
//! # Scope Resolution
//!
//! Reads prefer the workspace layer over the user layer. Writes target one
//! layer and persist it when the layer was loaded from a file.

pub mod error;
pub mod kdl_util;
pub mod settings;
pub mod store;
pub mod value;

pub use error::{ConfigError, ConfigWarning, Result};
pub use settings::{SECTION, Settings};
pub use store::{ConfigLayer, ConfigScope, ConfigStore};
pub use value::{ConfigSource, ConfigValue, ValueType};
