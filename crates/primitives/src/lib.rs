//! Core coordinate types for dimming: document ids, line/column positions,
//! highlight ranges and selections.

/// Identifier types for host documents.
pub mod ids;
/// Line/column positions.
pub mod position;
/// Highlight ranges in line/column coordinates.
pub mod range;
/// Selection types for single and multi-cursor editing.
pub mod selection;

pub use ids::DocumentId;
pub use position::Position;
pub use range::TextRange;
pub use selection::{Selection, Selections};
