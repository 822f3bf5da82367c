use std::fmt;

/// Opaque identity of a host document.
///
/// Hosts assign ids; the dimmer only uses them as keys for per-document
/// state such as debounce timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "doc#{}", self.0)
	}
}
