//! Generation-stamped cancellation for debounce timers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

/// Hands out strictly increasing trigger generations, starting at 1.
#[derive(Debug, Default, Clone)]
pub(crate) struct GenerationClock(Arc<AtomicU64>);

impl GenerationClock {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn next(&self) -> u64 {
		self.0.fetch_add(1, Ordering::AcqRel) + 1
	}
}

/// Cancellation handle for one timer, tagged with the trigger generation
/// that started it.
#[derive(Debug, Clone)]
pub(crate) struct GenerationToken {
	generation: u64,
	cancel: CancellationToken,
}

impl GenerationToken {
	pub fn new(generation: u64) -> Self {
		Self {
			generation,
			cancel: CancellationToken::new(),
		}
	}

	pub const fn generation(&self) -> u64 {
		self.generation
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}

	pub fn cancel(&self) {
		self.cancel.cancel();
	}

	/// Resolves once [`GenerationToken::cancel`] was called on any clone.
	pub async fn cancelled(&self) {
		self.cancel.cancelled().await;
	}
}
