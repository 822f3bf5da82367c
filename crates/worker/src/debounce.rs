//! Keyed, restartable debounce timers.
//!
//! Each key owns at most one outstanding timer. Triggering a key again
//! cancels its pending timer and starts a new one, so only the most recent
//! trigger within the delay window fires. Timers run as tokio tasks that
//! only post `(key, generation)` back to the [`Debouncer`]; the owner
//! receives due keys through [`Debouncer::next_due`] or
//! [`Debouncer::try_next_due`] and does the actual work on its own loop.
//!
//! # Stale Fires
//!
//! A cancelled timer may already have posted before it observed the
//! cancellation. Fires are therefore matched against the key's latest
//! generation and dropped when they do not match.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::spawn::spawn;
use crate::token::{GenerationClock, GenerationToken};

/// Per-key timer state. Slots are created lazily and kept for the lifetime
/// of the debouncer.
#[derive(Debug)]
struct TimerSlot {
	/// Generation of the latest trigger.
	generation: u64,
	/// The outstanding timer, if one is pending.
	pending: Option<GenerationToken>,
}

#[derive(Debug)]
struct Fired<K> {
	key: K,
	generation: u64,
}

/// Debounces triggers per key.
pub struct Debouncer<K> {
	clock: GenerationClock,
	slots: HashMap<K, TimerSlot>,
	fired_tx: mpsc::UnboundedSender<Fired<K>>,
	fired_rx: mpsc::UnboundedReceiver<Fired<K>>,
}

impl<K> std::fmt::Debug for Debouncer<K>
where
	K: Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Debouncer")
			.field("slots", &self.slots)
			.finish()
	}
}

impl<K> Default for Debouncer<K>
where
	K: Clone + Eq + Hash + Debug + Send + 'static,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<K> Debouncer<K>
where
	K: Clone + Eq + Hash + Debug + Send + 'static,
{
	/// Creates a debouncer with no timers.
	pub fn new() -> Self {
		let (fired_tx, fired_rx) = mpsc::unbounded_channel();
		Self {
			clock: GenerationClock::new(),
			slots: HashMap::new(),
			fired_tx,
			fired_rx,
		}
	}

	/// Starts (or restarts) the timer for `key`, returning its generation.
	///
	/// A zero delay fires on the next scheduling tick.
	pub fn trigger(&mut self, key: K, delay: Duration) -> u64 {
		let token = GenerationToken::new(self.clock.next());
		let generation = token.generation();

		let slot = self.slots.entry(key.clone()).or_insert(TimerSlot {
			generation,
			pending: None,
		});
		slot.generation = generation;
		if let Some(previous) = slot.pending.replace(token.clone()) {
			previous.cancel();
			tracing::trace!(?key, superseded = previous.generation(), generation, "debounce.restart");
		}

		let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
		tracing::trace!(?key, generation, delay_ms, "debounce.trigger");

		let tx = self.fired_tx.clone();
		spawn(async move {
			tokio::select! {
				biased;
				_ = token.cancelled() => {}
				_ = tokio::time::sleep(delay) => {
					let _ = tx.send(Fired { key, generation });
				}
			}
		});

		generation
	}

	/// Cancels the pending timer for `key`. Returns true if one was pending.
	pub fn cancel(&mut self, key: &K) -> bool {
		let Some(token) = self.slots.get_mut(key).and_then(|slot| slot.pending.take()) else {
			return false;
		};
		token.cancel();
		tracing::trace!(?key, generation = token.generation(), "debounce.cancel");
		true
	}

	/// Cancels every pending timer, returning how many were pending.
	pub fn cancel_all(&mut self) -> usize {
		let mut cancelled = 0;
		for slot in self.slots.values_mut() {
			if let Some(token) = slot.pending.take() {
				token.cancel();
				cancelled += 1;
			}
		}
		if cancelled > 0 {
			tracing::trace!(cancelled, "debounce.cancel_all");
		}
		cancelled
	}

	/// Returns true if `key` has a timer that has not fired yet.
	pub fn is_pending(&self, key: &K) -> bool {
		self.slots.get(key).is_some_and(|slot| slot.pending.is_some())
	}

	/// Number of keys with a pending timer.
	pub fn pending_count(&self) -> usize {
		self.slots.values().filter(|slot| slot.pending.is_some()).count()
	}

	/// Waits for the next key whose timer fires.
	///
	/// Cancel-safe: dropping the future loses no fires.
	pub async fn next_due(&mut self) -> K {
		loop {
			let Some(fired) = self.fired_rx.recv().await else {
				return std::future::pending().await;
			};
			if let Some(key) = self.accept(fired) {
				return key;
			}
		}
	}

	/// Returns the next key whose timer has already fired, if any.
	pub fn try_next_due(&mut self) -> Option<K> {
		while let Ok(fired) = self.fired_rx.try_recv() {
			if let Some(key) = self.accept(fired) {
				return Some(key);
			}
		}
		None
	}

	fn accept(&mut self, fired: Fired<K>) -> Option<K> {
		let slot = self.slots.get_mut(&fired.key)?;
		let current = slot
			.pending
			.as_ref()
			.is_some_and(|token| token.generation() == fired.generation && !token.is_cancelled());
		if !current {
			tracing::trace!(key = ?fired.key, generation = fired.generation, latest = slot.generation, "debounce.stale");
			return None;
		}
		slot.pending = None;
		tracing::trace!(key = ?fired.key, generation = fired.generation, "debounce.fire");
		Some(fired.key)
	}
}
