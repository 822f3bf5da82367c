//! Task spawning that works with or without an ambient tokio runtime.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

/// Process-wide runtime for callers outside any tokio context.
static FALLBACK: OnceLock<Runtime> = OnceLock::new();

fn handle() -> Handle {
	Handle::try_current().unwrap_or_else(|_| {
		FALLBACK
			.get_or_init(|| {
				Builder::new_multi_thread()
					.worker_threads(1)
					.thread_name("dimmer-worker")
					.enable_time()
					.build()
					.expect("dimmer-worker fallback runtime")
			})
			.handle()
			.clone()
	})
}

/// Spawns `fut` on the ambient runtime, or on a lazily built fallback
/// runtime when called outside of one.
pub fn spawn<F>(fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	let ambient = Handle::try_current().is_ok();
	tracing::trace!(ambient, "worker.spawn");
	handle().spawn(fut)
}
