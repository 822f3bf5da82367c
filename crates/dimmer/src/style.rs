//! Registry of the two live decoration styles.

use crate::host::{DecorationStyle, Host, StyleHandle};

/// Holds the dim and normal style handles.
///
/// At most one of each exists at a time: rebuilding the dim style disposes
/// the previous handle before creating the next.
#[derive(Debug, Default)]
pub struct StyleRegistry {
	dim: Option<(StyleHandle, DecorationStyle)>,
	normal: Option<StyleHandle>,
}

impl StyleRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates the normal style unless it already exists.
	pub fn ensure_normal<H: Host>(&mut self, host: &mut H) -> StyleHandle {
		*self.normal.get_or_insert_with(|| {
			let handle = host.create_style(DecorationStyle::normal());
			tracing::debug!(?handle, "style.create_normal");
			handle
		})
	}

	/// Replaces the dim style with one at `opacity`.
	pub fn rebuild_dim<H: Host>(&mut self, host: &mut H, opacity: f32) -> StyleHandle {
		if let Some((old, _)) = self.dim.take() {
			host.dispose_style(old);
			tracing::trace!(handle = ?old, "style.dispose_dim");
		}
		let style = DecorationStyle::dimmed(opacity);
		let handle = host.create_style(style);
		tracing::debug!(?handle, opacity, "style.create_dim");
		self.dim = Some((handle, style));
		handle
	}

	/// Disposes both styles.
	pub fn dispose_all<H: Host>(&mut self, host: &mut H) {
		if let Some((handle, _)) = self.dim.take() {
			host.dispose_style(handle);
		}
		if let Some(handle) = self.normal.take() {
			host.dispose_style(handle);
		}
	}

	/// The dim style, if created.
	pub fn dim(&self) -> Option<StyleHandle> {
		self.dim.map(|(handle, _)| handle)
	}

	/// Opacity of the current dim style.
	pub fn dim_opacity(&self) -> Option<f32> {
		self.dim.map(|(_, style)| style.opacity)
	}

	/// The normal style, if created.
	pub fn normal(&self) -> Option<StyleHandle> {
		self.normal
	}

	/// Both styles, when both exist.
	pub fn pair(&self) -> Option<(StyleHandle, StyleHandle)> {
		Some((self.dim()?, self.normal?))
	}

	/// Number of live handles held.
	pub fn live_count(&self) -> usize {
		usize::from(self.dim.is_some()) + usize::from(self.normal.is_some())
	}
}
