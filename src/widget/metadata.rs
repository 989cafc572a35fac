//! Host-provided render metadata.

// self
use crate::_prelude::*;

/// Common widget fields owned by the host dashboard (title, cache duration).
///
/// The widget only reads these; the host decides how they drive scheduling and templates.
pub trait RenderMetadata
where
	Self: Send + Sync,
{
	/// Title shown above the widget.
	fn title(&self) -> &str;

	/// How long a successful listing stays fresh before the host schedules the next update.
	fn cache_duration(&self) -> Duration;
}

/// Plain [`RenderMetadata`] implementation for hosts without their own widget base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetMetadata {
	/// Widget title.
	pub title: String,
	/// Cache duration.
	pub cache_duration: Duration,
}
impl WidgetMetadata {
	/// Title used when the host does not override it.
	pub const DEFAULT_TITLE: &'static str = "Spotify";
	/// Cache duration used when the host does not override it.
	pub const DEFAULT_CACHE_DURATION: Duration = Duration::hours(1);

	/// Overrides the title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();

		self
	}

	/// Overrides the cache duration.
	pub fn with_cache_duration(mut self, duration: Duration) -> Self {
		self.cache_duration = duration;

		self
	}
}
impl Default for WidgetMetadata {
	fn default() -> Self {
		Self {
			title: Self::DEFAULT_TITLE.into(),
			cache_duration: Self::DEFAULT_CACHE_DURATION,
		}
	}
}
impl RenderMetadata for WidgetMetadata {
	fn title(&self) -> &str {
		&self.title
	}

	fn cache_duration(&self) -> Duration {
		self.cache_duration
	}
}
