//! Spans and warning events for update cycles.
//!
//! The `update` span carries the widget title as its subject and encloses the
//! `token_exchange` and `new_releases` spans, whose subject is the endpoint URL. Secrets never
//! reach a field.

// self
use crate::{_prelude::*, obs::Stage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedStage<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedStage<F> = F;

/// Span wrapping one stage of an update cycle.
#[derive(Clone, Debug)]
pub struct StageSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StageSpan {
	/// Opens `spotify_widget.stage` for `stage`; `subject` is the endpoint URL for network stages
	/// and the widget title for the whole cycle.
	pub fn new(stage: Stage, subject: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("spotify_widget.stage", stage = stage.as_str(), subject);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, subject);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedStage<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a warning event for a failed stage; the previous listing stays committed.
pub fn log_stage_failure(stage: Stage, error: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(stage = stage.as_str(), error = %error, "Stage failed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, error);
	}
}

/// Emits a warning when the configured content type is not the one the fetcher serves.
pub fn log_unsupported_content_type(content_type: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			content_type,
			"Only the new-releases listing is implemented; content-type is ignored."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = content_type;
	}
}
