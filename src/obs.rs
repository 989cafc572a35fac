//! Optional observability helpers for widget update cycles.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `spotify_widget.stage` with the `stage` field
//!   and warning events when a stage fails.
//! - Enable `metrics` to increment the `spotify_widget_stage_total` counter for every
//!   attempt/success/failure, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Network steps of an update cycle, plus the cycle itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
	/// Client-credentials token exchange against the accounts host.
	TokenExchange,
	/// New-releases listing fetch against the API host.
	NewReleases,
	/// Whole update cycle (authenticate, fetch, commit).
	Update,
}
impl Stage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Stage::TokenExchange => "token_exchange",
			Stage::NewReleases => "new_releases",
			Stage::Update => "update",
		}
	}
}
impl Display for Stage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageOutcome {
	/// Entry to a stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl StageOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StageOutcome::Attempt => "attempt",
			StageOutcome::Success => "success",
			StageOutcome::Failure => "failure",
		}
	}
}
impl Display for StageOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records the outcome of `result` for `stage` and returns it unchanged.
pub(crate) fn observe<T, E>(stage: Stage, result: Result<T, E>) -> Result<T, E>
where
	E: Display,
{
	match &result {
		Ok(_) => record_stage_outcome(stage, StageOutcome::Success),
		Err(e) => {
			record_stage_outcome(stage, StageOutcome::Failure);
			log_stage_failure(stage, e);
		},
	}

	result
}
