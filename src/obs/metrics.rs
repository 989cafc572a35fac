//! Counter for update-cycle stages. One series per `(stage, outcome)` pair: a healthy widget
//! shows `update/attempt == update/success`, and a failing provider shows up as
//! `token_exchange/failure` or `new_releases/failure` without any `update/success`.

// self
use crate::obs::{Stage, StageOutcome};

/// Bumps `spotify_widget_stage_total{stage, outcome}` via the global recorder (when enabled).
pub fn record_stage_outcome(stage: Stage, outcome: StageOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"spotify_widget_stage_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}
