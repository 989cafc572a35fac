//! Crate-level error types shared across flows, the widget orchestrator, and configuration.

// self
use crate::{_prelude::*, obs::Stage};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, cancellation).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body did not match the expected JSON shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Remote endpoint answered with a status other than `200 OK`.
	#[error("The {stage} endpoint returned HTTP {code}.")]
	Status {
		/// Call that produced the response.
		stage: Stage,
		/// HTTP status code returned by the endpoint.
		code: u16,
		/// Retry-After hint from upstream, if supplied. Informational only.
		retry_after: Option<Duration>,
	},
}
impl Error {
	/// Returns the HTTP status code for [`Error::Status`] values.
	pub fn status_code(&self) -> Option<u16> {
		match self {
			Self::Status { code, .. } => Some(*code),
			_ => None,
		}
	}

	/// Returns `true` when the call was aborted through its cancellation token.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Transport(TransportError::Cancelled { .. }))
	}
}

/// Configuration and validation failures raised while constructing a widget.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// An endpoint URL cannot be parsed or joined.
	#[error("The {endpoint} endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An endpoint URL uses a scheme other than `http` or `https`.
	#[error("The {endpoint} endpoint must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},

	/// `client-id` was absent or empty.
	#[error("client-id is required.")]
	MissingClientId,
	/// `client-secret` was absent or empty.
	#[error("client-secret is required.")]
	MissingClientSecret,
	/// `limit` does not fit the range accepted by the browse endpoint.
	#[error("The limit {limit} exceeds the supported range.")]
	LimitOutOfRange {
		/// Configured value.
		limit: i64,
	},
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::HttpClientBuild { source: Box::new(e) }
	}
}

/// Transport-level failures (network, IO, cancellation).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the {stage} endpoint.")]
	Network {
		/// Call that failed.
		stage: Stage,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling an endpoint.")]
	Io(#[from] std::io::Error),
	/// Caller's cancellation token fired while the request was outstanding.
	#[error("The {stage} request was cancelled.")]
	Cancelled {
		/// Call that was aborted.
		stage: Stage,
	},
}

/// Response body could not be decoded into the expected JSON shape.
#[derive(Debug, ThisError)]
#[error("The {stage} endpoint returned malformed JSON at `{path}`.", path = .source.path())]
pub struct DecodeError {
	/// Call whose body failed to decode.
	pub stage: Stage,
	/// Structured parsing failure, including the JSON path.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
}

/// Failure of a whole update cycle, tagged with the stage that short-circuited it.
///
/// The widget leaves its previous listing untouched whenever this is returned.
#[derive(Debug, ThisError)]
#[error("Widget update failed during the {stage} stage.")]
pub struct UpdateError {
	/// Stage that failed.
	pub stage: Stage,
	/// Underlying failure.
	#[source]
	pub source: Error,
}
impl UpdateError {
	/// Tags `source` with the stage it came from.
	pub fn new(stage: Stage, source: Error) -> Self {
		Self { stage, source }
	}
}
