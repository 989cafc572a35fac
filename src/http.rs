//! Transport primitives for the token exchange and the browse call.
//!
//! The module exposes [`CatalogHttpClient`], the crate's only dependency on an HTTP stack, so
//! hosts can inject their own process-wide transport (connection pooling, timeouts, proxies)
//! and tests can substitute fakes. Requests and responses use the `http` types re-exported by
//! `oauth2`. [`send`] races every request against the caller's [`CancellationToken`] and
//! [`ensure_ok`] / [`decode_json`] apply the shared status and decode policy.

// crates.io
use oauth2::{
	HttpClientError, HttpRequest, HttpResponse,
	http::{HeaderMap, StatusCode, header::RETRY_AFTER},
};
use serde::de::DeserializeOwned;
use time::format_description::well_known::Rfc2822;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, DecodeError, TransportError},
	obs::Stage,
};

/// Boxed future returned by [`CatalogHttpClient::execute`].
pub type HttpFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP transports shared by every widget instance.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can sit behind an
/// `Arc` and serve concurrent update cycles, and must hold no per-request state.
pub trait CatalogHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes `request` and resolves with the full response, whatever its status.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client with reqwest's defaults, surfacing TLS backend failures instead of
	/// panicking.
	pub fn try_new() -> Result<Self, ConfigError> {
		Ok(Self(ReqwestClient::builder().build()?))
	}
}
#[cfg(feature = "reqwest")]
impl CatalogHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

/// Sends `request`, aborting with [`TransportError::Cancelled`] as soon as `cancel` fires.
pub async fn send<C>(
	http_client: &C,
	stage: Stage,
	request: HttpRequest,
	cancel: &CancellationToken,
) -> Result<HttpResponse>
where
	C: ?Sized + CatalogHttpClient,
{
	tokio::select! {
		biased;
		_ = cancel.cancelled() => Err(TransportError::Cancelled { stage }.into()),
		result = http_client.execute(request) => result.map_err(|e| map_client_error(stage, e)),
	}
}

/// Accepts exactly `200 OK`; anything else becomes [`Error::Status`].
pub fn ensure_ok(stage: Stage, response: &HttpResponse) -> Result<()> {
	let status = response.status();

	if status == StatusCode::OK {
		Ok(())
	} else {
		Err(Error::Status {
			stage,
			code: status.as_u16(),
			retry_after: parse_retry_after(response.headers()),
		})
	}
}

/// Decodes a JSON body, keeping the path of the first mismatch for diagnostics.
pub fn decode_json<T>(stage: Stage, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| DecodeError { stage, source }.into())
}

fn map_client_error<E>(stage: Stage, err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::Network { stage, source: inner }.into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) =>
			TransportError::Network { stage, source: message.into() }.into(),
		_ => TransportError::Network {
			stage,
			source: "HTTP client failed with an unrecognized error.".into(),
		}
		.into(),
	}
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
