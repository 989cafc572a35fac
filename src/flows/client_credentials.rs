//! Client Credentials token exchange.
//!
//! Every call performs a fresh `POST` to the token endpoint with HTTP Basic client
//! authentication; nothing is cached here. Token reuse across update cycles, when enabled,
//! lives in the widget.

// crates.io
use oauth2::http::{
	Method, Request,
	header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials, TokenResponse},
	error::ConfigError,
	http::{self, CatalogHttpClient},
	obs::{self, Stage, StageOutcome, StageSpan},
};

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Exchanges client credentials for a bearer token.
pub struct CredentialExchanger<C>
where
	C: ?Sized + CatalogHttpClient,
{
	/// Transport shared with other stages and widgets.
	pub http_client: Arc<C>,
	/// Token endpoint URL.
	pub token_endpoint: Url,
}
impl<C> CredentialExchanger<C>
where
	C: ?Sized + CatalogHttpClient,
{
	/// Creates an exchanger bound to `token_endpoint`.
	pub fn new(http_client: impl Into<Arc<C>>, token_endpoint: Url) -> Self {
		Self { http_client: http_client.into(), token_endpoint }
	}

	/// Performs the `client_credentials` grant.
	///
	/// Succeeds only on `200 OK` with a JSON body carrying `access_token`. Fails with
	/// [`Error::Transport`] when the request cannot complete (including cancellation),
	/// [`Error::Status`] for any other status, and [`Error::Decode`] for an unexpected body.
	pub async fn exchange_token(
		&self,
		cancel: &CancellationToken,
		credentials: &Credentials,
	) -> Result<AccessToken> {
		const STAGE: Stage = Stage::TokenExchange;

		let span = StageSpan::new(STAGE, self.token_endpoint.as_str());

		obs::record_stage_outcome(STAGE, StageOutcome::Attempt);

		let result: Result<AccessToken> = span
			.instrument(async move {
				let request = self.build_request(credentials)?;
				let response = http::send(self.http_client.as_ref(), STAGE, request, cancel).await?;

				http::ensure_ok(STAGE, &response)?;

				let body = http::decode_json::<TokenResponse>(STAGE, response.body())?;

				Ok(AccessToken::from_response(body, OffsetDateTime::now_utc()))
			})
			.await;

		obs::observe(STAGE, result)
	}

	fn build_request(&self, credentials: &Credentials) -> Result<oauth2::HttpRequest> {
		let body = form_urlencoded::Serializer::new(String::new())
			.append_pair("grant_type", "client_credentials")
			.finish();
		let request = Request::builder()
			.method(Method::POST)
			.uri(self.token_endpoint.as_str())
			.header(AUTHORIZATION, credentials.basic_authorization())
			.header(CONTENT_TYPE, FORM_URLENCODED)
			.header(ACCEPT, "application/json")
			.body(body.into_bytes())
			.map_err(ConfigError::from)?;

		Ok(request)
	}
}
impl<C> Clone for CredentialExchanger<C>
where
	C: ?Sized + CatalogHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: self.http_client.clone(), token_endpoint: self.token_endpoint.clone() }
	}
}
impl<C> Debug for CredentialExchanger<C>
where
	C: ?Sized + CatalogHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialExchanger")
			.field("token_endpoint", &self.token_endpoint.as_str())
			.finish()
	}
}
