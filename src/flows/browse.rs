//! New-releases listing fetch.

// crates.io
use oauth2::http::{
	Method, Request,
	header::{ACCEPT, AUTHORIZATION},
};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	catalog::{Album, NewReleasesPage},
	error::ConfigError,
	http::{self, CatalogHttpClient},
	obs::{self, Stage, StageOutcome, StageSpan},
};

/// Fetches the new-releases listing with a bearer token.
pub struct NewReleasesFetcher<C>
where
	C: ?Sized + CatalogHttpClient,
{
	/// Transport shared with other stages and widgets.
	pub http_client: Arc<C>,
	/// Browse endpoint URL without query parameters.
	pub endpoint: Url,
}
impl<C> NewReleasesFetcher<C>
where
	C: ?Sized + CatalogHttpClient,
{
	/// Creates a fetcher bound to `endpoint`.
	pub fn new(http_client: impl Into<Arc<C>>, endpoint: Url) -> Self {
		Self { http_client: http_client.into(), endpoint }
	}

	/// Fetches up to `limit` albums for the `country` market.
	///
	/// The returned albums keep the order and count of the response's `albums.items`. Errors
	/// follow [`CredentialExchanger::exchange_token`](crate::flows::CredentialExchanger).
	pub async fn fetch_listing(
		&self,
		cancel: &CancellationToken,
		token: &AccessToken,
		limit: u32,
		country: &str,
	) -> Result<Vec<Album>> {
		const STAGE: Stage = Stage::NewReleases;

		let span = StageSpan::new(STAGE, self.endpoint.as_str());

		obs::record_stage_outcome(STAGE, StageOutcome::Attempt);

		let result: Result<Vec<Album>> = span
			.instrument(async move {
				let request = self.build_request(token, limit, country)?;
				let response = http::send(self.http_client.as_ref(), STAGE, request, cancel).await?;

				http::ensure_ok(STAGE, &response)?;

				let page = http::decode_json::<NewReleasesPage>(STAGE, response.body())?;

				Ok(page.albums.items)
			})
			.await;

		obs::observe(STAGE, result)
	}

	/// URL for one listing request.
	pub fn listing_url(&self, limit: u32, country: &str) -> Url {
		let mut url = self.endpoint.clone();

		url.query_pairs_mut()
			.append_pair("limit", &limit.to_string())
			.append_pair("country", country);

		url
	}

	fn build_request(
		&self,
		token: &AccessToken,
		limit: u32,
		country: &str,
	) -> Result<oauth2::HttpRequest> {
		let request = Request::builder()
			.method(Method::GET)
			.uri(self.listing_url(limit, country).as_str())
			.header(AUTHORIZATION, token.bearer_authorization())
			.header(ACCEPT, "application/json")
			.body(Vec::new())
			.map_err(ConfigError::from)?;

		Ok(request)
	}
}
impl<C> Clone for NewReleasesFetcher<C>
where
	C: ?Sized + CatalogHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: self.http_client.clone(), endpoint: self.endpoint.clone() }
	}
}
impl<C> Debug for NewReleasesFetcher<C>
where
	C: ?Sized + CatalogHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("NewReleasesFetcher").field("endpoint", &self.endpoint.as_str()).finish()
	}
}
