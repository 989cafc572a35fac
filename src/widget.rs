//! New-releases widget: configuration, host metadata, and the update orchestrator.
//!
//! [`NewReleasesWidget::update`] runs one cycle: authenticate, fetch, commit. A failure in
//! either network stage short-circuits the cycle and leaves the previously committed
//! [`Listing`] in place, so hosts keep rendering stale data until a later cycle succeeds.
//! Retry timing belongs to the host; nothing here loops.

pub mod config;
pub mod metadata;

pub use config::*;
pub use metadata::*;

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	catalog::{AlbumView, Listing},
	error::{ConfigError, UpdateError},
	flows::{CredentialExchanger, NewReleasesFetcher},
	http::CatalogHttpClient,
	obs::{self, Stage, StageOutcome, StageSpan},
	provider::ApiEndpoints,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Widget specialized for the crate's default reqwest transport.
pub type ReqwestWidget = NewReleasesWidget<ReqwestHttpClient>;

/// Whether a token from an earlier cycle may be reused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenReuse {
	/// Exchange credentials on every update cycle.
	#[default]
	Disabled,
	/// Reuse the last token while it stays valid for at least `leeway`.
	UntilExpiry {
		/// Minimum remaining lifetime required for reuse.
		leeway: Duration,
	},
}

/// Data-source widget that keeps the most recent new-releases listing.
///
/// The widget owns its settings, the injected transport (through its exchanger and fetcher),
/// and the committed listing. Readers can render through [`listing`](Self::listing) or
/// [`views`](Self::views) while an update is in flight; the listing swaps atomically on
/// success.
pub struct NewReleasesWidget<C>
where
	C: ?Sized + CatalogHttpClient,
{
	/// Validated configuration.
	pub settings: WidgetSettings,
	/// Host-provided title and cache duration.
	pub metadata: Arc<dyn RenderMetadata>,
	exchanger: CredentialExchanger<C>,
	fetcher: NewReleasesFetcher<C>,
	token_reuse: TokenReuse,
	cached_token: Mutex<Option<AccessToken>>,
	listing: RwLock<Listing>,
}
impl<C> NewReleasesWidget<C>
where
	C: ?Sized + CatalogHttpClient,
{
	/// Creates a widget that reuses the caller-provided transport.
	///
	/// Fails when `config` lacks credentials or carries an out-of-range limit; such a widget
	/// never exists and therefore never attempts an update.
	pub fn with_http_client(
		config: WidgetConfig,
		endpoints: ApiEndpoints,
		http_client: impl Into<Arc<C>>,
		metadata: Arc<dyn RenderMetadata>,
	) -> Result<Self, ConfigError> {
		let settings = config.initialize()?;

		if !settings.content_type_supported() {
			obs::log_unsupported_content_type(&settings.content_type);
		}

		let http_client: Arc<C> = http_client.into();

		Ok(Self {
			settings,
			metadata,
			exchanger: CredentialExchanger::new(http_client.clone(), endpoints.token),
			fetcher: NewReleasesFetcher::new(http_client, endpoints.new_releases),
			token_reuse: TokenReuse::default(),
			cached_token: Default::default(),
			listing: Default::default(),
		})
	}

	/// Opts into reusing tokens across cycles.
	pub fn with_token_reuse(mut self, reuse: TokenReuse) -> Self {
		self.token_reuse = reuse;

		self
	}

	/// Runs one update cycle.
	///
	/// On success the committed listing is replaced wholesale and returned. On failure the
	/// previous listing is untouched and the error names the stage that failed; the browse
	/// endpoint is never called when authentication fails.
	pub async fn update(&self, cancel: &CancellationToken) -> Result<Listing, UpdateError> {
		const STAGE: Stage = Stage::Update;

		let span = StageSpan::new(STAGE, self.metadata.title());

		obs::record_stage_outcome(STAGE, StageOutcome::Attempt);

		let result: Result<Listing, UpdateError> = span
			.instrument(async move {
				let token = self
					.authenticate(cancel)
					.await
					.map_err(|e| UpdateError::new(Stage::TokenExchange, e))?;
				let albums = self
					.fetcher
					.fetch_listing(cancel, &token, self.settings.limit, &self.settings.country)
					.await
					.map_err(|e| {
						if e.status_code() == Some(401) {
							self.cached_token.lock().take();
						}

						UpdateError::new(Stage::NewReleases, e)
					})?;
				let listing = Listing::from(albums);

				*self.listing.write() = listing.clone();

				Ok(listing)
			})
			.await;

		obs::observe(STAGE, result)
	}

	/// Listing committed by the last successful update (empty before the first one).
	pub fn listing(&self) -> Listing {
		self.listing.read().clone()
	}

	/// Render-ready views of the committed listing, with covers closest to `preferred_width`.
	pub fn views(&self, preferred_width: u32) -> Vec<AlbumView> {
		self.listing().iter().map(|album| AlbumView::new(album, preferred_width)).collect()
	}

	/// Token exchanger used by update cycles.
	pub fn exchanger(&self) -> &CredentialExchanger<C> {
		&self.exchanger
	}

	/// Listing fetcher used by update cycles.
	pub fn fetcher(&self) -> &NewReleasesFetcher<C> {
		&self.fetcher
	}

	async fn authenticate(&self, cancel: &CancellationToken) -> Result<AccessToken> {
		let TokenReuse::UntilExpiry { leeway } = self.token_reuse else {
			return self.exchanger.exchange_token(cancel, &self.settings.credentials).await;
		};
		let now = OffsetDateTime::now_utc();
		let cached = self
			.cached_token
			.lock()
			.as_ref()
			.filter(|token| token.is_fresh_at(now, leeway))
			.cloned();

		if let Some(token) = cached {
			return Ok(token);
		}

		let token = self.exchanger.exchange_token(cancel, &self.settings.credentials).await?;

		*self.cached_token.lock() = Some(token.clone());

		Ok(token)
	}
}
#[cfg(feature = "reqwest")]
impl NewReleasesWidget<ReqwestHttpClient> {
	/// Creates a widget against the production endpoints with a freshly built reqwest transport
	/// and default metadata.
	///
	/// Fails with [`ConfigError::HttpClientBuild`] when the transport cannot be constructed.
	pub fn new(config: WidgetConfig) -> Result<Self, ConfigError> {
		Self::with_http_client(
			config,
			ApiEndpoints::spotify()?,
			ReqwestHttpClient::try_new()?,
			Arc::new(WidgetMetadata::default()),
		)
	}
}
impl<C> Debug for NewReleasesWidget<C>
where
	C: ?Sized + CatalogHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("NewReleasesWidget")
			.field("title", &self.metadata.title())
			.field("settings", &self.settings)
			.field("exchanger", &self.exchanger)
			.field("fetcher", &self.fetcher)
			.field("token_reuse", &self.token_reuse)
			.field("albums", &self.listing.read().len())
			.finish()
	}
}
