//! Endpoint descriptor for the accounts host and the API host.

// self
use crate::{_prelude::*, error::ConfigError};

/// Accounts host serving the token endpoint.
pub const SPOTIFY_ACCOUNTS_BASE: &str = "https://accounts.spotify.com/";
/// API host serving the browse endpoints.
pub const SPOTIFY_API_BASE: &str = "https://api.spotify.com/";

const TOKEN_PATH: &str = "api/token";
const NEW_RELEASES_PATH: &str = "v1/browse/new-releases";

/// Validated endpoint set consumed by the exchanger and the fetcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
	/// Client-credentials token endpoint (`POST`).
	pub token: Url,
	/// New-releases browse endpoint (`GET`), without query parameters.
	pub new_releases: Url,
}
impl ApiEndpoints {
	/// Validates explicit endpoint URLs.
	pub fn new(token: Url, new_releases: Url) -> Result<Self, ConfigError> {
		validate_endpoint("token", &token)?;
		validate_endpoint("new_releases", &new_releases)?;

		Ok(Self { token, new_releases })
	}

	/// Derives the standard endpoint paths from an accounts base and an API base.
	pub fn from_bases(accounts_base: &Url, api_base: &Url) -> Result<Self, ConfigError> {
		let token = join("token", accounts_base, TOKEN_PATH)?;
		let new_releases = join("new_releases", api_base, NEW_RELEASES_PATH)?;

		Self::new(token, new_releases)
	}

	/// Production Spotify endpoints.
	pub fn spotify() -> Result<Self, ConfigError> {
		let accounts = parse("token", SPOTIFY_ACCOUNTS_BASE)?;
		let api = parse("new_releases", SPOTIFY_API_BASE)?;

		Self::from_bases(&accounts, &api)
	}
}

fn parse(endpoint: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
}

fn join(endpoint: &'static str, base: &Url, path: &str) -> Result<Url, ConfigError> {
	// `Url::join` replaces the last segment unless the base ends with a slash.
	let mut base = base.clone();

	if !base.path().ends_with('/') {
		let dir = format!("{}/", base.path());

		base.set_path(&dir);
	}

	base.join(path).map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
}

fn validate_endpoint(endpoint: &'static str, url: &Url) -> Result<(), ConfigError> {
	match url.scheme() {
		"http" | "https" => Ok(()),
		_ => Err(ConfigError::UnsupportedScheme { endpoint, url: url.to_string() }),
	}
}
