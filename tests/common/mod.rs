//! Shared fixtures for integration tests.

#![allow(dead_code)]

// std
pub use std::sync::Arc;
// crates.io
use spotify_widget::{
	flows::{CredentialExchanger, NewReleasesFetcher},
	http::ReqwestHttpClient,
	provider::ApiEndpoints,
	reqwest::Client,
	url::Url,
	widget::{NewReleasesWidget, WidgetConfig, WidgetMetadata},
};

pub const CLIENT_ID: &str = "widget-client";
pub const CLIENT_SECRET: &str = "widget-secret";
/// `Basic base64("widget-client:widget-secret")`.
pub const BASIC_AUTH: &str = "Basic d2lkZ2V0LWNsaWVudDp3aWRnZXQtc2VjcmV0";
pub const TOKEN_BODY: &str = r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#;
pub const TWO_ALBUMS_BODY: &str = r#"{
	"albums": {
		"href": "https://api.spotify.com/v1/browse/new-releases?offset=0&limit=2",
		"limit": 2,
		"offset": 0,
		"total": 100,
		"items": [
			{
				"id": "first",
				"name": "First Album",
				"album_type": "album",
				"artists": [{"id": "ar1", "name": "Lead Artist", "type": "artist"}],
				"images": [
					{"height": 640, "width": 640, "url": "https://i.scdn.co/first-640"},
					{"height": 300, "width": 300, "url": "https://i.scdn.co/first-300"},
					{"height": 64, "width": 64, "url": "https://i.scdn.co/first-64"}
				],
				"release_date": "2024-03-08",
				"total_tracks": 11,
				"external_urls": {"spotify": "https://open.spotify.com/album/first"}
			},
			{
				"id": "second",
				"name": "Second Single",
				"album_type": "single",
				"artists": [],
				"images": [],
				"release_date": "2024-03",
				"total_tracks": 1,
				"external_urls": {"spotify": "https://open.spotify.com/album/second"}
			}
		]
	}
}"#;

pub type TestWidget = NewReleasesWidget<ReqwestHttpClient>;

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_http_client() -> Arc<ReqwestHttpClient> {
	let client = Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	Arc::new(ReqwestHttpClient::with_client(client))
}

/// Points both the accounts host and the API host at the same mock server.
pub fn test_endpoints(base_url: &str) -> ApiEndpoints {
	let base = Url::parse(base_url).expect("Mock server base URL should parse.");

	ApiEndpoints::from_bases(&base, &base).expect("Mock endpoints should be valid.")
}

pub fn test_config() -> WidgetConfig {
	WidgetConfig::new(CLIENT_ID, CLIENT_SECRET)
}

pub fn build_exchanger(base_url: &str) -> CredentialExchanger<ReqwestHttpClient> {
	CredentialExchanger::new(test_http_client(), test_endpoints(base_url).token)
}

pub fn build_fetcher(base_url: &str) -> NewReleasesFetcher<ReqwestHttpClient> {
	NewReleasesFetcher::new(test_http_client(), test_endpoints(base_url).new_releases)
}

pub fn build_widget(base_url: &str, config: WidgetConfig) -> TestWidget {
	NewReleasesWidget::with_http_client(
		config,
		test_endpoints(base_url),
		test_http_client(),
		Arc::new(WidgetMetadata::default()),
	)
	.expect("Test widget configuration should be valid.")
}
