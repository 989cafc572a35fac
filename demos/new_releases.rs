//! Demonstrates one widget update cycle with the default reqwest transport against a mock of
//! the accounts and API hosts, then prints render-ready album views.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use spotify_widget::{
	CancellationToken,
	http::ReqwestHttpClient,
	provider::ApiEndpoints,
	reqwest::Client,
	widget::{NewReleasesWidget, WidgetConfig, WidgetMetadata},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/token").body("grant_type=client_credentials");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let browse_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/browse/new-releases")
				.query_param("limit", "2")
				.query_param("country", "SE")
				.header("authorization", "Bearer demo-access");
			then.status(200).header("content-type", "application/json").body(
				r#"{"albums":{"href":"","limit":2,"offset":0,"total":2,"items":[
					{"id":"a1","name":"Northern Lights","album_type":"album",
					 "artists":[{"id":"r1","name":"Aurora Choir","type":"artist"}],
					 "images":[{"height":640,"width":640,"url":"https://i.example/a1-640"},
					           {"height":300,"width":300,"url":"https://i.example/a1-300"}],
					 "release_date":"2024-11-01","total_tracks":9,
					 "external_urls":{"spotify":"https://open.example/a1"}},
					{"id":"a2","name":"Untitled","album_type":"single","artists":[],"images":[],
					 "release_date":"2024","total_tracks":1,
					 "external_urls":{"spotify":"https://open.example/a2"}}
				]}}"#,
			);
		})
		.await;
	let config: WidgetConfig = serde_json::from_str(
		r#"{"client-id":"demo-client","client-secret":"demo-secret","country":"SE","limit":2}"#,
	)?;
	let base = Url::parse(&server.base_url())?;
	let http_client = ReqwestHttpClient::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let widget = <NewReleasesWidget<ReqwestHttpClient>>::with_http_client(
		config,
		ApiEndpoints::from_bases(&base, &base)?,
		http_client,
		Arc::new(WidgetMetadata::default()),
	)?;
	let listing = widget.update(&CancellationToken::new()).await?;

	println!("{}: {} new releases.", widget.metadata.title(), listing.len());

	for view in widget.views(300) {
		println!("{}", serde_json::to_string(&view)?);
	}

	token_mock.assert_async().await;
	browse_mock.assert_async().await;

	Ok(())
}
