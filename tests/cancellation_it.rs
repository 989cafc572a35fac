// std
use std::{
	future,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};
// crates.io
use oauth2::{HttpClientError, HttpRequest, HttpResponse, http::Method};
// self
use spotify_widget::{
	CancellationToken,
	auth::Credentials,
	error::{Error, TransportError},
	flows::CredentialExchanger,
	http::{CatalogHttpClient, HttpFuture},
	obs::Stage,
	provider::ApiEndpoints,
	widget::{NewReleasesWidget, WidgetConfig, WidgetMetadata},
};

/// Transport whose requests never complete; counts how many were issued.
#[derive(Default)]
struct StalledClient {
	calls: AtomicUsize,
}
impl CatalogHttpClient for StalledClient {
	type TransportError = std::io::Error;

	fn execute(&self, _request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(future::pending::<Result<HttpResponse, HttpClientError<std::io::Error>>>())
	}
}

/// Transport that issues tokens immediately but never answers the browse call.
#[derive(Default)]
struct StalledBrowseClient {
	browse_calls: AtomicUsize,
}
impl CatalogHttpClient for StalledBrowseClient {
	type TransportError = std::io::Error;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		if request.method() == Method::POST {
			return Box::pin(async {
				Ok(HttpResponse::new(
					br#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#.to_vec(),
				))
			});
		}

		self.browse_calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(future::pending::<Result<HttpResponse, HttpClientError<std::io::Error>>>())
	}
}

/// Transport that fails every request before reaching the network.
struct RefusingClient;
impl CatalogHttpClient for RefusingClient {
	type TransportError = std::io::Error;

	fn execute(&self, _request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		Box::pin(async {
			Err(HttpClientError::Io(std::io::Error::new(
				std::io::ErrorKind::ConnectionRefused,
				"refused",
			)))
		})
	}
}

fn stalled_widget(client: Arc<StalledClient>) -> NewReleasesWidget<StalledClient> {
	NewReleasesWidget::with_http_client(
		WidgetConfig::new("id", "secret"),
		ApiEndpoints::spotify().expect("Production endpoints should be valid."),
		client,
		Arc::new(WidgetMetadata::default()),
	)
	.expect("Widget should build.")
}

#[tokio::test]
async fn cancelled_token_aborts_exchange_before_sending() {
	let client = Arc::new(StalledClient::default());
	let exchanger: CredentialExchanger<StalledClient> = CredentialExchanger::new(
		client.clone(),
		ApiEndpoints::spotify().expect("Production endpoints should be valid.").token,
	);
	let credentials = Credentials::new("id", "secret").expect("Credentials should be valid.");
	let cancel = CancellationToken::new();

	cancel.cancel();

	let err = exchanger
		.exchange_token(&cancel, &credentials)
		.await
		.expect_err("A cancelled exchange should fail.");

	assert!(err.is_cancelled());
	assert!(matches!(
		err,
		Error::Transport(TransportError::Cancelled { stage: Stage::TokenExchange })
	));
}

#[tokio::test]
async fn cancellation_interrupts_in_flight_update() {
	let client = Arc::new(StalledClient::default());
	let widget = stalled_widget(client.clone());
	let cancel = CancellationToken::new();
	let trigger = cancel.clone();

	tokio::spawn(async move {
		tokio::time::sleep(Duration::from_millis(50)).await;
		trigger.cancel();
	});

	let err = tokio::time::timeout(Duration::from_secs(5), widget.update(&cancel))
		.await
		.expect("Cancellation should end the cycle promptly.")
		.expect_err("A cancelled cycle should fail.");

	assert_eq!(err.stage, Stage::TokenExchange);
	assert!(err.source.is_cancelled());
	assert_eq!(client.calls.load(Ordering::SeqCst), 1);
	assert!(widget.listing().is_empty());
}

#[tokio::test]
async fn transport_failure_surfaces_as_update_error() {
	let widget: NewReleasesWidget<RefusingClient> = NewReleasesWidget::with_http_client(
		WidgetConfig::new("id", "secret"),
		ApiEndpoints::spotify().expect("Production endpoints should be valid."),
		Arc::new(RefusingClient),
		Arc::new(WidgetMetadata::default()),
	)
	.expect("Widget should build.");
	let err = widget
		.update(&CancellationToken::new())
		.await
		.expect_err("A refused connection should fail the cycle.");

	assert_eq!(err.stage, Stage::TokenExchange);
	assert!(matches!(err.source, Error::Transport(TransportError::Io(_))));
	assert!(widget.listing().is_empty());
}

#[tokio::test]
async fn cancellation_interrupts_in_flight_fetch() {
	let client = Arc::new(StalledBrowseClient::default());
	let widget: NewReleasesWidget<StalledBrowseClient> = NewReleasesWidget::with_http_client(
		WidgetConfig::new("id", "secret"),
		ApiEndpoints::spotify().expect("Production endpoints should be valid."),
		client.clone(),
		Arc::new(WidgetMetadata::default()),
	)
	.expect("Widget should build.");
	let cancel = CancellationToken::new();
	let trigger = cancel.clone();

	tokio::spawn(async move {
		tokio::time::sleep(Duration::from_millis(50)).await;
		trigger.cancel();
	});

	let err = tokio::time::timeout(Duration::from_secs(5), widget.update(&cancel))
		.await
		.expect("Cancellation should end the cycle promptly.")
		.expect_err("A cancelled cycle should fail.");

	assert_eq!(err.stage, Stage::NewReleases);
	assert!(err.source.is_cancelled());
	assert!(matches!(
		err.source,
		Error::Transport(TransportError::Cancelled { stage: Stage::NewReleases })
	));
	assert_eq!(client.browse_calls.load(Ordering::SeqCst), 1);
	assert!(widget.listing().is_empty());
}
