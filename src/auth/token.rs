//! Bearer tokens minted by the client-credentials exchange.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Token endpoint response body (`{access_token, token_type, expires_in}`).
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
	/// Bearer token value.
	pub access_token: TokenSecret,
	/// Token type reported by the provider, usually `Bearer`.
	#[serde(default)]
	pub token_type: String,
	/// Lifetime in seconds, when reported.
	#[serde(default)]
	pub expires_in: Option<u64>,
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse")
			.field("access_token", &self.access_token)
			.field("token_type", &self.token_type)
			.field("expires_in", &self.expires_in)
			.finish()
	}
}

/// Short-lived bearer token scoped to one update cycle unless reuse is enabled.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
	/// Access token secret; callers must avoid logging it.
	pub secret: TokenSecret,
	/// Token type reported by the provider.
	pub token_type: String,
	/// Lifetime reported by the provider.
	pub expires_in: Option<Duration>,
	/// Instant the exchange completed.
	pub issued_at: OffsetDateTime,
}
impl AccessToken {
	/// Builds a token from a decoded endpoint response.
	pub fn from_response(response: TokenResponse, issued_at: OffsetDateTime) -> Self {
		let expires_in = response
			.expires_in
			.map(|secs| Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));

		Self { secret: response.access_token, token_type: response.token_type, expires_in, issued_at }
	}

	/// Expiry instant, if the provider reported a lifetime.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		self.issued_at.checked_add(self.expires_in?)
	}

	/// Returns `true` when the token stays valid for at least `leeway` past `now`.
	///
	/// Tokens without a reported lifetime are never considered reusable, and neither are tokens
	/// checked with a leeway that overflows the calendar.
	pub fn is_fresh_at(&self, now: OffsetDateTime, leeway: Duration) -> bool {
		match self.expires_at() {
			Some(expires_at) =>
				now.checked_add(leeway).is_some_and(|deadline| deadline < expires_at),
			None => false,
		}
	}

	/// Builds the `Authorization` header value for API calls.
	pub fn bearer_authorization(&self) -> String {
		format!("Bearer {}", self.secret.expose())
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("secret", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("expires_in", &self.expires_in)
			.field("issued_at", &self.issued_at)
			.finish()
	}
}
