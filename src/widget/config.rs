//! Widget configuration as deserialized by the host and the validated settings derived from it.

// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError};

/// Raw widget configuration with kebab-case keys (`client-id`, `client-secret`, `country`,
/// `limit`, `content-type`).
///
/// Hosts deserialize this from their dashboard file; [`WidgetConfig::initialize`] validates it
/// and fills in defaults.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WidgetConfig {
	/// OAuth client identifier. Required.
	pub client_id: Option<String>,
	/// OAuth client secret. Required.
	pub client_secret: Option<String>,
	/// Market code; defaults to [`WidgetSettings::DEFAULT_COUNTRY`].
	pub country: Option<String>,
	/// Number of albums to request; non-positive values fall back to
	/// [`WidgetSettings::DEFAULT_LIMIT`].
	pub limit: Option<i64>,
	/// Listing kind; defaults to [`WidgetSettings::DEFAULT_CONTENT_TYPE`].
	pub content_type: Option<String>,
}
impl WidgetConfig {
	/// Starts a configuration with the two required credentials.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: Some(client_id.into()),
			client_secret: Some(client_secret.into()),
			..Default::default()
		}
	}

	/// Overrides the market code.
	pub fn with_country(mut self, country: impl Into<String>) -> Self {
		self.country = Some(country.into());

		self
	}

	/// Overrides the album limit.
	pub fn with_limit(mut self, limit: i64) -> Self {
		self.limit = Some(limit);

		self
	}

	/// Overrides the content type.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());

		self
	}

	/// Validates required fields and applies defaults.
	///
	/// A missing or empty credential is fatal: the widget is never constructed and therefore
	/// never updates.
	pub fn initialize(self) -> Result<WidgetSettings, ConfigError> {
		let client_id = self.client_id.ok_or(ConfigError::MissingClientId)?;
		let client_secret = self.client_secret.ok_or(ConfigError::MissingClientSecret)?;
		let credentials = Credentials::new(client_id, client_secret)?;
		let country = non_empty(self.country)
			.unwrap_or_else(|| WidgetSettings::DEFAULT_COUNTRY.into());
		let limit = match self.limit {
			Some(limit) if limit > 0 =>
				u32::try_from(limit).map_err(|_| ConfigError::LimitOutOfRange { limit })?,
			_ => WidgetSettings::DEFAULT_LIMIT,
		};
		let content_type = non_empty(self.content_type)
			.unwrap_or_else(|| WidgetSettings::DEFAULT_CONTENT_TYPE.into());

		Ok(WidgetSettings { credentials, country, limit, content_type })
	}
}
impl Debug for WidgetConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("WidgetConfig")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("country", &self.country)
			.field("limit", &self.limit)
			.field("content_type", &self.content_type)
			.finish()
	}
}

/// Validated, defaulted configuration consumed read-only by update cycles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetSettings {
	/// Client credentials.
	pub credentials: Credentials,
	/// Market code passed to the browse endpoint.
	pub country: String,
	/// Number of albums requested per update.
	pub limit: u32,
	/// Configured listing kind. Only the new-releases listing is fetched regardless of value.
	pub content_type: String,
}
impl WidgetSettings {
	/// Default market code.
	pub const DEFAULT_COUNTRY: &'static str = "US";
	/// Default album limit.
	pub const DEFAULT_LIMIT: u32 = 10;
	/// Default (and only implemented) content type.
	pub const DEFAULT_CONTENT_TYPE: &'static str = "new-releases";

	/// Returns `true` when the configured content type is the implemented listing.
	pub fn content_type_supported(&self) -> bool {
		self.content_type == Self::DEFAULT_CONTENT_TYPE
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_fill_optional_fields() {
		let settings =
			WidgetConfig::new("id", "secret").initialize().expect("Config should be valid.");

		assert_eq!(settings.credentials.client_id(), "id");
		assert_eq!(settings.country, "US");
		assert_eq!(settings.limit, 10);
		assert_eq!(settings.content_type, "new-releases");
		assert!(settings.content_type_supported());
	}

	#[test]
	fn kebab_case_keys_deserialize() {
		let config: WidgetConfig = serde_json::from_str(
			r#"{
				"client-id": "id",
				"client-secret": "secret",
				"country": "SE",
				"limit": 25,
				"content-type": "top-tracks"
			}"#,
		)
		.expect("Config should deserialize.");
		let settings = config.initialize().expect("Config should be valid.");

		assert_eq!(settings.country, "SE");
		assert_eq!(settings.limit, 25);
		assert_eq!(settings.content_type, "top-tracks");
		assert!(!settings.content_type_supported());
	}

	#[test]
	fn missing_credentials_are_fatal() {
		let err = WidgetConfig { client_secret: Some("secret".into()), ..Default::default() }
			.initialize()
			.expect_err("Missing client id should fail.");

		assert!(matches!(err, ConfigError::MissingClientId));

		let err = WidgetConfig { client_id: Some("id".into()), ..Default::default() }
			.initialize()
			.expect_err("Missing client secret should fail.");

		assert!(matches!(err, ConfigError::MissingClientSecret));

		let err = WidgetConfig::new("", "secret")
			.initialize()
			.expect_err("Empty client id should fail.");

		assert!(matches!(err, ConfigError::MissingClientId));
	}

	#[test]
	fn only_empty_strings_take_defaults() {
		let settings = WidgetConfig::new("id", "secret")
			.with_country("")
			.with_content_type("")
			.initialize()
			.expect("Config should be valid.");

		assert_eq!(settings.country, "US");
		assert_eq!(settings.content_type, "new-releases");

		let settings = WidgetConfig::new("id", "secret")
			.with_country(" ")
			.initialize()
			.expect("Config should be valid.");

		assert_eq!(settings.country, " ");
	}

	#[test]
	fn non_positive_limits_fall_back_to_default() {
		for limit in [0, -5] {
			let settings = WidgetConfig::new("id", "secret")
				.with_limit(limit)
				.initialize()
				.expect("Config should be valid.");

			assert_eq!(settings.limit, WidgetSettings::DEFAULT_LIMIT);
		}
	}

	#[test]
	fn oversized_limit_is_rejected() {
		let err = WidgetConfig::new("id", "secret")
			.with_limit(i64::from(u32::MAX) + 1)
			.initialize()
			.expect_err("Limits beyond u32 should fail.");

		assert!(matches!(err, ConfigError::LimitOutOfRange { .. }));
	}

	#[test]
	fn debug_output_hides_secret() {
		let rendered = format!("{:?}", WidgetConfig::new("id", "hunter2"));

		assert!(!rendered.contains("hunter2"));
	}
}
