//! Runtime configuration for the OpenAQ client.
//!
//! Nothing here is hard-coded apart from the public endpoint default: the API key
//! must come from the caller, a config file or the environment.

use bon::bon;
use config::{Config, Environment, File};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::time::Duration;
use thiserror::Error;

/// The OpenAQ v2 measurements endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openaq.org/v2/measurements";

const ENV_PREFIX: &str = "OPENAQ";
const CONFIG_FILE_NAME: &str = "airquality";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OpenAQ API key is missing or empty")]
    MissingApiKey,

    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Failed to load configuration")]
    Source(#[from] config::ConfigError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Raw settings as read from `airquality.{toml,json,yaml}` and `OPENAQ_*` variables.
#[derive(Deserialize)]
struct Settings {
    api_key: Option<Secret<String>>,
    endpoint: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    timeout_secs: Option<u64>,
}

/// Validated client configuration.
///
/// # Examples
///
/// ```
/// use airquality::AirQualityConfig;
/// use std::time::Duration;
///
/// let config = AirQualityConfig::builder()
///     .api_key("my-key")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// assert_eq!(config.endpoint().as_str(), "https://api.openaq.org/v2/measurements");
/// ```
#[derive(Debug, Clone)]
pub struct AirQualityConfig {
    api_key: Secret<String>,
    endpoint: Url,
    timeout: Option<Duration>,
}

#[bon]
impl AirQualityConfig {
    /// Builds a configuration, validating every field.
    ///
    /// * `.api_key(..)`: **Required.** Sent as the `X-API-Key` header. Must not be blank.
    /// * `.endpoint(&str)`: Optional. Measurements endpoint, defaults to [`DEFAULT_ENDPOINT`].
    /// * `.timeout(Duration)`: Optional. Whole-request timeout. The transport default applies when unset.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        endpoint: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            api_key: Secret::new(api_key),
            endpoint: parse_endpoint(endpoint.unwrap_or(DEFAULT_ENDPOINT))?,
            timeout,
        })
    }

    /// Loads the configuration from an optional `airquality.*` file in the working
    /// directory, overridden by `OPENAQ_API_KEY`, `OPENAQ_ENDPOINT` and
    /// `OPENAQ_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        let api_key = settings.api_key.ok_or(ConfigError::MissingApiKey)?;
        Self::builder()
            .api_key(api_key.expose_secret().clone())
            .maybe_endpoint(settings.endpoint.as_deref())
            .maybe_timeout(settings.timeout_secs.map(Duration::from_secs))
            .build()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Creates the HTTP client used for every request, applying the timeout if one is set.
    pub(crate) fn http_client(&self) -> Result<Client, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(ConfigError::HttpClient)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
