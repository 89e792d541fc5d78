use crate::config::{AirQualityConfig, ConfigError};
use crate::error::AirQualityError;
use crate::measurements::error::FetchError;
use crate::measurements::raw_table::RawTable;
use crate::types::query::MeasurementQuery;
use log::{debug, info, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

const API_KEY_HEADER: &str = "X-API-Key";

/// Issues the single GET request of a pipeline run.
pub struct MeasurementsFetcher {
    client: Client,
    config: AirQualityConfig,
}

impl MeasurementsFetcher {
    pub fn new(config: AirQualityConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: config.http_client()?,
            config,
        })
    }

    /// Uses a caller-supplied client, e.g. one with custom proxy or TLS settings.
    pub fn with_client(config: AirQualityConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// Performs exactly one request for `query` and decodes its `results` list.
    ///
    /// Any status other than 200 is returned as [`FetchError::HttpStatus`] carrying the
    /// response body. There are no retries.
    pub async fn fetch(&self, query: &MeasurementQuery) -> Result<RawTable, AirQualityError> {
        let endpoint = self.config.endpoint().as_str();
        info!(
            "Requesting {} measurements from {} ({} to {}, location: {})",
            query.parameter(),
            endpoint,
            query.date_from(),
            query.date_to(),
            query.location().unwrap_or("any")
        );

        let response = self
            .client
            .get(self.config.endpoint().clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "json")
            .header(API_KEY_HEADER, self.config.api_key())
            .query(&query.params())
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(endpoint.to_string(), e))?;

        let status = response.status();
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::BodyRead(url.clone(), e))?;

        if status != StatusCode::OK {
            warn!("HTTP error for {}: {} {}", url, status, body);
            return Err(FetchError::HttpStatus { url, status, body }.into());
        }

        let table = RawTable::from_json_str(&body)?;
        debug!("Decoded {} measurement records from {}", table.len(), url);
        Ok(table)
    }
}
