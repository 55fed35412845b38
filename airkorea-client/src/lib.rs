//! Client for the AirKorea real-time measurement service.
//!
//! This crate provides a clean API to:
//! - Fetch the current per-station measurements for a region (one GET)
//! - Normalize the raw payload into [`MeasurementRecord`]s, tolerating any
//!   missing or malformed level of the response shape
//!
//! The fetch contract is best-effort: transport failures, non-200 statuses
//! and non-JSON bodies all collapse to "no data" at the
//! [`AirKoreaClient::fetch_measurements`] level. Callers must treat an
//! empty result as a valid, terminal outcome for that fetch.

mod config;
mod errors;
mod normalize;
mod record;

pub use config::{DEFAULT_BASE_URL, ProviderConfig};
pub use errors::AirKoreaError;
pub use normalize::parse_measurements;
pub use record::MeasurementRecord;

use serde_json::Value;
use tracing::{debug, trace, warn};

/// HTTP client for the real-time measurement endpoint.
///
/// Holds a configured `reqwest::Client`; construct once per fetch action or
/// reuse across actions, both are cheap.
pub struct AirKoreaClient {
    http: reqwest::Client,
    cfg: ProviderConfig,
}

impl AirKoreaClient {
    /// Constructs a new client from the given configuration.
    ///
    /// TLS certificate validation follows `cfg.accept_invalid_certs`; the
    /// default reproduces the upstream contract (validation disabled).
    ///
    /// # Errors
    /// Returns `AirKoreaError::Config` for invalid configuration and
    /// `AirKoreaError::Transport` if the HTTP client cannot be built.
    pub fn new(cfg: ProviderConfig) -> Result<Self, AirKoreaError> {
        cfg.validate()?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .danger_accept_invalid_certs(cfg.accept_invalid_certs)
            .build()?;
        Ok(Self { http, cfg })
    }

    /// Fetches the raw measurement payload for a region.
    ///
    /// Issues one GET with the provider's query parameters and parses the
    /// body as JSON.
    ///
    /// # Errors
    /// - `AirKoreaError::Transport` on network failure
    /// - `AirKoreaError::HttpStatus` on non-2xx status
    /// - `AirKoreaError::Decode` when the body is not valid JSON
    pub async fn fetch_raw(&self, region: &str) -> Result<Value, AirKoreaError> {
        trace!("fetch_raw region={region}");

        let resp = self
            .http
            .get(&self.cfg.base_url)
            .query(&[
                ("sidoName", region.to_string()),
                ("pageNo", self.cfg.page_no.to_string()),
                ("numOfRows", self.cfg.num_of_rows.to_string()),
                ("returnType", "json".to_string()),
                ("serviceKey", self.cfg.service_key.clone()),
                ("ver", "1.0".to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(AirKoreaError::HttpStatus {
                status,
                url: self.cfg.base_url.clone(),
                snippet,
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| AirKoreaError::Decode(format!("body is not JSON: {e}")))
    }

    /// Fetches and normalizes measurements for a region, best-effort.
    ///
    /// Any fetch or decode failure is logged and collapses to an empty
    /// record list. This is the deliberate contract of the upstream call:
    /// "no data" is a valid terminal outcome, not a retryable error.
    pub async fn fetch_measurements(&self, region: &str) -> Vec<MeasurementRecord> {
        match self.fetch_raw(region).await {
            Ok(raw) => {
                let records = parse_measurements(&raw);
                debug!("fetch_measurements region={region} records={}", records.len());
                records
            }
            Err(e) => {
                warn!("fetch_measurements region={region} failed: {e}; treating as no data");
                Vec::new()
            }
        }
    }
}
