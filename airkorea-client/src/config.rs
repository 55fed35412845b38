//! Runtime configuration for the measurement service client.

use crate::errors::AirKoreaError;

/// Default endpoint of the ArpltnInforInqireSvc real-time measurement API.
pub const DEFAULT_BASE_URL: &str =
    "https://apis.data.go.kr/B552584/ArpltnInforInqireSvc/getCtprvnRltmMesureDnsty";

/// Configuration for the AirKorea client.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// Service key issued by data.go.kr.
    pub service_key: String,
    /// Measurement endpoint URL.
    pub base_url: String,
    /// Page to request (the service is paged; a single page is fetched).
    pub page_no: u32,
    /// Rows per page.
    pub num_of_rows: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Skip TLS certificate validation.
    ///
    /// The upstream service is historically called with verification
    /// disabled; this is a known deviation from secure defaults and is
    /// surfaced here as an explicit knob instead of being hardwired.
    pub accept_invalid_certs: bool,
}

impl ProviderConfig {
    /// Builds a config from environment variables.
    ///
    /// # Env
    /// - `AIRKOREA_SERVICE_KEY` (required)
    /// - `AIRKOREA_BASE_URL` (optional, defaults to [`DEFAULT_BASE_URL`])
    ///
    /// # Errors
    /// Returns [`AirKoreaError::Config`] if the service key is missing.
    pub fn from_env() -> Result<Self, AirKoreaError> {
        let service_key = std::env::var("AIRKOREA_SERVICE_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AirKoreaError::Config("AIRKOREA_SERVICE_KEY is not set".into()))?;

        let base_url = std::env::var("AIRKOREA_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            service_key,
            base_url,
            page_no: 1,
            num_of_rows: 100,
            timeout_secs: 15,
            accept_invalid_certs: true,
        })
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), AirKoreaError> {
        if self.service_key.trim().is_empty() {
            return Err(AirKoreaError::Config("service_key is empty".into()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AirKoreaError::Config(
                "base_url must start with http:// or https://".into(),
            ));
        }
        if self.num_of_rows == 0 {
            return Err(AirKoreaError::Config("num_of_rows must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ProviderConfig {
        ProviderConfig {
            service_key: "key".into(),
            base_url: DEFAULT_BASE_URL.into(),
            page_no: 1,
            num_of_rows: 100,
            timeout_secs: 15,
            accept_invalid_certs: true,
        }
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(cfg().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_key() {
        let mut c = cfg();
        c.service_key = "  ".into();
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_url() {
        let mut c = cfg();
        c.base_url = "apis.data.go.kr".into();
        assert!(c.validate().is_err());
    }
}
