//! Gemini-backed invoice price extractor.

use std::time::Instant;

use tracing::{debug, warn};

use super::prompt::build_prompt;
use super::request::GenerateContentRequest;
use super::response::parse_price_response;
use super::NO_PRICE_FOUND;
use crate::error::{InvpriceError, Result};
use crate::models::config::GeminiConfig;

/// Asks Gemini for the total price of an invoice.
///
/// Build it once and share it: the underlying `reqwest::Client` keeps a
/// connection pool, and every call is independent of the others.
pub struct GeminiPriceExtractor {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiPriceExtractor {
    /// Create an extractor with its own HTTP client.
    ///
    /// Fails on a zero timeout. The API key is checked on each call,
    /// before any request is sent.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.timeout_secs == 0 {
            return Err(InvpriceError::Config(
                "Gemini timeout must be at least 1 second".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("invprice/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| InvpriceError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(config, http))
    }

    /// Create an extractor around an existing HTTP client.
    pub fn with_client(config: GeminiConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Configuration this extractor was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Return the total price found in `invoice_text`, or [`NO_PRICE_FOUND`].
    ///
    /// Fails on a missing API key, a non-success status, a timeout, a
    /// transport error, or a body that is not JSON.
    pub async fn find_price(&self, invoice_text: &str) -> Result<String> {
        let api_key = self.config.usable_api_key().ok_or_else(|| {
            InvpriceError::Config(
                "Gemini API key is not configured (set GEMINI_API_KEY or gemini.api_key)"
                    .to_string(),
            )
        })?;

        let payload = GenerateContentRequest::user_prompt(build_prompt(invoice_text));

        debug!(
            model = %self.config.model,
            invoice_chars = invoice_text.chars().count(),
            "Requesting invoice price"
        );
        let start = Instant::now();

        let response = self
            .http
            .post(self.config.endpoint_url())
            .query(&[("key", api_key)])
            .timeout(self.config.timeout())
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            warn!(%status, "Gemini API returned an error status");
            return Err(InvpriceError::Api { status, body });
        }

        let price = parse_price_response(&body)?;

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            found = price != NO_PRICE_FOUND,
            "Gemini answered"
        );

        Ok(price)
    }

    fn classify(&self, err: reqwest::Error) -> InvpriceError {
        if err.is_timeout() {
            InvpriceError::Timeout(self.config.timeout())
        } else {
            // The URL carries the API key
            InvpriceError::Transport(err.without_url())
        }
    }
}
