//! Error types for the invprice-core library.

use std::time::Duration;

use thiserror::Error;

/// Main error type for the invprice library.
///
/// Every failure of a price lookup surfaces as one of these variants. A
/// response that simply carries no price is not an error.
#[derive(Error, Debug)]
pub enum InvpriceError {
    /// Configuration error (missing API key, unusable client settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// The Gemini API answered with a non-success status.
    #[error("Gemini API error: {status} {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Gemini request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Connection or protocol failure talking to the API.
    #[error("failed to contact Gemini: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to parse Gemini response: {0}")]
    Parse(#[from] serde_json::Error),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InvpriceError {
    /// Whether this error was caused by the request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, InvpriceError::Timeout(_))
    }

    /// Whether this error is a configuration problem rather than a call failure.
    pub fn is_config(&self) -> bool {
        matches!(self, InvpriceError::Config(_))
    }
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the invprice library.
pub type Result<T> = std::result::Result<T, InvpriceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status_and_body() {
        let err = InvpriceError::Api {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "server error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("server error"));
    }

    #[test]
    fn test_classification() {
        assert!(InvpriceError::Timeout(Duration::from_secs(30)).is_timeout());
        assert!(InvpriceError::Config("missing key".into()).is_config());
        assert!(!InvpriceError::Config("missing key".into()).is_timeout());
        assert_eq!(
            InvpriceError::Timeout(Duration::from_secs(30)).to_string(),
            "Gemini request timed out after 30s"
        );
    }
}
