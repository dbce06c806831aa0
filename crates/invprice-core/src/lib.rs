//! Core library for invoice price extraction.
//!
//! This crate provides:
//! - A Gemini `generateContent` client that asks for an invoice's total price
//! - Invoice text loading from plain-text files and PDFs
//! - Best-effort reading of the returned price into an amount and currency
//! - Configuration shared by the CLI

pub mod error;
pub mod models;
pub mod pdf;
pub mod price;
pub mod invoice;

pub use error::{InvpriceError, PdfError, Result};
pub use models::config::{GeminiConfig, InputConfig, InvpriceConfig};
pub use models::report::PriceReport;
pub use pdf::{PdfExtractor, PdfProcessor};
pub use price::{GeminiPriceExtractor, ParsedPrice, NO_PRICE_FOUND};
pub use invoice::{InvoiceDocument, SourceKind};
