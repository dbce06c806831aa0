//! Invoice price extraction through the Gemini `generateContent` API.

mod amount;
mod extractor;
mod patterns;
mod prompt;
mod request;
mod response;

pub use amount::ParsedPrice;
pub use extractor::GeminiPriceExtractor;
pub use prompt::build_prompt;
pub use request::{Content, GenerateContentRequest, Part};
pub use response::{extract_price_text, parse_price_response};

/// Returned when the model's answer carries no usable text.
pub const NO_PRICE_FOUND: &str = "No price found";
