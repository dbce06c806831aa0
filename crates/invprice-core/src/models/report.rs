//! Output record for a single price lookup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::price::{ParsedPrice, NO_PRICE_FOUND};

/// Result of looking up the price of one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReport {
    /// Where the invoice text came from (file path or `stdin`).
    pub source: String,
    /// Price text as returned by the extractor.
    pub price: String,
    /// False when the extractor answered with the fallback literal.
    pub found: bool,
    /// Numeric amount, when the price text could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Currency marker found next to the amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl PriceReport {
    pub fn new(source: impl Into<String>, price: impl Into<String>) -> Self {
        let price = price.into();
        Self {
            source: source.into(),
            found: price != NO_PRICE_FOUND,
            price,
            amount: None,
            currency: None,
        }
    }

    /// Fill `amount` and `currency` from the price text.
    pub fn with_parsed_amount(mut self) -> Self {
        if let Some(parsed) = ParsedPrice::parse(&self.price) {
            self.amount = Some(parsed.amount);
            self.currency = parsed.currency;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_fallback_is_not_found() {
        let report = PriceReport::new("stdin", NO_PRICE_FOUND).with_parsed_amount();
        assert!(!report.found);
        assert_eq!(report.amount, None);
        assert_eq!(report.currency, None);
    }

    #[test]
    fn test_parsed_amount() {
        let report = PriceReport::new("a.txt", "$1,250.00").with_parsed_amount();
        assert!(report.found);
        assert_eq!(report.amount, Some(Decimal::from_str("1250.00").unwrap()));
        assert_eq!(report.currency.as_deref(), Some("$"));
    }

    #[test]
    fn test_json_omits_missing_amount() {
        let report = PriceReport::new("a.txt", "about forty dollars");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "a.txt",
                "price": "about forty dollars",
                "found": true
            })
        );
    }
}
