//! Reading a price answer into an amount and currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::patterns::PRICE_PATTERN;
use super::NO_PRICE_FOUND;

/// Numeric reading of a price answer such as `"$1,234.50"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPrice {
    /// Amount with the separators normalised away.
    pub amount: Decimal,
    /// Currency symbol or ISO code next to the amount, if any.
    pub currency: Option<String>,
}

impl ParsedPrice {
    /// Read the first amount in `text`.
    ///
    /// Returns `None` for the fallback literal and for text without a number.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text == NO_PRICE_FOUND {
            return None;
        }

        PRICE_PATTERN.captures_iter(text).find_map(|caps| {
            let amount = parse_amount(&caps["num"])?;
            let currency = caps
                .name("pre")
                .or_else(|| caps.name("post"))
                .map(|m| normalize_currency(m.as_str()));
            Some(Self { amount, currency })
        })
    }
}

/// Parse an amount written with any common grouping convention
/// (e.g. "1 234,56", "1.234,56", "1,234.56", "1234.56").
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        // Both present: whichever comes last is the decimal separator
        (Some(c), Some(d)) if c > d => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(c), None) => {
            let single = cleaned.matches(',').count() == 1;
            if single && cleaned.len() - c - 1 != 3 {
                cleaned.replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        (None, Some(_)) if cleaned.matches('.').count() > 1 => cleaned.replace('.', ""),
        _ => cleaned,
    };

    Decimal::from_str(&normalized).ok()
}

fn normalize_currency(marker: &str) -> String {
    if marker.to_lowercase() == "zł" {
        "zł".to_string()
    } else {
        marker.to_uppercase()
    }
}
