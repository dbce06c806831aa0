//! Regex patterns for reading price answers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount with an optional currency marker on either side:
    // "$42.00", "1 234,56 zł", "EUR 1.234,56", "12.50"
    pub static ref PRICE_PATTERN: Regex = Regex::new(
        r"(?i)(?P<pre>[$€£]|zł|\b(?:PLN|EUR|USD|GBP|CHF|JPY)\b)?\s*(?P<num>\d(?:[\d.,'\u{00a0}]|\s\d)*)\s*(?P<post>[$€£]|zł|\b(?:PLN|EUR|USD|GBP|CHF|JPY)\b)?"
    ).unwrap();
}
