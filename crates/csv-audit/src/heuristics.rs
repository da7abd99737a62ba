//! Formatting heuristics over the sample text.
//!
//! These are coarse signals, not parsers: the goal is to flag samples that
//! mix month-first and day-first dates or more than one currency marker,
//! both of which tend to surface as silent corruption after ingestion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::StructureSignals;

static MONTH_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:0?[1-9]|1[0-2])[/.-](?:0?[1-9]|[12]\d|3[01])[/.-](?:19|20)\d{2}\b")
        .expect("valid month-first pattern")
});

static DAY_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:0?[1-9]|[12]\d|3[01])[/.-](?:0?[1-9]|1[0-2])[/.-](?:19|20)\d{2}\b")
        .expect("valid day-first pattern")
});

static CURRENCY_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:USD|EUR|GBP|JPY|CAD|AUD)\b").expect("valid code pattern"));

const CURRENCY_SYMBOLS: [&str; 4] = ["$", "€", "£", "¥"];

/// Extract formatting signals from `text`.
///
/// `mixed_date_formats` fires only when a date is unambiguously day-first
/// (day above 12) while another date parses as month-first; symbols and ISO
/// codes are collected in a fixed probe order so output stays deterministic.
pub fn analyze_text_structure(text: &str) -> StructureSignals {
    let has_month_first = MONTH_FIRST_RE.is_match(text);
    let has_day_first = DAY_FIRST_RE
        .find_iter(text)
        .any(|m| !MONTH_FIRST_RE.is_match(m.as_str()));

    let mut currency_symbols = Vec::new();
    for symbol in CURRENCY_SYMBOLS {
        if text.contains(symbol) {
            currency_symbols.push(symbol.to_string());
        }
    }
    for m in CURRENCY_CODE_RE.find_iter(text) {
        let code = m.as_str().to_string();
        if !currency_symbols.contains(&code) {
            currency_symbols.push(code);
        }
    }

    StructureSignals {
        mixed_date_formats: has_month_first && has_day_first,
        currency_symbols,
    }
}
