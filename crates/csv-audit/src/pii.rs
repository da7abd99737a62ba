//! PII detection and masking over the sampled rows.
//!
//! The scan is regex-based: email addresses, US social security numbers,
//! and 13 to 19 digit card candidates validated with the Luhn checksum.
//! Hits are deduplicated preserving first occurrence so output stays stable
//! across runs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::types::PiiScan;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b").expect("valid email pattern")
});

static SSN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("valid ssn pattern"));

static CC_CANDIDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:\d[ -]*?){13,19}\b").expect("valid card pattern"));

/// Luhn checksum over a bare digit string.
pub fn luhn_check(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut should_double = false;

    for ch in digits.chars().rev() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        let mut addend = digit;
        if should_double {
            addend *= 2;
            if addend > 9 {
                addend -= 9;
            }
        }
        sum += addend;
        should_double = !should_double;
    }

    sum % 10 == 0
}

/// Scan `text` for PII, returning deduplicated hits per category.
pub fn scan_pii(text: &str) -> PiiScan {
    let emails = unique(EMAIL_RE.find_iter(text).map(|m| m.as_str().to_string()));
    let ssns = unique(SSN_RE.find_iter(text).map(|m| m.as_str().to_string()));

    let candidates = CC_CANDIDATE_RE.find_iter(text).filter_map(|m| {
        let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
        if (13..=19).contains(&digits.len()) && luhn_check(&digits) {
            Some(digits)
        } else {
            None
        }
    });
    let credit_cards = unique(candidates);

    PiiScan {
        emails,
        ssns,
        credit_cards,
    }
}

fn unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// `j***@example.com` style masking; the domain stays readable.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => {
            let first = user.chars().next().unwrap_or('*');
            format!("{first}***@{domain}")
        }
        _ => "***@***".to_string(),
    }
}

/// `***-**-1234` style masking.
pub fn mask_ssn(ssn: &str) -> String {
    let last4: String = ssn.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("***-**-{last4}")
}

/// `**** **** **** 1234` style masking over bare digits.
pub fn mask_card(digits: &str) -> String {
    let last4: String = digits.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("**** **** **** {last4}")
}

/// Up to three masked examples per category, emails first.
pub fn masked_examples(scan: &PiiScan) -> Vec<String> {
    let mut examples = Vec::new();
    examples.extend(scan.emails.iter().take(3).map(|e| mask_email(e)));
    examples.extend(scan.ssns.iter().take(3).map(|s| mask_ssn(s)));
    examples.extend(scan.credit_cards.iter().take(3).map(|c| mask_card(c)));
    examples
}

/// Replace every scanned hit inside `text` with its masked form.
///
/// Card candidates are re-matched so separator variants (`1234 5678 ...`)
/// mask as one unit, but only candidates whose digits were validated by the
/// scan are touched.
pub fn mask_text(text: &str, scan: &PiiScan) -> String {
    let mut masked = text.to_string();

    for email in &scan.emails {
        masked = masked.replace(email.as_str(), &mask_email(email));
    }
    for ssn in &scan.ssns {
        masked = masked.replace(ssn.as_str(), &mask_ssn(ssn));
    }

    CC_CANDIDATE_RE
        .replace_all(&masked, |caps: &regex::Captures<'_>| {
            let raw = &caps[0];
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            if scan.credit_cards.contains(&digits) {
                mask_card(&digits)
            } else {
                raw.to_string()
            }
        })
        .into_owned()
}

/// Mask every string cell of the sampled rows in place.
pub fn mask_rows(rows: &mut [Map<String, Value>], scan: &PiiScan) {
    for row in rows {
        for value in row.values_mut() {
            if let Value::String(text) = value {
                *value = Value::String(mask_text(text, scan));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_luhn_check() {
        assert!(luhn_check("4539578763621486"));
        assert!(!luhn_check("4539578763621487"));
        assert!(luhn_check("4111111111111111"));
        assert!(!luhn_check("41111x1111111111"));
    }

    #[test]
    fn test_scan_finds_emails_and_ssns() {
        let scan = scan_pii("contact jane.doe@example.com or 123-45-6789 today");

        assert_eq!(scan.emails, vec!["jane.doe@example.com"]);
        assert_eq!(scan.ssns, vec!["123-45-6789"]);
        assert!(scan.credit_cards.is_empty());
    }

    #[test]
    fn test_scan_validates_cards_with_luhn() {
        let scan = scan_pii("pay 4539 5787 6362 1486 not 4539 5787 6362 1487");
        assert_eq!(scan.credit_cards, vec!["4539578763621486"]);
    }

    #[test]
    fn test_scan_deduplicates_preserving_order() {
        let scan = scan_pii("b@x.co a@x.co b@x.co");
        assert_eq!(scan.emails, vec!["b@x.co", "a@x.co"]);
    }

    #[test]
    fn test_masking_formats() {
        assert_eq!(mask_email("jane@example.com"), "j***@example.com");
        assert_eq!(mask_email("not-an-email"), "***@***");
        assert_eq!(mask_ssn("123-45-6789"), "***-**-6789");
        assert_eq!(mask_card("4539578763621486"), "**** **** **** 1486");
    }

    #[test]
    fn test_mask_text_touches_only_validated_hits() {
        let text = "jane@example.com, 123-45-6789, 4539578763621486, 1234567890123";
        let scan = scan_pii(text);
        let masked = mask_text(text, &scan);

        assert!(masked.contains("j***@example.com"));
        assert!(masked.contains("***-**-6789"));
        assert!(masked.contains("**** **** **** 1486"));
        // Luhn-invalid candidate is left alone.
        assert!(masked.contains("1234567890123"));
    }

    #[test]
    fn test_mask_rows_masks_string_cells() {
        let mut rows = vec![Map::from_iter([
            (
                "email".to_string(),
                Value::String("jane@example.com".to_string()),
            ),
            ("age".to_string(), Value::Null),
        ])];
        let scan = scan_pii("jane@example.com");

        mask_rows(&mut rows, &scan);

        assert_eq!(
            rows[0]["email"],
            Value::String("j***@example.com".to_string())
        );
        assert_eq!(rows[0]["age"], Value::Null);
    }
}
