//! Field-level well-formedness checks for transaction exports.
//!
//! Every validator is a pure predicate: malformed input is a failed check,
//! never a panic or an error. The expiry check takes the reference date as an
//! argument so results are reproducible in tests.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const VALID_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];
pub const VALID_STATUSES: [&str; 3] = ["Pending", "Completed", "Failed"];
pub const VALID_TRANSACTION_TYPES: [&str; 2] = ["Debit", "Credit"];

/// Card numbers must strip to this many digits before the Luhn check.
/// Without the bound an empty digit string sums to 0 and passes.
pub const CARD_DIGITS_MIN: usize = 12;
pub const CARD_DIGITS_MAX: usize = 19;

static ACCOUNT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}\d{2}[A-Z0-9]{1,30}$").expect("valid regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

static CUSTOMER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid regex"));

/// IBAN-like: two uppercase letters, two digits, 1-30 alphanumerics.
pub fn is_valid_account_number(account_number: &str) -> bool {
    ACCOUNT_NUMBER_RE.is_match(account_number)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts 10-15 digit phone numbers. A suffix starting at the first `x`
/// (extension marker) is dropped first, then every non-digit character, so
/// `+1 (555) 010-9999 x42` and `5550109999` both pass.
pub fn is_valid_phone(phone: &str) -> bool {
    let without_extension = phone.split('x').next().unwrap_or("");
    let digit_count = without_extension
        .chars()
        .filter(|c| c.is_ascii_digit())
        .count();
    (10..=15).contains(&digit_count)
}

/// Parses "MM/YY" and accepts only expiries strictly after `today`. The
/// expiry is taken as the first day of its month, so a card expiring in the
/// current month is already rejected.
pub fn is_valid_expiry(expiry: &str, today: NaiveDate) -> bool {
    match parse_expiry(expiry) {
        Some(expiry_date) => expiry_date > today,
        None => false,
    }
}

/// Two-digit years pivot the way strptime's `%y` does: 00-68 map to the
/// 2000s, 69-99 to the 1900s.
fn parse_expiry(expiry: &str) -> Option<NaiveDate> {
    let (month_str, year_str) = expiry.split_once('/')?;
    if !is_short_numeric(month_str) || !is_short_numeric(year_str) {
        return None;
    }
    let month: u32 = month_str.parse().ok()?;
    let year_2digit: i32 = year_str.parse().ok()?;
    let year = if year_2digit <= 68 {
        2000 + year_2digit
    } else {
        1900 + year_2digit
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn is_short_numeric(s: &str) -> bool {
    (1..=2).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_currency(currency: &str) -> bool {
    VALID_CURRENCIES.contains(&currency)
}

pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

/// Exact match against `YYYY-MM-DDTHH:MM:SSZ`. Fractional seconds, offsets,
/// a missing `Z`, or a space separator all fail.
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%SZ").is_ok()
}

pub fn is_valid_transaction_type(transaction_type: &str) -> bool {
    VALID_TRANSACTION_TYPES.contains(&transaction_type)
}

pub fn is_valid_customer_name(name: &str) -> bool {
    CUSTOMER_NAME_RE.is_match(name)
}

/// Luhn checksum over the digits of `card_number`, non-digits stripped.
/// Requires 12-19 digits; the checksum alone would accept an empty string.
pub fn is_valid_card_number(card_number: &str) -> bool {
    let digits: Vec<u32> = card_number
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if !(CARD_DIGITS_MIN..=CARD_DIGITS_MAX).contains(&digits.len()) {
        return false;
    }

    let checksum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                d
            } else {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            }
        })
        .sum();

    checksum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_account_number_format() {
        assert!(is_valid_account_number("GB29NWBK60161331926819"));
        assert!(is_valid_account_number("DE44X"));
        assert!(!is_valid_account_number("gb29NWBK60161331926819"));
        assert!(!is_valid_account_number("G129NWBK"));
        assert!(!is_valid_account_number("GB2"));
        assert!(!is_valid_account_number(""));
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("jane.doe+tag@example.co.uk"));
        assert!(is_valid_email("a_b%c@mail-server.org"));
        assert!(!is_valid_email("jane.doe@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane at example.com"));
    }

    #[test]
    fn test_phone_accepts_10_to_15_digits() {
        assert!(is_valid_phone("5550109999"));
        assert!(is_valid_phone("+1 (555) 010-9999"));
        assert!(is_valid_phone("555555555555555"));
        assert!(is_valid_phone("5550109999x123"));
        assert!(!is_valid_phone("555010999"));
        assert!(!is_valid_phone("5555555555555555"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_phone_extension_stripped_before_count() {
        // digits in the extension must not count toward the 10-digit minimum
        assert!(!is_valid_phone("555010x9999999"));
        assert!(is_valid_phone("5550109999x99999999999"));
    }

    #[test]
    fn test_expiry_past_rejected_future_accepted() {
        let today = date(2023, 6, 15);
        assert!(is_valid_expiry("12/25", today));
        assert!(is_valid_expiry("07/23", today));
        assert!(!is_valid_expiry("06/23", today)); // current month counts as expired
        assert!(!is_valid_expiry("05/23", today));
        assert!(!is_valid_expiry("12/99", today)); // %y pivot: 99 -> 1999
    }

    #[test]
    fn test_expiry_parse_failures() {
        let today = date(2023, 6, 15);
        assert!(!is_valid_expiry("13/25", today));
        assert!(!is_valid_expiry("00/25", today));
        assert!(!is_valid_expiry("122/5", today));
        assert!(!is_valid_expiry("12-25", today));
        assert!(!is_valid_expiry("12/2025", today));
        assert!(!is_valid_expiry("", today));
    }

    #[test]
    fn test_timestamp_exact_pattern() {
        assert!(is_valid_timestamp("2023-06-01T12:00:00Z"));
        assert!(!is_valid_timestamp("2023-06-01T12:00:00"));
        assert!(!is_valid_timestamp("2023-06-01 12:00:00Z"));
        assert!(!is_valid_timestamp("2023-06-01T12:00:00.123Z"));
        assert!(!is_valid_timestamp("2023-06-01T12:00:00+00:00"));
    }

    #[test]
    fn test_membership_sets() {
        assert!(is_valid_currency("USD"));
        assert!(!is_valid_currency("JPY"));
        assert!(is_valid_status("Completed"));
        assert!(!is_valid_status("completed"));
        assert!(is_valid_transaction_type("Debit"));
        assert!(!is_valid_transaction_type("Transfer"));
    }

    #[test]
    fn test_customer_name_letters_and_whitespace_only() {
        assert!(is_valid_customer_name("Jane Doe"));
        assert!(!is_valid_customer_name("Jane Doe 2"));
        assert!(!is_valid_customer_name("O'Brien"));
        assert!(!is_valid_customer_name(""));
    }

    #[test]
    fn test_luhn_canonical_numbers() {
        assert!(is_valid_card_number("4111111111111111"));
        assert!(is_valid_card_number("5555555555554444"));
        assert!(is_valid_card_number("5555 5555 5555 4444"));
        assert!(is_valid_card_number("4111-1111-1111-1111"));
    }

    #[test]
    fn test_luhn_rejects_single_digit_change() {
        assert!(!is_valid_card_number("4111111111111112"));
        assert!(!is_valid_card_number("5555555555544444"));
        assert!(!is_valid_card_number("5555555555554443"));
    }

    #[test]
    fn test_luhn_requires_12_to_19_digits() {
        // without the length bound these would all pass with checksum 0
        assert!(!is_valid_card_number(""));
        assert!(!is_valid_card_number("garbage"));
        assert!(!is_valid_card_number("0"));
        assert!(!is_valid_card_number("00000000000000000000"));
    }
}
