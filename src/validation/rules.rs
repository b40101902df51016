use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// `(?-u)` keeps `\w` and `\d` ASCII-only.
static UPI_ID: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i-u)^[\w.-]{2,256}@\w{3,}$"));
static CARD_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?-u)^\d{13,19}$"));
static CARD_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[A-Za-z ]{2,}$"));
static EXPIRY: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?-u)^(\d{2})/(\d{2})$"));
static CVV: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?-u)^\d{3,4}$"));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::error!("invalid validation pattern {}: {}", pattern, err);
            None
        }
    }
}

fn matches(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

pub fn is_valid_upi_id(upi_id: &str) -> bool {
    matches(&UPI_ID, upi_id)
}

pub fn check_card_number(raw: &str) -> Result<(), ValidationError> {
    let digits = strip_whitespace(raw);
    if matches(&CARD_NUMBER, &digits) && luhn::valid(&digits) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCardNumber)
    }
}

pub fn check_card_name(raw: &str) -> Result<(), ValidationError> {
    if matches(&CARD_NAME, raw.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCardName)
    }
}

/// `MM/YY`, read as year 2000+YY. A card expiring this month is still valid.
pub fn check_expiry(raw: &str, reference: NaiveDate) -> Result<(), ValidationError> {
    let (month, yy) = EXPIRY
        .as_ref()
        .and_then(|re| re.captures(raw))
        .and_then(|caps| {
            let month = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let yy = caps.get(2)?.as_str().parse::<i32>().ok()?;
            Some((month, yy))
        })
        .ok_or(ValidationError::InvalidExpiryFormat)?;

    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidExpiryMonth);
    }

    let year = 2000 + yy;
    if (year, month) < (reference.year(), reference.month()) {
        return Err(ValidationError::CardExpired);
    }
    Ok(())
}

pub fn check_cvv(raw: &str) -> Result<(), ValidationError> {
    if matches(&CVV, raw) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCvv)
    }
}

pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn upi_id_patterns() {
        assert!(is_valid_upi_id("user@upi"));
        assert!(is_valid_upi_id("9876543210@paytm"));
        assert!(is_valid_upi_id("first.last-01@OKHDFCBANK"));
        assert!(!is_valid_upi_id("ab@x"));
        assert!(!is_valid_upi_id("a@upi"));
        assert!(!is_valid_upi_id("user@up-i"));
        assert!(!is_valid_upi_id("user upi"));
    }

    #[test]
    fn upi_id_rejects_non_ascii_word_chars() {
        assert!(!is_valid_upi_id("ñame@upi"));
    }

    #[test]
    fn upi_id_length_bound() {
        let long = format!("{}@upi", "a".repeat(257));
        assert!(!is_valid_upi_id(&long));
        let max = format!("{}@upi", "a".repeat(256));
        assert!(is_valid_upi_id(&max));
    }

    #[test]
    fn card_number_accepts_grouped_input() {
        assert_eq!(check_card_number("4111 1111 1111 1111"), Ok(()));
    }

    #[test]
    fn card_number_length_bounds() {
        assert_eq!(check_card_number("4111111111111111110"), Ok(()));
        assert_eq!(
            check_card_number("41111111111111111111"),
            Err(ValidationError::InvalidCardNumber)
        );
        assert_eq!(check_card_number(""), Err(ValidationError::InvalidCardNumber));
    }

    #[test]
    fn card_number_luhn_checksum() {
        for number in [
            "4111111111111111",
            "5555555555554444",
            "378282246310005",
            "4222222222222",
        ] {
            assert_eq!(check_card_number(number), Ok(()), "{number}");
        }
        for typo in ["4111111111111112", "5555555555554445", "4222222222223"] {
            assert_eq!(
                check_card_number(typo),
                Err(ValidationError::InvalidCardNumber),
                "{typo}"
            );
        }
    }

    #[test]
    fn card_number_rejects_non_digits() {
        assert_eq!(
            check_card_number("411111111111111a"),
            Err(ValidationError::InvalidCardNumber)
        );
        assert_eq!(
            check_card_number("4111-1111-1111-1111"),
            Err(ValidationError::InvalidCardNumber)
        );
    }

    #[test]
    fn card_name_rules() {
        assert_eq!(check_card_name("  Asha Rao "), Ok(()));
        assert_eq!(check_card_name("A"), Err(ValidationError::InvalidCardName));
        assert_eq!(check_card_name("R2D2"), Err(ValidationError::InvalidCardName));
    }

    #[test]
    fn expiry_in_the_past_fails() {
        assert_eq!(
            check_expiry("01/20", june_2025()),
            Err(ValidationError::CardExpired)
        );
        assert_eq!(
            check_expiry("05/25", june_2025()),
            Err(ValidationError::CardExpired)
        );
    }

    #[test]
    fn expiry_current_or_future_passes() {
        assert_eq!(check_expiry("06/25", june_2025()), Ok(()));
        assert_eq!(check_expiry("12/99", june_2025()), Ok(()));
    }

    #[test]
    fn expiry_format_and_month() {
        assert_eq!(
            check_expiry("1/25", june_2025()),
            Err(ValidationError::InvalidExpiryFormat)
        );
        assert_eq!(
            check_expiry("12-25", june_2025()),
            Err(ValidationError::InvalidExpiryFormat)
        );
        assert_eq!(
            check_expiry("13/25", june_2025()),
            Err(ValidationError::InvalidExpiryMonth)
        );
        assert_eq!(
            check_expiry("00/30", june_2025()),
            Err(ValidationError::InvalidExpiryMonth)
        );
    }

    #[test]
    fn cvv_rules() {
        assert_eq!(check_cvv("123"), Ok(()));
        assert_eq!(check_cvv("1234"), Ok(()));
        assert_eq!(check_cvv("12"), Err(ValidationError::InvalidCvv));
        assert_eq!(check_cvv("12a"), Err(ValidationError::InvalidCvv));
    }
}
