//! Field-level format rules used by the validator.

use std::sync::LazyLock;

use regex::Regex;

/// `"lat, lon"` in decimal degrees.
static COORDINATES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d{1,3}(\.\d+)?\s*,\s*-?\d{1,3}(\.\d+)?$").expect("coordinates regex is valid")
});

/// Four-digit year.
static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("year regex is valid"));

/// Phone or fax number: digits with optional separators, a leading `+`, or a
/// parenthesized area code.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9(][0-9 ()\-]{5,19}$").expect("phone regex is valid"));

/// Email address, structural check only.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// PCO accreditation number, `YYYY-RR-NNNN`.
static PCO_ACCREDITATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{4}$").expect("accreditation regex is valid"));

/// Returns true for a well-formed `"lat, lon"` coordinate pair within
/// geographic range.
#[must_use]
pub fn valid_coordinates(value: &str) -> bool {
    if !COORDINATES_REGEX.is_match(value) {
        return false;
    }
    let Some((lat, lon)) = value.split_once(',') else {
        return false;
    };
    let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) else {
        return false;
    };
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Returns true for a four-digit year no later than `current_year`.
#[must_use]
pub fn valid_year(value: &str, current_year: i32) -> bool {
    if !YEAR_REGEX.is_match(value) {
        return false;
    }
    match value.parse::<i32>() {
        Ok(year) => year <= current_year,
        Err(_) => false,
    }
}

/// Returns true for a plausible phone or fax number.
#[must_use]
pub fn valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Returns true for a structurally valid email address.
#[must_use]
pub fn valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Returns true for a well-formed PCO accreditation number.
#[must_use]
pub fn valid_pco_accreditation(value: &str) -> bool {
    PCO_ACCREDITATION_REGEX.is_match(value)
}

/// Returns true when an optional numeric field holds a value inside
/// `min..=max`.
#[must_use]
pub fn in_range(value: Option<u32>, min: u32, max: u32) -> bool {
    value.is_some_and(|v| (min..=max).contains(&v))
}
