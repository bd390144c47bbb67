//! Checkout validation
//!
//! Each field has an independent format or range rule; submission fails on
//! the first rule that does not hold, surfacing exactly one human-readable
//! reason. Card expiry uses a split month/year pair checked against an
//! explicit "today", so the rules stay deterministic under test.

use jiff::civil::Date;
use thiserror::Error;

use crate::checkout::form::CheckoutForm;

/// Number of years from the current one for which an expiry year is
/// accepted.
pub const EXPIRY_YEAR_WINDOW: i16 = 10;

/// A checkout form field that failed its rule.
///
/// The display message is the single reason surfaced to the buyer; it is
/// user-correctable and never logged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The given name is empty or holds more than letters and spaces.
    #[error("enter a name using letters and spaces only")]
    InvalidName,

    /// The surname is empty or holds more than letters and spaces.
    #[error("enter a surname using letters and spaces only")]
    InvalidSurname,

    /// The email does not have a `local@domain.tld` shape.
    #[error("enter a valid email address")]
    InvalidEmail,

    /// The shipping street is empty.
    #[error("enter a shipping street")]
    MissingStreet,

    /// The shipping city is empty.
    #[error("enter a shipping city")]
    MissingCity,

    /// The postal code is not exactly five digits.
    #[error("the postal code must have exactly 5 digits")]
    InvalidPostalCode,

    /// The card number is not exactly sixteen digits once spaces are
    /// stripped.
    #[error("the card number must have 16 digits")]
    InvalidCardNumber,

    /// The expiry month is not an integer between 1 and 12.
    #[error("the expiry month must be between 1 and 12")]
    InvalidExpiryMonth,

    /// The expiry year is outside the accepted window.
    #[error("the expiry year must be within the next {EXPIRY_YEAR_WINDOW} years")]
    InvalidExpiryYear,

    /// The expiry month and year combination is already in the past.
    #[error("the card has already expired")]
    CardExpired,

    /// The card verification value is not three or four digits.
    #[error("the security code must have 3 or 4 digits")]
    InvalidCvv,
}

/// Checks every field rule in a fixed order and returns the first failure.
///
/// `today` anchors the expiry rules; production callers pass the current
/// date.
///
/// # Errors
///
/// Returns the first [`ValidationError`] whose rule does not hold.
pub fn validate(form: &CheckoutForm, today: Date) -> Result<(), ValidationError> {
    if !is_letters_and_spaces(form.name()) {
        return Err(ValidationError::InvalidName);
    }

    if !is_letters_and_spaces(form.surname()) {
        return Err(ValidationError::InvalidSurname);
    }

    if !is_email_shaped(form.email().trim()) {
        return Err(ValidationError::InvalidEmail);
    }

    if form.street().trim().is_empty() {
        return Err(ValidationError::MissingStreet);
    }

    if form.city().trim().is_empty() {
        return Err(ValidationError::MissingCity);
    }

    if !is_exact_digits(form.postal_code(), 5) {
        return Err(ValidationError::InvalidPostalCode);
    }

    let card_digits: String = form
        .card_number()
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    if !is_exact_digits(&card_digits, 16) {
        return Err(ValidationError::InvalidCardNumber);
    }

    let month: i8 = form
        .expiry_month()
        .parse()
        .map_err(|_| ValidationError::InvalidExpiryMonth)?;

    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidExpiryMonth);
    }

    let year: i16 = form
        .expiry_year()
        .parse()
        .map_err(|_| ValidationError::InvalidExpiryYear)?;

    if !(today.year()..=today.year() + EXPIRY_YEAR_WINDOW).contains(&year) {
        return Err(ValidationError::InvalidExpiryYear);
    }

    if year == today.year() && month < today.month() {
        return Err(ValidationError::CardExpired);
    }

    let cvv_len = form.cvv().len();

    if !(3..=4).contains(&cvv_len) || !form.cvv().chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidCvv);
    }

    Ok(())
}

/// Non-empty and nothing but letters (accents included) and spaces.
fn is_letters_and_spaces(value: &str) -> bool {
    !value.trim().is_empty() && value.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// Exactly `len` ASCII digits.
fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

/// A general `local@domain.tld` shape: one `@`, a non-empty local part, a
/// dot inside the domain and no whitespace anywhere.
fn is_email_shaped(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}
