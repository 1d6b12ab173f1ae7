//! License Number Rules
//!
//! A driver's license number is exactly 8 characters: 3 uppercase ASCII
//! letters followed by 5 ASCII digits, e.g. `NMK45908`.

use thiserror::Error;

/// Number of characters in a valid license number
pub const LICENSE_NUMBER_LEN: usize = 8;

/// First violated license number rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LicenseNumberError {
    #[error("License number should consist of 8 characters")]
    Length,

    #[error("First 3 characters should be uppercase letters")]
    Prefix,

    #[error("Last 5 characters should be digits")]
    Digits,
}

/// Validate a candidate license number, returning it unchanged when valid.
///
/// Rules are checked in order and the first failure wins, so callers see at
/// most one error. Length is measured in characters, not bytes. The same
/// rule backs both driver creation and the license update form.
///
/// # Errors
///
/// Returns the first violated rule as a [`LicenseNumberError`].
pub fn validate_license_number(value: &str) -> Result<&str, LicenseNumberError> {
    if value.chars().count() != LICENSE_NUMBER_LEN {
        return Err(LicenseNumberError::Length);
    }
    if !value.chars().take(3).all(|c| c.is_ascii_uppercase()) {
        return Err(LicenseNumberError::Prefix);
    }
    if !value.chars().skip(3).all(|c| c.is_ascii_digit()) {
        return Err(LicenseNumberError::Digits);
    }
    Ok(value)
}
