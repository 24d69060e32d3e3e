//! Filter name validation
//!
//! Pure checks run against every candidate view name. Rules are applied in
//! a fixed order and only the first failure is reported:
//!   1. missing (absent, empty, or whitespace only)
//!   2. leading/trailing whitespace
//!   3. character format (ASCII letters, digits, punctuation, space)
//!   4. maximum length
//!
//! Author: AI-Generated
//! Created: 2026-10-17

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::FilterValidationError;

/// Canonical spelling of the mandatory view
pub const DEFAULT_NAME: &str = "Default";

/// Longest accepted view name, in characters
pub const MAX_NAME_LENGTH: usize = 64;

static NAME_FORMAT: Lazy<Regex> = Lazy::new(|| {
    // POSIX classes in the regex crate are ASCII-only
    Regex::new(r"^[[:alnum:][:punct:] ]+$").expect("static filter name pattern")
});

/// Validate a single view name.
pub fn validate_name(name: Option<&str>) -> Result<(), FilterValidationError> {
    let name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(FilterValidationError::MissingName),
    };

    if name.trim() != name {
        return Err(FilterValidationError::LeadingOrTrailingSpace);
    }

    if !NAME_FORMAT.is_match(name) {
        return Err(FilterValidationError::InvalidFormat);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(FilterValidationError::TooLong);
    }

    Ok(())
}

/// Does this name identify the default view (any casing)?
pub fn is_default_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(DEFAULT_NAME)
}
