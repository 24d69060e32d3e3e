//! Error types for the filter engine.
//!
//! Two disjoint families:
//! - `FilterValidationError`: well-formed input that breaks a naming or
//!   collection rule. Every variant renders a fixed literal message that
//!   callers show to the user verbatim.
//! - `FiltersError::Parse`: the serialized document is not of the expected
//!   shape (not JSON, wrong structure, unknown filter type).
//!
//! Author: AI-Generated
//! Created: 2026-10-17

use thiserror::Error;

pub const MSG_MISSING_NAME: &str = "Missing name for dashboard filter";
pub const MSG_NO_LEADING_TRAILING_SPACES: &str =
    "Filter name must not have leading or trailing whitespace";
pub const MSG_NAME_FORMAT: &str =
    "Filter name is only allowed to contain letters, numbers, spaces, and punctuation marks";
pub const MSG_MAX_LENGTH: &str = "Filter name must not exceed 64 characters";
pub const MSG_NO_DEFAULT_FILTER: &str = "Filters must include one named `Default`";

/// Policy violation raised while building a `Filters` collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterValidationError {
    #[error("{}", MSG_MISSING_NAME)]
    MissingName,

    #[error("{}", MSG_NO_LEADING_TRAILING_SPACES)]
    LeadingOrTrailingSpace,

    #[error("{}", MSG_NAME_FORMAT)]
    InvalidFormat,

    #[error("{}", MSG_MAX_LENGTH)]
    TooLong,

    #[error("Duplicate filter name: {0}")]
    DuplicateName(String),

    #[error("{}", MSG_NO_DEFAULT_FILTER)]
    NoDefaultFilter,
}

/// Any failure from decoding + validating a serialized filters document.
#[derive(Error, Debug)]
pub enum FiltersError {
    #[error("Malformed filters document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] FilterValidationError),
}

impl FiltersError {
    pub fn is_parse(&self) -> bool {
        matches!(self, FiltersError::Parse(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FiltersError::Validation(_))
    }

    /// The validation failure, if this is one.
    pub fn validation(&self) -> Option<&FilterValidationError> {
        match self {
            FiltersError::Validation(e) => Some(e),
            FiltersError::Parse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::validator::{DEFAULT_NAME, MAX_NAME_LENGTH};

    #[test]
    fn test_messages_match_constants() {
        assert_eq!(FilterValidationError::MissingName.to_string(), MSG_MISSING_NAME);
        assert_eq!(
            FilterValidationError::LeadingOrTrailingSpace.to_string(),
            MSG_NO_LEADING_TRAILING_SPACES
        );
        assert_eq!(FilterValidationError::InvalidFormat.to_string(), MSG_NAME_FORMAT);
        assert_eq!(FilterValidationError::TooLong.to_string(), MSG_MAX_LENGTH);
        assert_eq!(FilterValidationError::NoDefaultFilter.to_string(), MSG_NO_DEFAULT_FILTER);
    }

    #[test]
    fn test_messages_name_their_constants() {
        assert!(MSG_MAX_LENGTH.contains(&MAX_NAME_LENGTH.to_string()));
        assert!(MSG_NO_DEFAULT_FILTER.contains(DEFAULT_NAME));
    }

    #[test]
    fn test_duplicate_message_uses_literal_name() {
        let e = FilterValidationError::DuplicateName("one".to_string());
        assert_eq!(e.to_string(), "Duplicate filter name: one");
    }

    #[test]
    fn test_families_are_distinct() {
        let parse: FiltersError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(parse.is_parse());
        assert!(parse.validation().is_none());

        let validation: FiltersError = FilterValidationError::NoDefaultFilter.into();
        assert!(validation.is_validation());
        assert_eq!(validation.to_string(), MSG_NO_DEFAULT_FILTER);
    }
}
