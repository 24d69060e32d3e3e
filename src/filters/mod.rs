//! Dashboard filtering system
//!
//! Named whitelist/blacklist views over the pipeline list, validated as a
//! whole collection and exchanged as JSON.
//!
//! Author: AI-Generated
//! Created: 2026-10-17

pub mod collection;
pub mod dashboard;
pub mod error;
pub mod validator;

pub use collection::{DuplicateNames, Filters};
pub use dashboard::{wildcard_filter, DashboardFilter, FilterType};
pub use error::{
    FilterValidationError, FiltersError, MSG_MAX_LENGTH, MSG_MISSING_NAME, MSG_NAME_FORMAT,
    MSG_NO_DEFAULT_FILTER, MSG_NO_LEADING_TRAILING_SPACES,
};
pub use validator::{is_default_name, validate_name, DEFAULT_NAME, MAX_NAME_LENGTH};
