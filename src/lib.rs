//! Dashboard Filters Library
//!
//! Pipeline-visibility views for a continuous-delivery dashboard.
//! Each user owns a `Filters` collection of named whitelist/blacklist views,
//! one of which is always `Default`.
//!
//! Author: AI-Generated
//! Created: 2026-10-17

pub mod config;
pub mod filters;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, EngineConfig};
pub use filters::{
    DashboardFilter, DuplicateNames, FilterType, FilterValidationError, Filters, FiltersError,
    DEFAULT_NAME,
};
pub use types::PipelineName;
