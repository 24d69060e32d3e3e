//! Core value types shared by the filter engine
//!
//! Pipeline names are opaque, case-insensitive identifiers. The caller's
//! spelling is kept for display and serialization; comparisons go through
//! a lowercase key derived on demand.
//!
//! Author: AI-Generated
//! Created: 2026-10-17

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Case-insensitive pipeline identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineName(String);

impl PipelineName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build a list of pipeline names from string slices.
    pub fn list(names: &[&str]) -> Vec<PipelineName> {
        names.iter().map(|n| PipelineName::new(*n)).collect()
    }

    /// Name as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparison key (lowercase)
    fn key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive match against a raw string.
    pub fn matches(&self, other: &str) -> bool {
        self.key() == other.to_lowercase()
    }
}

impl PartialEq for PipelineName {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for PipelineName {}

impl Hash for PipelineName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for PipelineName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PipelineName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for PipelineName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PipelineName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PipelineName {
    fn from(s: String) -> Self {
        Self(s)
    }
}
