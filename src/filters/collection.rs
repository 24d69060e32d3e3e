//! Filters collection: every view a user has configured
//!
//! `Filters` can only be obtained through a validating constructor, so any
//! value in hand already satisfies:
//! - every view name passes `validate_name`
//! - no two views share a name (see `DuplicateNames` for the comparison)
//! - exactly one view is named `Default`, spelled canonically
//!
//! JSON shape:
//!   {"filters":[{"name":"Default","pipelines":[],"type":"blacklist"}]}
//!
//! Author: AI-Generated
//! Created: 2026-10-17

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use super::dashboard::{wildcard_filter, DashboardFilter, FilterType};
use super::error::{FilterValidationError, FiltersError};
use super::validator::{is_default_name, validate_name, DEFAULT_NAME};
use crate::types::PipelineName;

/// How duplicate view names are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNames {
    /// Only identical spellings clash ("one" vs "one")
    #[default]
    CaseSensitive,
    /// Spellings differing only in case clash too ("one" vs "ONE")
    CaseInsensitive,
}

impl DuplicateNames {
    fn key(&self, name: &str) -> String {
        match self {
            DuplicateNames::CaseSensitive => name.to_string(),
            DuplicateNames::CaseInsensitive => name.to_lowercase(),
        }
    }
}

impl FromStr for DuplicateNames {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "case_sensitive" | "sensitive" => Ok(DuplicateNames::CaseSensitive),
            "case_insensitive" | "insensitive" => Ok(DuplicateNames::CaseInsensitive),
            other => anyhow::bail!(
                "Unknown duplicate-name policy: '{}'. Supported: case_sensitive, case_insensitive",
                other
            ),
        }
    }
}

impl fmt::Display for DuplicateNames {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DuplicateNames::CaseSensitive => write!(f, "case_sensitive"),
            DuplicateNames::CaseInsensitive => write!(f, "case_insensitive"),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire format (input side)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct FiltersDocument {
    filters: Vec<FilterEntry>,
}

#[derive(Debug, Deserialize)]
struct FilterEntry {
    /// Absent or null is reported as a missing name, not a parse error
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    pipelines: Option<Vec<PipelineName>>,
    #[serde(rename = "type")]
    filter_type: FilterType,
}

impl From<FilterEntry> for DashboardFilter {
    fn from(entry: FilterEntry) -> Self {
        DashboardFilter::new(
            entry.filter_type,
            entry.name.unwrap_or_default(),
            entry.pipelines.unwrap_or_default(),
        )
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Validated, immutable set of dashboard views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filters {
    filters: Vec<DashboardFilter>,
    #[serde(skip)]
    default_index: usize,
}

impl Filters {
    /// Validate and build with case-sensitive duplicate detection.
    pub fn new(filters: Vec<DashboardFilter>) -> Result<Self, FilterValidationError> {
        Self::with_policy(filters, DuplicateNames::default())
    }

    /// Validate and build. Per-name checks run over every view first, then
    /// duplicates, then default presence; the first failure is returned.
    pub fn with_policy(
        filters: Vec<DashboardFilter>,
        duplicates: DuplicateNames,
    ) -> Result<Self, FilterValidationError> {
        match Self::validate(filters, duplicates) {
            Ok(validated) => {
                debug!("Filters validated: {} views", validated.filters.len());
                Ok(validated)
            }
            Err(e) => {
                debug!("Filters rejected: {}", e);
                Err(e)
            }
        }
    }

    fn validate(
        filters: Vec<DashboardFilter>,
        duplicates: DuplicateNames,
    ) -> Result<Self, FilterValidationError> {
        for filter in &filters {
            validate_name(Some(filter.name()))?;
        }

        // Canonicalize the default view's spelling before comparing names
        let filters: Vec<DashboardFilter> = filters
            .into_iter()
            .map(|f| {
                if is_default_name(f.name()) && f.name() != DEFAULT_NAME {
                    f.renamed(DEFAULT_NAME)
                } else {
                    f
                }
            })
            .collect();

        let mut seen = HashSet::new();
        for filter in &filters {
            if !seen.insert(duplicates.key(filter.name())) {
                return Err(FilterValidationError::DuplicateName(filter.name().to_string()));
            }
        }

        let default_index = filters
            .iter()
            .position(|f| f.name() == DEFAULT_NAME)
            .ok_or(FilterValidationError::NoDefaultFilter)?;

        Ok(Self {
            filters,
            default_index,
        })
    }

    /// One-view collection; the view must be the default one.
    pub fn single(filter: DashboardFilter) -> Result<Self, FilterValidationError> {
        Self::new(vec![filter])
    }

    /// The wildcard view alone: every pipeline visible.
    pub fn defaults() -> Self {
        Self {
            filters: vec![wildcard_filter()],
            default_index: 0,
        }
    }

    /// Case-insensitive lookup by view name.
    pub fn named(&self, name: &str) -> Option<&DashboardFilter> {
        let wanted = name.to_lowercase();
        self.filters.iter().find(|f| f.name().to_lowercase() == wanted)
    }

    /// The mandatory `Default` view
    pub fn default_filter(&self) -> &DashboardFilter {
        &self.filters[self.default_index]
    }

    pub fn filters(&self) -> &[DashboardFilter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DashboardFilter> {
        self.filters.iter()
    }

    // ------------------------------------------------------------------
    // JSON codec
    // ------------------------------------------------------------------

    /// Decode and validate a serialized document.
    pub fn from_json(json: &str) -> Result<Self, FiltersError> {
        Self::from_json_with_policy(json, DuplicateNames::default())
    }

    pub fn from_json_with_policy(
        json: &str,
        duplicates: DuplicateNames,
    ) -> Result<Self, FiltersError> {
        let doc: FiltersDocument = serde_json::from_str(json)?;
        let candidates = doc.filters.into_iter().map(DashboardFilter::from).collect();
        Ok(Self::with_policy(candidates, duplicates)?)
    }

    /// Compact canonical form: field order name, pipelines, type.
    pub fn to_json(filters: &Filters) -> Result<String, FiltersError> {
        Ok(serde_json::to_string(filters)?)
    }

    pub fn to_json_pretty(filters: &Filters) -> Result<String, FiltersError> {
        Ok(serde_json::to_string_pretty(filters)?)
    }

    // ------------------------------------------------------------------
    // File hand-off
    // ------------------------------------------------------------------

    /// Load from a JSON file, failing on unreadable, malformed, or invalid content.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_policy(path, DuplicateNames::default())
    }

    pub fn load_with_policy<P: AsRef<Path>>(path: P, duplicates: DuplicateNames) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read filters file: {}", path.display()))?;

        let filters = Self::from_json_with_policy(&content, duplicates)
            .with_context(|| format!("Invalid filters file: {}", path.display()))?;

        info!("Filters loaded: {} views from {}", filters.len(), path.display());
        Ok(filters)
    }

    /// Write the canonical (pretty) form.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut json = Self::to_json_pretty(self)?;
        json.push('\n');
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write filters file: {}", path.display()))?;

        debug!("Filters saved: {} views to {}", self.len(), path.display());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Filters {
    type Item = &'a DashboardFilter;
    type IntoIter = std::slice::Iter<'a, DashboardFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
