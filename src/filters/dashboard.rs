//! Dashboard views: whitelist and blacklist filters
//!
//! A view is a name plus a list of pipeline names. The variant tag decides
//! what the list means:
//! - whitelist: only listed pipelines are shown
//! - blacklist: everything except listed pipelines is shown
//!
//! An empty blacklist named `Default` is the wildcard view.
//!
//! Author: AI-Generated
//! Created: 2026-10-17

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::validator::DEFAULT_NAME;
use crate::types::PipelineName;

/// Variant tag, serialized as `"whitelist"` / `"blacklist"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Whitelist,
    Blacklist,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FilterType::Whitelist => write!(f, "whitelist"),
            FilterType::Blacklist => write!(f, "blacklist"),
        }
    }
}

/// A single named view over the pipeline list.
///
/// Field order here is the serialized field order.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardFilter {
    name: String,
    pipelines: Vec<PipelineName>,
    #[serde(rename = "type")]
    filter_type: FilterType,
}

impl DashboardFilter {
    pub fn new(
        filter_type: FilterType,
        name: impl Into<String>,
        pipelines: Vec<PipelineName>,
    ) -> Self {
        Self {
            name: name.into(),
            pipelines,
            filter_type,
        }
    }

    pub fn whitelist(name: impl Into<String>, pipelines: Vec<PipelineName>) -> Self {
        Self::new(FilterType::Whitelist, name, pipelines)
    }

    pub fn blacklist(name: impl Into<String>, pipelines: Vec<PipelineName>) -> Self {
        Self::new(FilterType::Blacklist, name, pipelines)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pipelines in insertion order
    pub fn pipelines(&self) -> &[PipelineName] {
        &self.pipelines
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    /// Copy of this view under another name (used to canonicalize `Default`).
    pub(crate) fn renamed(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    fn contains(&self, pipeline: &str) -> bool {
        self.pipelines.iter().any(|p| p.matches(pipeline))
    }

    /// Is this pipeline visible under this view? Case-insensitive.
    pub fn is_pipeline_included(&self, pipeline: &str) -> bool {
        match self.filter_type {
            FilterType::Whitelist => self.contains(pipeline),
            FilterType::Blacklist => !self.contains(pipeline),
        }
    }

    /// Keep only the pipelines this view shows, preserving input order.
    pub fn visible<'a, I>(&self, pipelines: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        pipelines
            .into_iter()
            .filter(|p| self.is_pipeline_included(p))
            .collect()
    }

    fn pipeline_set(&self) -> HashSet<&PipelineName> {
        self.pipelines.iter().collect()
    }
}

impl PartialEq for DashboardFilter {
    fn eq(&self, other: &Self) -> bool {
        self.filter_type == other.filter_type
            && self.name == other.name
            && self.pipeline_set() == other.pipeline_set()
    }
}

impl Eq for DashboardFilter {}

/// Blacklist named `Default` with nothing excluded: shows every pipeline.
pub fn wildcard_filter() -> DashboardFilter {
    DashboardFilter::blacklist(DEFAULT_NAME, Vec::new())
}
