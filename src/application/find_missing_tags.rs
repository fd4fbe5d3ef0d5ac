//! Missing-tag comparison use case

use crate::domain::FilterExpr;
use crate::error::Result;
use crate::infrastructure::Library;
use std::collections::{BTreeSet, HashSet};

/// The two set differences between a local tag list and the remote universe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTagsReport {
    /// Remote tags absent from the local list (remote minus local)
    pub missing_local: Vec<String>,
    /// Local tags absent from the remote library (local minus remote)
    pub missing_remote: Vec<String>,
}

/// Service comparing a supplied tag list against the (filtered) remote
/// tag universe.
pub struct FindMissingTagsService<L: Library> {
    library: L,
}

impl<L: Library> FindMissingTagsService<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    pub fn execute(&self, local: &[String], filter: &FilterExpr) -> Result<MissingTagsReport> {
        let remote: Vec<String> = self
            .library
            .tags()?
            .into_iter()
            .filter(|t| filter.matches_tag(t))
            .collect();

        let local_set: HashSet<&str> = local.iter().map(String::as_str).collect();
        let remote_set: HashSet<&str> = remote.iter().map(String::as_str).collect();

        let missing_local: BTreeSet<String> = remote
            .iter()
            .filter(|t| !local_set.contains(t.as_str()))
            .cloned()
            .collect();
        let missing_remote: BTreeSet<String> = local
            .iter()
            .filter(|t| !remote_set.contains(t.as_str()))
            .cloned()
            .collect();

        Ok(MissingTagsReport {
            missing_local: missing_local.into_iter().collect(),
            missing_remote: missing_remote.into_iter().collect(),
        })
    }
}
