//! Bulk category tagging use case
//!
//! The one mutating operation: every item whose tag set intersects the
//! supplied list gets one extra fixed tag. Items already carrying the tag
//! are left alone, so re-running the command is a no-op.

use crate::error::{Result, ZotmetaError};
use crate::infrastructure::Library;
use std::collections::HashSet;

/// One failed item update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFailure {
    pub key: String,
    pub title: String,
    pub message: String,
}

/// Outcome of a bulk tagging pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub scanned: usize,
    pub updated: usize,
    pub already_tagged: usize,
    pub failures: Vec<UpdateFailure>,
}

/// Service applying a category tag to items matching a tag list.
pub struct ApplyCategoryTagsService<L: Library> {
    library: L,
}

impl<L: Library> ApplyCategoryTagsService<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    /// Run the pass. A failed update is recorded and the pass continues;
    /// an authentication failure aborts immediately since every later
    /// update would fail the same way.
    pub fn execute(&self, category_tag: &str, match_tags: &[String]) -> Result<ApplyReport> {
        let match_set: HashSet<&str> = match_tags.iter().map(String::as_str).collect();
        let mut report = ApplyReport::default();

        for item in self.library.items(None) {
            let item = item?;
            report.scanned += 1;

            if !item.tags.iter().any(|t| match_set.contains(t.as_str())) {
                continue;
            }
            if item.has_tag(category_tag) {
                report.already_tagged += 1;
                continue;
            }

            println!("UPDATING {}", item.title);
            match self.library.add_tag(&item, category_tag) {
                Ok(()) => report.updated += 1,
                Err(err @ ZotmetaError::Authentication(_)) => return Err(err),
                Err(err) => report.failures.push(UpdateFailure {
                    key: item.key.clone(),
                    title: item.title.clone(),
                    message: err.to_string(),
                }),
            }
        }

        Ok(report)
    }
}
