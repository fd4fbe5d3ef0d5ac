//! List tags use case

use crate::domain::FilterExpr;
use crate::error::Result;
use crate::infrastructure::Library;
use std::collections::BTreeSet;

/// Service for listing the library's tags, filtered by an expression.
pub struct ListTagsService<L: Library> {
    library: L,
}

impl<L: Library> ListTagsService<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    /// Fetch the tag universe, keep tags matching the filter, sorted and
    /// deduplicated.
    pub fn execute(&self, filter: &FilterExpr) -> Result<Vec<String>> {
        let tags: BTreeSet<String> = self
            .library
            .tags()?
            .into_iter()
            .filter(|t| filter.matches_tag(t))
            .collect();

        Ok(tags.into_iter().collect())
    }
}
