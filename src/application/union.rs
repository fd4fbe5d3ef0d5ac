//! Tag union (co-occurrence) report use case

use crate::domain::{count_union, CooccurrenceMatrix, FilterExpr};
use crate::error::Result;
use crate::infrastructure::Library;

/// Service computing the co-occurrence matrix for two tag axes.
pub struct UnionService<L: Library> {
    library: L,
}

impl<L: Library> UnionService<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    /// Stream all items once and count (row, column) co-occurrences,
    /// restricted to items passing the base filter.
    pub fn execute(
        &self,
        cols: &[String],
        rows: &[String],
        base: &FilterExpr,
    ) -> Result<CooccurrenceMatrix> {
        let tag_sets = self.library.items(None).map(|item| item.map(|i| i.tags));
        count_union(cols, rows, base, tag_sets)
    }
}
