//! Pairwise tag co-occurrence counting
//!
//! Counts, for every (row tag, column tag) pair, how many library items carry
//! both tags, subject to a base filter. Items are consumed once from a lazy
//! stream; axis membership is resolved through prebuilt lookup maps so the
//! pass stays linear in the number of items.

use crate::domain::filter::FilterExpr;
use crate::error::Result;
use std::collections::HashMap;

/// Dense (rows x cols) table of co-occurrence counts.
///
/// Both axes keep the caller's order verbatim, duplicates included; a
/// duplicated axis entry produces a duplicated row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooccurrenceMatrix {
    cols: Vec<String>,
    rows: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl CooccurrenceMatrix {
    fn zeroed(cols: Vec<String>, rows: Vec<String>) -> Self {
        let counts = vec![vec![0; cols.len()]; rows.len()];
        CooccurrenceMatrix { cols, rows, counts }
    }

    /// Column-axis labels, in input order
    pub fn cols(&self) -> &[String] {
        &self.cols
    }

    /// Row-axis labels, in input order
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Count at (row index, column index)
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.counts[row][col]
    }

    /// One row of counts, ordered by the column axis
    pub fn row(&self, row: usize) -> &[u64] {
        &self.counts[row]
    }
}

/// Map each axis label to the indices where it appears.
///
/// Duplicate labels keep every position, so a duplicated axis entry is
/// incremented at each of its positions.
fn axis_index(axis: &[String]) -> HashMap<&str, Vec<usize>> {
    let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, label) in axis.iter().enumerate() {
        index.entry(label.as_str()).or_default().push(i);
    }
    index
}

/// Count co-occurrences over a single pass of the item stream.
///
/// `items` yields each item's tag set; a transport failure mid-stream aborts
/// the count. Items failing `base` are skipped. Axis matching is by exact
/// tag label (the axes are literal labels, not filter prefixes); an item
/// matching several row tags and several column tags increments every
/// matching cell.
pub fn count_union<I>(
    cols: &[String],
    rows: &[String],
    base: &FilterExpr,
    items: I,
) -> Result<CooccurrenceMatrix>
where
    I: IntoIterator<Item = Result<Vec<String>>>,
{
    let mut matrix = CooccurrenceMatrix::zeroed(cols.to_vec(), rows.to_vec());
    let col_index = axis_index(cols);
    let row_index = axis_index(rows);

    for tags in items {
        let tags = tags?;
        if !base.matches_item(&tags) {
            continue;
        }

        let mut row_hits: Vec<usize> = Vec::new();
        let mut col_hits: Vec<usize> = Vec::new();
        for tag in &tags {
            if let Some(positions) = row_index.get(tag.as_str()) {
                row_hits.extend(positions);
            }
            if let Some(positions) = col_index.get(tag.as_str()) {
                col_hits.extend(positions);
            }
        }

        for &r in &row_hits {
            for &c in &col_hits {
                matrix.counts[r][c] += 1;
            }
        }
    }

    Ok(matrix)
}
