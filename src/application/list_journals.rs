//! Journal frequency table use case

use crate::domain::FilterExpr;
use crate::error::{Result, ZotmetaError};
use crate::infrastructure::Library;
use chrono::NaiveDate;
use std::collections::HashMap;

/// One row of the journal frequency table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalCount {
    pub journal: String,
    pub count: u64,
}

/// Service counting journal-article items per journal name.
pub struct ListJournalsService<L: Library> {
    library: L,
}

impl<L: Library> ListJournalsService<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    /// Count journal articles passing the filter whose publication date
    /// falls in `[start, end]`. Items without a journal name are skipped
    /// silently; unparseable or out-of-range dates are reported to stderr
    /// and skipped. Rows sort descending by count, ties by name.
    pub fn execute(
        &self,
        filter: &FilterExpr,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<JournalCount>> {
        let mut counts: HashMap<String, u64> = HashMap::new();

        for item in self.library.items(Some("journalArticle")) {
            let item = item?;
            if !filter.matches_item(&item.tags) {
                continue;
            }
            let journal = match item.journal.as_deref() {
                Some(j) if !j.is_empty() => j,
                _ => continue,
            };
            let date = match item.pub_date() {
                Some(date) => date,
                None => {
                    eprintln!("Unable to parse date: {}", item.date);
                    continue;
                }
            };
            if date < start || date > end {
                eprintln!("Date out of range: {}", item.date);
                continue;
            }
            *counts.entry(journal.to_string()).or_insert(0) += 1;
        }

        let mut rows: Vec<JournalCount> = counts
            .into_iter()
            .map(|(journal, count)| JournalCount { journal, count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.journal.cmp(&b.journal)));
        Ok(rows)
    }
}

/// Parse a range start: `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`, resolving to
/// the first day of the period.
pub fn parse_start_date(raw: &str) -> Result<NaiveDate> {
    parse_date_bound(raw, false)
}

/// Parse a range end, resolving to the last day of the period so that
/// `--end-date 2021` includes all of 2021.
pub fn parse_end_date(raw: &str) -> Result<NaiveDate> {
    parse_date_bound(raw, true)
}

fn parse_date_bound(raw: &str, end: bool) -> Result<NaiveDate> {
    let raw = raw.trim();
    let invalid = || {
        ZotmetaError::Config(format!(
            "Invalid date: '{}' (expected YYYY, YYYY-MM or YYYY-MM-DD)",
            raw
        ))
    };

    let parts: Vec<&str> = raw.split('-').collect();
    let date = match parts.as_slice() {
        [year] => {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            if end {
                NaiveDate::from_ymd_opt(year, 12, 31)
            } else {
                NaiveDate::from_ymd_opt(year, 1, 1)
            }
        }
        [year, month] => {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            let month: u32 = month.parse().map_err(|_| invalid())?;
            if end {
                last_day_of_month(year, month)
            } else {
                NaiveDate::from_ymd_opt(year, month, 1)
            }
        }
        [year, month, day] => {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            let month: u32 = month.parse().map_err(|_| invalid())?;
            let day: u32 = day.parse().map_err(|_| invalid())?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        _ => None,
    };

    date.ok_or_else(invalid)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
