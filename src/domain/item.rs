//! Bibliographic item model
//!
//! The slice of a Zotero item this tool needs, deserialized from the API's
//! `data` envelope, plus fuzzy parsing of Zotero's free-text date field.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;

/// A bibliographic item with its tag set
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    pub key: String,

    #[serde(default)]
    pub version: u64,

    #[serde(rename = "itemType", default)]
    pub item_type: String,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "publicationTitle", default)]
    pub journal: Option<String>,

    #[serde(default)]
    pub date: String,

    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl Item {
    /// True if the item already carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Fuzzy-parsed publication date, if the date field is parseable
    pub fn pub_date(&self) -> Option<NaiveDate> {
        parse_fuzzy_date(&self.date)
    }
}

/// Wire form of a tag entry: `{"tag": "Asia", "type": 1}`
#[derive(Debug, Deserialize)]
struct TagEntry {
    tag: String,
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<TagEntry>::deserialize(deserializer)?;
    Ok(entries.into_iter().map(|e| e.tag).collect())
}

/// Regex for an embedded ISO date: YYYY-MM-DD or YYYY/MM/DD
fn iso_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\d{4})[-/](\d{1,2})[-/](\d{1,2})").unwrap())
}

/// Regex for a bare four-digit year between 1000 and 2999
fn year_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\b([12]\d{3})\b").unwrap())
}

/// Parse a Zotero date string as loosely as is useful.
///
/// Zotero stores dates as free text ("2021-05-01", "May 2021", "c. 2021").
/// An embedded ISO day is used when present, then month-name forms, then a
/// bare year resolving to January 1. Returns `None` for strings with no
/// recognizable date, e.g. "n.d.".
pub fn parse_fuzzy_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(caps) = iso_date_regex().captures(raw) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    for format in ["%B %d, %Y", "%d %B %Y", "%b %d, %Y", "%d %b %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    // Month-year forms parse with a pinned first day
    if let Some((month, year)) = month_year_parts(raw) {
        for format in ["%B %d %Y", "%b %d %Y"] {
            let padded = format!("{} 1 {}", month, year);
            if let Ok(date) = NaiveDate::parse_from_str(&padded, format) {
                return Some(date);
            }
        }
    }

    let caps = year_regex().captures(raw)?;
    let year: i32 = caps[1].parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Split a string that is exactly a month word followed by a four-digit year
fn month_year_parts(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.split_whitespace();
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() || year.len() != 4 || year.parse::<u16>().is_err() {
        return None;
    }
    Some((month, year))
}
