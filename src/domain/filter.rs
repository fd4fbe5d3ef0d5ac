//! Tag filter expression parsing and evaluation
//!
//! A filter expression is built from the repeatable `--tag-filter` option.
//! Each raw string becomes one token: an optional leading `-` excludes, and
//! `||` separates alternative prefixes inside the token. Tokens are ANDed;
//! alternatives inside a token are ORed. Matching is by string prefix, so a
//! hierarchical vocabulary (`theme_culture`, `theme_history`) can be filtered
//! on its shared root.
//!
//! # Examples
//!
//! ```
//! use zotmeta::domain::FilterExpr;
//!
//! let expr = FilterExpr::parse(&["theme_".to_string(), "-draft".to_string()]).unwrap();
//! assert!(expr.matches_tag("theme_culture"));
//! assert!(!expr.matches_tag("draft_2021"));
//! ```

use crate::error::{Result, ZotmetaError};

/// Include or exclude polarity of one filter token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Include,
    Exclude,
}

/// One parsed `--tag-filter` value: a polarity applied to a group of
/// alternative prefixes. The group is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToken {
    pub polarity: Polarity,
    pub prefixes: Vec<String>,
}

impl FilterToken {
    /// True if any prefix in the group is a prefix of `tag`
    fn hits_tag(&self, tag: &str) -> bool {
        self.prefixes.iter().any(|p| tag.starts_with(p.as_str()))
    }

    /// True if any tag in `tags` starts with any prefix in the group
    fn hits_any(&self, tags: &[String]) -> bool {
        tags.iter().any(|t| self.hits_tag(t))
    }
}

/// An ordered conjunction of filter tokens. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpr {
    tokens: Vec<FilterToken>,
}

impl FilterExpr {
    /// Parse the raw `--tag-filter` strings, in input order.
    ///
    /// Each string is trimmed; a leading `-` flips the token to exclude and
    /// is stripped; the remainder splits on `||` into alternative prefixes.
    /// Blank alternatives are dropped. A token with no surviving alternative
    /// is malformed and the error carries the offending raw string.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let mut tokens = Vec::with_capacity(raw.len());

        for raw in raw {
            let raw = raw.as_ref();
            let trimmed = raw.trim();

            let (polarity, rest) = match trimmed.strip_prefix('-') {
                Some(rest) => (Polarity::Exclude, rest),
                None => (Polarity::Include, trimmed),
            };

            let prefixes: Vec<String> = rest
                .split("||")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();

            if prefixes.is_empty() {
                return Err(ZotmetaError::MalformedFilter(raw.to_string()));
            }

            tokens.push(FilterToken { polarity, prefixes });
        }

        Ok(FilterExpr { tokens })
    }

    /// True when no tokens were supplied
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Evaluate against a single tag.
    ///
    /// The tag matches iff every token agrees: an include token must hit the
    /// tag, an exclude token must not.
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tokens
            .iter()
            .all(|t| t.hits_tag(tag) == (t.polarity == Polarity::Include))
    }

    /// Evaluate against an item's whole tag set.
    ///
    /// Every include token needs at least one of the item's tags to start
    /// with one of its prefixes; every exclude token needs none to. An empty
    /// expression accepts every item.
    pub fn matches_item(&self, tags: &[String]) -> bool {
        self.tokens
            .iter()
            .all(|t| t.hits_any(tags) == (t.polarity == Polarity::Include))
    }
}

impl std::fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                write!(f, " AND ")?;
            }
            first = false;
            if token.polarity == Polarity::Exclude {
                write!(f, "-")?;
            }
            write!(f, "{}", token.prefixes.join(" || "))?;
        }
        Ok(())
    }
}
