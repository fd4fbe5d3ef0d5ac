//! zotmeta - Meta-analysis helpers for a Zotero library
//!
//! A command-line tool that queries a Zotero library over its web API to
//! compute tag-distribution statistics and perform bulk tag edits.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ZotmetaError;
