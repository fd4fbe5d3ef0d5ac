//! Domain layer - Filter expressions, co-occurrence counting, item model

pub mod cooccurrence;
pub mod filter;
pub mod item;

pub use cooccurrence::{count_union, CooccurrenceMatrix};
pub use filter::{FilterExpr, FilterToken, Polarity};
pub use item::{parse_fuzzy_date, Item};
