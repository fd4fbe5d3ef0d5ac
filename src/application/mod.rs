//! Application layer - One service per command

pub mod apply_category_tags;
pub mod bibliography;
pub mod find_missing_tags;
pub mod list_journals;
pub mod list_tags;
pub mod union;

pub use apply_category_tags::{ApplyCategoryTagsService, ApplyReport, UpdateFailure};
pub use bibliography::BibliographyService;
pub use find_missing_tags::{FindMissingTagsService, MissingTagsReport};
pub use list_journals::{parse_end_date, parse_start_date, JournalCount, ListJournalsService};
pub use list_tags::ListTagsService;
pub use union::UnionService;
