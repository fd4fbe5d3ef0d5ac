//! Bibliography listing use case
//!
//! Renders the items passing the filter as a minimal standalone HTML
//! document: one entry per item with title, journal, and date, followed by
//! the subset of the item's tags that match the filter.

use crate::domain::{FilterExpr, Item};
use crate::error::Result;
use crate::infrastructure::Library;

/// Service rendering the filtered bibliography as HTML.
pub struct BibliographyService<L: Library> {
    library: L,
}

impl<L: Library> BibliographyService<L> {
    pub fn new(library: L) -> Self {
        Self { library }
    }

    pub fn execute(&self, filter: &FilterExpr) -> Result<String> {
        let mut items = Vec::new();
        for item in self.library.items(None) {
            let item = item?;
            if filter.matches_item(&item.tags) {
                items.push(item);
            }
        }
        items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));

        Ok(render_html(&items, filter))
    }
}

fn render_html(items: &[Item], filter: &FilterExpr) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Bibliography</title>\n</head>\n<body>\n");
    html.push_str("<h1>Bibliography</h1>\n");

    for item in items {
        html.push_str("<div class=\"entry\">\n");

        html.push_str("<p class=\"citation\"><span class=\"title\">");
        html.push_str(&escape_html(&item.title));
        html.push_str("</span>");
        if let Some(journal) = item.journal.as_deref().filter(|j| !j.is_empty()) {
            html.push_str(". <span class=\"journal\">");
            html.push_str(&escape_html(journal));
            html.push_str("</span>");
        }
        if !item.date.is_empty() {
            html.push_str(", <span class=\"date\">");
            html.push_str(&escape_html(&item.date));
            html.push_str("</span>");
        }
        html.push_str(".</p>\n");

        let tags: Vec<String> = item
            .tags
            .iter()
            .filter(|t| filter.matches_tag(t))
            .map(|t| escape_html(t))
            .collect();
        if !tags.is_empty() {
            html.push_str("<p class=\"tags\">");
            html.push_str(&tags.join("; "));
            html.push_str("</p>\n");
        }

        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{item, FakeLibrary};

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_renders_filtered_items_with_their_tags() {
        let library = FakeLibrary::with_items(vec![
            item("K1", "Asian trade", &["Asia", "Culture"]),
            item("K2", "European trade", &["Europe"]),
        ]);
        let service = BibliographyService::new(library);

        let filter = FilterExpr::parse(&["Asia"]).unwrap();
        let html = service.execute(&filter).unwrap();

        assert!(html.contains("Asian trade"));
        assert!(!html.contains("European trade"));
        // Only tags matching the filter appear
        assert!(html.contains("Asia"));
        assert!(!html.contains("Culture"));
    }

    #[test]
    fn test_entries_sorted_by_title() {
        let library = FakeLibrary::with_items(vec![
            item("K1", "zebra study", &["Asia"]),
            item("K2", "Alpha study", &["Asia"]),
        ]);
        let service = BibliographyService::new(library);

        let html = service.execute(&FilterExpr::default()).unwrap();
        let alpha = html.find("Alpha study").unwrap();
        let zebra = html.find("zebra study").unwrap();
        assert!(alpha < zebra);
    }

    #[test]
    fn test_titles_are_escaped() {
        let library = FakeLibrary::with_items(vec![item("K1", "Cod & herring <1900>", &[])]);
        let service = BibliographyService::new(library);

        let html = service.execute(&FilterExpr::default()).unwrap();
        assert!(html.contains("Cod &amp; herring &lt;1900&gt;"));
        assert!(!html.contains("<1900>"));
    }

    #[test]
    fn test_journal_and_date_rendered_when_present() {
        let mut it = item("K1", "Dried fish networks", &[]);
        it.journal = Some("Maritime Studies".to_string());
        it.date = "May 2021".to_string();
        let library = FakeLibrary::with_items(vec![it]);
        let service = BibliographyService::new(library);

        let html = service.execute(&FilterExpr::default()).unwrap();
        assert!(html.contains("Maritime Studies"));
        assert!(html.contains("May 2021"));
    }

    #[test]
    fn test_document_structure() {
        let library = FakeLibrary::with_items(vec![]);
        let service = BibliographyService::new(library);

        let html = service.execute(&FilterExpr::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.ends_with("</html>\n"));
    }
}
