//! Output formatting utilities

use crate::application::JournalCount;
use crate::domain::CooccurrenceMatrix;
use crate::error::Result;
use std::io::Write;

/// Format a tag list, one tag per line
pub fn format_tag_list(tags: &[String]) -> String {
    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }
    output
}

/// Write the co-occurrence matrix as CSV: a header of `tag` followed by the
/// column-axis names, then one row per row-axis tag.
pub fn write_union_csv<W: Write>(writer: W, matrix: &CooccurrenceMatrix) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["tag".to_string()];
    header.extend(matrix.cols().iter().cloned());
    csv.write_record(&header)?;

    for (r, row_tag) in matrix.rows().iter().enumerate() {
        let mut record = vec![row_tag.clone()];
        record.extend(matrix.row(r).iter().map(u64::to_string));
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the journal frequency table as CSV with a `count,journal` header
pub fn write_journal_csv<W: Write>(writer: W, rows: &[JournalCount]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["count", "journal"])?;
    for row in rows {
        csv.write_record([row.count.to_string(), row.journal.clone()])?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{count_union, FilterExpr};

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_tag_list() {
        let tags = labels(&["Asia", "Europe"]);
        assert_eq!(format_tag_list(&tags), "Asia\nEurope\n");
    }

    #[test]
    fn test_format_empty_tag_list() {
        assert_eq!(format_tag_list(&[]), "");
    }

    #[test]
    fn test_union_csv_layout() {
        let items: Vec<crate::error::Result<Vec<String>>> = vec![
            Ok(labels(&["Asia", "Culture"])),
            Ok(labels(&["Asia", "History"])),
            Ok(labels(&["Europe", "Culture"])),
        ];
        let matrix = count_union(
            &labels(&["Culture", "History"]),
            &labels(&["Asia", "Europe"]),
            &FilterExpr::default(),
            items,
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_union_csv(&mut buffer, &matrix).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "tag,Culture,History");
        assert_eq!(lines[1], "Asia,1,1");
        assert_eq!(lines[2], "Europe,1,0");
    }

    #[test]
    fn test_union_csv_quotes_embedded_commas() {
        let matrix = count_union(
            &labels(&["#RELEVANCE: Direct, primary"]),
            &labels(&["Asia"]),
            &FilterExpr::default(),
            Vec::<crate::error::Result<Vec<String>>>::new(),
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_union_csv(&mut buffer, &matrix).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("\"#RELEVANCE: Direct, primary\""));
    }

    #[test]
    fn test_journal_csv_layout() {
        let rows = vec![
            JournalCount {
                journal: "Maritime Studies".to_string(),
                count: 3,
            },
            JournalCount {
                journal: "Ocean Policy".to_string(),
                count: 1,
            },
        ];

        let mut buffer = Vec::new();
        write_journal_csv(&mut buffer, &rows).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "count,journal");
        assert_eq!(lines[1], "3,Maritime Studies");
        assert_eq!(lines[2], "1,Ocean Policy");
    }
}
