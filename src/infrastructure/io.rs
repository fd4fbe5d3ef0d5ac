//! File and stream plumbing
//!
//! Command arguments use `-` to mean stdin or stdout; anything else is a
//! file path. Tag-list inputs are newline-delimited, trimmed, with blank
//! lines dropped.

use crate::error::{Result, ZotmetaError};
use std::fs;
use std::io::{self, Read, Write};

/// Open an output destination; `-` is stdout
pub fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(io::stdout()))
    } else {
        Ok(Box::new(fs::File::create(path)?))
    }
}

/// Read an input source to a string; `-` is stdin
pub fn read_to_string(path: &str) -> Result<String> {
    if path == "-" {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents).map_err(|e| {
            ZotmetaError::InputFormat(format!("cannot read stdin: {}", e))
        })?;
        Ok(contents)
    } else {
        fs::read_to_string(path)
            .map_err(|e| ZotmetaError::InputFormat(format!("cannot read {}: {}", path, e)))
    }
}

/// Read a newline-delimited tag list; an empty result is an input error
pub fn read_tag_list(path: &str) -> Result<Vec<String>> {
    let contents = read_to_string(path)?;
    let tags: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if tags.is_empty() {
        return Err(ZotmetaError::InputFormat(format!(
            "no tags found in {}",
            path
        )));
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_tag_list_trims_and_drops_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Asia\n  Europe  \n\n\nAfrica\n").unwrap();

        let tags = read_tag_list(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            tags,
            vec!["Asia".to_string(), "Europe".to_string(), "Africa".to_string()]
        );
    }

    #[test]
    fn test_read_tag_list_empty_file_is_input_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\n  \n").unwrap();

        let err = read_tag_list(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ZotmetaError::InputFormat(_)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_read_tag_list_missing_file_is_input_error() {
        let err = read_tag_list("/nonexistent/tags.txt").unwrap_err();
        assert!(matches!(err, ZotmetaError::InputFormat(msg) if msg.contains("tags.txt")));
    }

    #[test]
    fn test_open_output_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        {
            let mut out = open_output(path.to_str().unwrap()).unwrap();
            writeln!(out, "hello").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
