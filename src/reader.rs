//! Pipe-delimited record reading.
//!
//! Reads one input file into ordered rows of string fields, dropping lines
//! whose every field is blank. Row order is preserved because it becomes
//! INSERT order in the generated script.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Field delimiter used by all dataset files.
pub const FIELD_DELIMITER: char = '|';

/// One delimited line from an input file, split into ordered string fields.
pub type Record = Vec<String>;

/// Error type for record reading
#[derive(Debug)]
pub enum ReadError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::NotFound(path) => {
                write!(f, "Data file not found: {}", path.display())
            }
            ReadError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::NotFound(_) => None,
            ReadError::Io { source, .. } => Some(source),
        }
    }
}

/// Read a pipe-delimited file into ordered records.
///
/// Lines whose every field is blank after trimming are dropped without a
/// trace; everything else is kept verbatim as an ordered field list.
///
/// # Errors
///
/// Returns [`ReadError::NotFound`] if the path does not exist, and
/// [`ReadError::Io`] for any lower-level read failure.
pub fn read_records(path: &Path) -> Result<Vec<Record>, ReadError> {
    if !path.exists() {
        return Err(ReadError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|e| ReadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<Record> = contents
        .lines()
        .map(|line| {
            line.split(FIELD_DELIMITER)
                .map(str::to_string)
                .collect::<Record>()
        })
        .filter(|fields| fields.iter().any(|f| !f.trim().is_empty()))
        .collect();

    tracing::debug!("Read {} rows from {}", records.len(), path.display());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_test_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_records_splits_on_pipe() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(
            temp_dir.path(),
            "movies.txt",
            "1|Toy Story|1995|Animation\n2|Jumanji|1995|Adventure\n",
        );

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], vec!["1", "Toy Story", "1995", "Animation"]);
        assert_eq!(records[1], vec!["2", "Jumanji", "1995", "Adventure"]);
    }

    #[test]
    fn test_read_records_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(temp_dir.path(), "data.txt", "3|c\n1|a\n2|b\n");

        let records = read_records(&path).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(
            temp_dir.path(),
            "data.txt",
            "1|Toy Story|1995|Animation\n\n   \n | | | \n2|Jumanji|1995|Adventure\n",
        );

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_row_with_some_blank_fields_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(temp_dir.path(), "data.txt", "5|Jane||F||\n");

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], vec!["5", "Jane", "", "F", "", ""]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_file(temp_dir.path(), "data.txt", "1|Toy Story|1995|Animation\r\n");

        let records = read_records(&path).unwrap();
        assert_eq!(records[0][3], "Animation");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.txt");

        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, ReadError::NotFound(_)));
        assert!(err.to_string().contains("absent.txt"));
    }
}
