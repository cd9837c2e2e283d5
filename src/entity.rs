//! Core entity trait and row-conversion errors.
//!
//! This module provides the fundamental abstractions for mapping raw
//! delimited rows onto typed entities that know how to render themselves
//! as SQL statements.

use serde::Serialize;
use std::fmt;

use crate::sql::SqlValue;

/// Error type for row-to-entity conversion
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    TooFewFields {
        expected: usize,
        actual: usize,
    },
    InvalidInt {
        field: &'static str,
        value: String,
    },
    InvalidFloat {
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::TooFewFields { expected, actual } => {
                write!(f, "Row has {} fields, expected at least {}", actual, expected)
            }
            RowError::InvalidInt { field, value } => {
                write!(f, "Field '{}' is not a valid integer: '{}'", field, value)
            }
            RowError::InvalidFloat { field, value } => {
                write!(f, "Field '{}' is not a valid float: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for RowError {}

/// Core trait for all entities emitted into the generated script.
///
/// An entity corresponds to one output table. It declares its table name,
/// positional column order, minimum raw field count, and DDL, and knows how
/// to build itself from one delimited row.
///
/// # Example
///
/// ```ignore
/// use reelsql::{Entity, Movie};
///
/// let fields: Vec<String> = vec!["1", "Toy Story", "1995", "Animation"]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// let movie = Movie::from_row(&fields)?;
/// assert!(movie.insert_statement().starts_with("INSERT INTO movies"));
/// ```
pub trait Entity: Serialize + Sized {
    /// Destination table name
    const TABLE: &'static str;

    /// Column names, in the positional order used by INSERT statements
    const COLUMNS: &'static [&'static str];

    /// Minimum number of raw fields a row must carry
    const MIN_FIELDS: usize;

    /// CREATE TABLE statement for the destination table
    const DDL: &'static str;

    /// Build an entity from one raw delimited row.
    ///
    /// # Returns
    ///
    /// * `Ok(entity)` - All required fields converted successfully
    /// * `Err(RowError)` - Field-count shortfall or conversion failure; the
    ///   row is expected to be skipped by the caller
    fn from_row(fields: &[String]) -> Result<Self, RowError>;

    /// Column values in declared order.
    fn values(&self) -> Vec<SqlValue>;

    /// Render the INSERT statement for this entity.
    fn insert_statement(&self) -> String {
        let rendered: Vec<String> = self.values().iter().map(|v| v.to_string()).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            Self::TABLE,
            Self::COLUMNS.join(", "),
            rendered.join(", ")
        )
    }

    /// Serialize entity to JSON string
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Parse a required integer field, trimming surrounding whitespace.
pub(crate) fn parse_int(field: &'static str, raw: &str) -> Result<i64, RowError> {
    raw.trim().parse::<i64>().map_err(|_| RowError::InvalidInt {
        field,
        value: raw.to_string(),
    })
}

/// Parse a required float field, trimming surrounding whitespace.
pub(crate) fn parse_float(field: &'static str, raw: &str) -> Result<f64, RowError> {
    raw.trim().parse::<f64>().map_err(|_| RowError::InvalidFloat {
        field,
        value: raw.to_string(),
    })
}

/// Optional text: `None` if blank after trimming, else the verbatim value.
pub(crate) fn optional_text(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Optional numeric: integer only if the trimmed field is purely ASCII
/// digits, else `None`.
pub(crate) fn optional_year(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_trims_whitespace() {
        assert_eq!(parse_int("id", " 42 ").unwrap(), 42);
        assert_eq!(parse_int("id", "-7").unwrap(), -7);
    }

    #[test]
    fn test_parse_int_rejects_non_numeric() {
        let err = parse_int("id", "abc").unwrap_err();
        assert_eq!(
            err,
            RowError::InvalidInt {
                field: "id",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_int_rejects_float_text() {
        assert!(parse_int("id", "12.5").is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("rating", "3.5").unwrap(), 3.5);
        assert_eq!(parse_float("rating", " 4.0 ").unwrap(), 4.0);
        assert!(parse_float("rating", "high").is_err());
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   "), None);
    }

    #[test]
    fn test_optional_text_keeps_verbatim_value() {
        assert_eq!(optional_text(" F "), Some(" F ".to_string()));
        assert_eq!(optional_text("engineer"), Some("engineer".to_string()));
    }

    #[test]
    fn test_optional_year() {
        assert_eq!(optional_year("1999"), Some(1999));
        assert_eq!(optional_year(" 1995 "), Some(1995));
        assert_eq!(optional_year("N/A"), None);
        assert_eq!(optional_year(""), None);
        assert_eq!(optional_year("-1999"), None);
        assert_eq!(optional_year("19a9"), None);
    }

    #[test]
    fn test_row_error_display() {
        let err = RowError::TooFewFields {
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Row has 2 fields, expected at least 4");
    }
}
