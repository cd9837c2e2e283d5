//! SQL literal rendering and escaping.
//!
//! Every value destined for the generated script is modeled as a [`SqlValue`]
//! and rendered through `Display`, which produces a literal safe to embed in
//! an `INSERT` statement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single literal in a generated SQL statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SqlValue {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

/// Escape a raw string for embedding in a single-quoted SQL literal.
///
/// Every single quote is doubled, so `O'Brien` becomes `O''Brien` and a
/// standard SQL parser reads the quoted literal back unchanged.
pub fn sql_escape(s: &str) -> String {
    s.replace('\'', "''")
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Int(i) => write!(f, "{}", i),
            SqlValue::Float(v) => {
                if !v.is_finite() {
                    // REAL columns cannot hold inf/NaN literals
                    write!(f, "NULL")
                } else if v.fract() == 0.0 {
                    write!(f, "{:.1}", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            SqlValue::Text(s) => write!(f, "'{}'", sql_escape(s)),
            SqlValue::Null => write!(f, "NULL"),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(value: Option<i64>) -> Self {
        value.map(SqlValue::Int).unwrap_or(SqlValue::Null)
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        value.map(SqlValue::Text).unwrap_or(SqlValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_doubles_single_quotes() {
        assert_eq!(sql_escape("O'Brien"), "O''Brien");
        assert_eq!(sql_escape("it's a 'test'"), "it''s a ''test''");
        assert_eq!(sql_escape("no quotes"), "no quotes");
    }

    #[test]
    fn test_text_literal_rendering() {
        assert_eq!(SqlValue::Text("O'Brien".to_string()).to_string(), "'O''Brien'");
        assert_eq!(SqlValue::Text(String::new()).to_string(), "''");
    }

    #[test]
    fn test_null_is_unquoted() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
    }

    #[test]
    fn test_int_rendering() {
        assert_eq!(SqlValue::Int(42).to_string(), "42");
        assert_eq!(SqlValue::Int(-7).to_string(), "-7");
    }

    #[test]
    fn test_float_rendering_keeps_decimal_point() {
        assert_eq!(SqlValue::Float(4.0).to_string(), "4.0");
        assert_eq!(SqlValue::Float(3.5).to_string(), "3.5");
        assert_eq!(SqlValue::Float(-2.0).to_string(), "-2.0");
    }

    #[test]
    fn test_non_finite_float_renders_null() {
        assert_eq!(SqlValue::Float(f64::NAN).to_string(), "NULL");
        assert_eq!(SqlValue::Float(f64::INFINITY).to_string(), "NULL");
    }

    #[test]
    fn test_from_optionals() {
        assert_eq!(SqlValue::from(Some(1995)), SqlValue::Int(1995));
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
        assert_eq!(
            SqlValue::from(Some("Animation".to_string())),
            SqlValue::Text("Animation".to_string())
        );
        assert_eq!(SqlValue::from(None::<String>), SqlValue::Null);
    }
}
