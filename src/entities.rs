//! Entity definitions for the four dataset tables.
//!
//! One struct per output table: [`Movie`], [`User`], [`Rating`], [`Tag`].
//! Each implements [`Entity`], declaring its table name, column order,
//! minimum raw field count, and DDL, plus the conversion from one raw
//! pipe-delimited row.

use serde::{Deserialize, Serialize};

use crate::entity::{optional_text, optional_year, parse_float, parse_int, Entity, RowError};
use crate::sql::SqlValue;

/// One row of `movies.txt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: Option<i64>,
    pub genres: Option<String>,
}

impl Entity for Movie {
    const TABLE: &'static str = "movies";
    const COLUMNS: &'static [&'static str] = &["id", "title", "year", "genres"];
    const MIN_FIELDS: usize = 4;
    const DDL: &'static str = "CREATE TABLE movies (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    year INTEGER,
    genres TEXT
);";

    fn from_row(fields: &[String]) -> Result<Self, RowError> {
        if fields.len() < Self::MIN_FIELDS {
            return Err(RowError::TooFewFields {
                expected: Self::MIN_FIELDS,
                actual: fields.len(),
            });
        }

        Ok(Self {
            id: parse_int("id", &fields[0])?,
            title: fields[1].clone(),
            year: optional_year(&fields[2]),
            genres: optional_text(&fields[3]),
        })
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.title.clone().into(),
            self.year.into(),
            self.genres.clone().into(),
        ]
    }
}

/// One row of `users.txt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub register_date: Option<String>,
    pub occupation: Option<String>,
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "email",
        "gender",
        "register_date",
        "occupation",
    ];
    const MIN_FIELDS: usize = 6;
    const DDL: &'static str = "CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT,
    gender TEXT,
    register_date TEXT,
    occupation TEXT
);";

    fn from_row(fields: &[String]) -> Result<Self, RowError> {
        if fields.len() < Self::MIN_FIELDS {
            return Err(RowError::TooFewFields {
                expected: Self::MIN_FIELDS,
                actual: fields.len(),
            });
        }

        Ok(Self {
            id: parse_int("id", &fields[0])?,
            name: fields[1].clone(),
            email: optional_text(&fields[2]),
            gender: optional_text(&fields[3]),
            register_date: optional_text(&fields[4]),
            occupation: optional_text(&fields[5]),
        })
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.name.clone().into(),
            self.email.clone().into(),
            self.gender.clone().into(),
            self.register_date.clone().into(),
            self.occupation.clone().into(),
        ]
    }
}

/// One row of `ratings.txt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: f64,
    pub timestamp: i64,
}

impl Entity for Rating {
    const TABLE: &'static str = "ratings";
    const COLUMNS: &'static [&'static str] =
        &["id", "user_id", "movie_id", "rating", "timestamp"];
    const MIN_FIELDS: usize = 5;
    const DDL: &'static str = "CREATE TABLE ratings (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    movie_id INTEGER NOT NULL,
    rating REAL NOT NULL,
    timestamp INTEGER NOT NULL,
    FOREIGN KEY (movie_id) REFERENCES movies(id)
);";

    fn from_row(fields: &[String]) -> Result<Self, RowError> {
        if fields.len() < Self::MIN_FIELDS {
            return Err(RowError::TooFewFields {
                expected: Self::MIN_FIELDS,
                actual: fields.len(),
            });
        }

        Ok(Self {
            id: parse_int("id", &fields[0])?,
            user_id: parse_int("user_id", &fields[1])?,
            movie_id: parse_int("movie_id", &fields[2])?,
            rating: parse_float("rating", &fields[3])?,
            timestamp: parse_int("timestamp", &fields[4])?,
        })
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.movie_id.into(),
            self.rating.into(),
            self.timestamp.into(),
        ]
    }
}

/// One row of `tags.txt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    pub tag: String,
    pub timestamp: i64,
}

impl Entity for Tag {
    const TABLE: &'static str = "tags";
    const COLUMNS: &'static [&'static str] = &["id", "user_id", "movie_id", "tag", "timestamp"];
    const MIN_FIELDS: usize = 5;
    const DDL: &'static str = "CREATE TABLE tags (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    movie_id INTEGER NOT NULL,
    tag TEXT NOT NULL,
    timestamp INTEGER NOT NULL,
    FOREIGN KEY (movie_id) REFERENCES movies(id)
);";

    fn from_row(fields: &[String]) -> Result<Self, RowError> {
        if fields.len() < Self::MIN_FIELDS {
            return Err(RowError::TooFewFields {
                expected: Self::MIN_FIELDS,
                actual: fields.len(),
            });
        }

        Ok(Self {
            id: parse_int("id", &fields[0])?,
            user_id: parse_int("user_id", &fields[1])?,
            movie_id: parse_int("movie_id", &fields[2])?,
            tag: fields[3].clone(),
            timestamp: parse_int("timestamp", &fields[4])?,
        })
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.movie_id.into(),
            self.tag.clone().into(),
            self.timestamp.into(),
        ]
    }
}
