//! SQL script assembly and emission.
//!
//! Builds the full initialization script as an ordered list of lines:
//! header comment, DROP statements, CREATE statements, one INSERT block per
//! table, footer comment. The assembled text is written to the output file
//! in a single shot, overwriting prior content.

use chrono::Local;
use std::fs;
use std::io;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::entities::{Movie, Rating, Tag, User};
use crate::entity::Entity;
use crate::reader::{read_records, ReadError, Record};

/// Assembled script text plus per-table INSERT counts.
#[derive(Debug)]
pub struct GeneratedScript {
    pub sql: String,
    pub movie_inserts: usize,
    pub user_inserts: usize,
    pub rating_inserts: usize,
    pub tag_inserts: usize,
}

impl GeneratedScript {
    /// Total INSERT statements across all four tables.
    pub fn total_inserts(&self) -> usize {
        self.movie_inserts + self.user_inserts + self.rating_inserts + self.tag_inserts
    }
}

/// Convert raw rows into INSERT statements for entity `E`.
///
/// Malformed rows are skipped with a warning naming the row index and raw
/// content; survivors keep input order. No row aborts the run.
pub fn insert_statements<E: Entity>(records: &[Record]) -> Vec<String> {
    let mut statements = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match E::from_row(record) {
            Ok(entity) => statements.push(entity.insert_statement()),
            Err(err) => {
                tracing::warn!(
                    "Skipping invalid {} data at row {}: {:?} - {}",
                    E::TABLE,
                    index,
                    record,
                    err
                );
            }
        }
    }

    statements
}

/// Read the four dataset files and assemble the full script.
///
/// # Errors
///
/// Propagates [`ReadError`] from any of the four reads; a missing or
/// unreadable file aborts the whole run.
pub fn generate_script(config: &GeneratorConfig) -> Result<GeneratedScript, ReadError> {
    let movies = load_table(&config.dataset_dir, "movies.txt")?;
    let ratings = load_table(&config.dataset_dir, "ratings.txt")?;
    let tags = load_table(&config.dataset_dir, "tags.txt")?;
    let users = load_table(&config.dataset_dir, "users.txt")?;

    Ok(build_script(&movies, &users, &ratings, &tags))
}

fn load_table(dir: &Path, name: &str) -> Result<Vec<Record>, ReadError> {
    let records = read_records(&dir.join(name))?;
    tracing::info!("Read {} rows from {}", records.len(), name);
    Ok(records)
}

/// Assemble the script text from pre-read rows.
///
/// Section order is fixed: header, DROPs, CREATEs, then INSERT blocks for
/// movies, users, ratings, tags.
pub fn build_script(
    movies: &[Record],
    users: &[Record],
    ratings: &[Record],
    tags: &[Record],
) -> GeneratedScript {
    let mut lines: Vec<String> = Vec::new();

    lines.push("-- SQL script generated automatically".to_string());
    lines.push(format!(
        "-- Generated at: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(String::new());

    lines.push("-- Drop existing tables if they exist".to_string());
    for table in [Movie::TABLE, Rating::TABLE, Tag::TABLE, User::TABLE] {
        lines.push(format!("DROP TABLE IF EXISTS {};", table));
    }
    lines.push(String::new());

    lines.push("-- Create tables".to_string());
    for ddl in [Movie::DDL, Rating::DDL, Tag::DDL, User::DDL] {
        lines.push(ddl.to_string());
        lines.push(String::new());
    }

    tracing::info!("Generating INSERT statements for movies...");
    let movie_stmts = insert_statements::<Movie>(movies);
    tracing::info!("Generating INSERT statements for users...");
    let user_stmts = insert_statements::<User>(users);
    tracing::info!("Generating INSERT statements for ratings...");
    let rating_stmts = insert_statements::<Rating>(ratings);
    tracing::info!("Generating INSERT statements for tags...");
    let tag_stmts = insert_statements::<Tag>(tags);

    let movie_inserts = movie_stmts.len();
    let user_inserts = user_stmts.len();
    let rating_inserts = rating_stmts.len();
    let tag_inserts = tag_stmts.len();

    for (table, stmts) in [
        (Movie::TABLE, movie_stmts),
        (User::TABLE, user_stmts),
        (Rating::TABLE, rating_stmts),
        (Tag::TABLE, tag_stmts),
    ] {
        lines.push(format!("-- Insert data into {} table", table));
        lines.extend(stmts);
        lines.push(String::new());
    }

    lines.push("-- End of SQL script".to_string());

    let mut sql = lines.join("\n");
    sql.push('\n');

    GeneratedScript {
        sql,
        movie_inserts,
        user_inserts,
        rating_inserts,
        tag_inserts,
    }
}

/// Write the script, overwriting any existing file.
///
/// Parent directories are created if needed. Returns the total line count of
/// the written script.
pub fn write_script(path: &Path, sql: &str) -> io::Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, sql)?;
    Ok(sql.lines().count())
}
