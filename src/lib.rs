//! # Reelsql: Movie Dataset to SQL Script Converter
//!
//! Reelsql converts four pipe-delimited flat files (movies, ratings, tags,
//! users) into a single SQL script that recreates and populates four
//! relational tables.
//!
//! ## Pipeline
//!
//! - **Input locator**: verify the dataset directory and the four expected
//!   filenames exist
//! - **Record reader**: split each file into pipe-delimited rows, dropping
//!   blank lines
//! - **Row transformer**: convert raw fields into typed entities, skipping
//!   malformed rows with a warning
//! - **Script emitter**: assemble DDL and INSERT statements and write them
//!   to one output file
//!
//! ## Example
//!
//! ```ignore
//! use reelsql::{generate_script, write_script, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let script = generate_script(&config)?;
//! let lines = write_script(&config.output_path, &script.sql)?;
//! println!("Script contains {} lines", lines);
//! ```

// Core modules
pub mod config;
pub mod dataset;
pub mod entities;
pub mod entity;
pub mod reader;
pub mod script;
pub mod sql;

// Re-export key types
pub use config::{GeneratorConfig, DATASET_DIR, OUTPUT_FILE};
pub use dataset::{ensure_dataset_dir, missing_data_files, REQUIRED_FILES};
pub use entities::{Movie, Rating, Tag, User};
pub use entity::{Entity, RowError};
pub use reader::{read_records, ReadError, Record};
pub use script::{
    build_script, generate_script, insert_statements, write_script, GeneratedScript,
};
pub use sql::{sql_escape, SqlValue};
