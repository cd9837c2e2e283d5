//! Fixed locations for a generation run.

use std::path::PathBuf;

/// Default directory scanned for the input files.
pub const DATASET_DIR: &str = "dataset";

/// Default path of the generated SQL script.
pub const OUTPUT_FILE: &str = "db_init.sql";

/// Settings for one generation run.
///
/// The defaults match the fixed locations the tool has always used; the CLI
/// only overrides them when asked to.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding the four input files
    pub dataset_dir: PathBuf,

    /// Where the generated script is written
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dataset_dir: PathBuf::from(DATASET_DIR),
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}
