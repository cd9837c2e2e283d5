//! Dataset directory location and readiness checks.
//!
//! The converter expects a single directory holding the four input files.
//! These checks only decide whether a run can start; they never touch file
//! contents.

use std::io;
use std::path::Path;

/// Files the converter expects inside the dataset directory.
pub const REQUIRED_FILES: [&str; 4] = ["movies.txt", "ratings.txt", "tags.txt", "users.txt"];

/// Ensure the dataset directory exists.
///
/// # Returns
///
/// * `Ok(true)` - Directory already existed, run can proceed
/// * `Ok(false)` - Directory was absent and has been created; the caller
///   should print guidance and stop
/// * `Err(e)` - Directory could not be created
pub fn ensure_dataset_dir(dir: &Path) -> io::Result<bool> {
    if dir.exists() {
        return Ok(true);
    }

    std::fs::create_dir_all(dir)?;
    Ok(false)
}

/// Names from [`REQUIRED_FILES`] not present under `dir`, in declared order.
pub fn missing_data_files(dir: &Path) -> Vec<String> {
    REQUIRED_FILES
        .iter()
        .filter(|name| !dir.join(name).exists())
        .map(|name| name.to_string())
        .collect()
}
