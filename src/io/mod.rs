//! Input/output helpers.
//!
//! - spreadsheet report (`workbook`)
//! - roster JSON read/write (`rosters`)
//! - team results JSON export (`results`)

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub mod results;
pub mod rosters;
pub mod workbook;

pub use results::*;
pub use rosters::*;
pub use workbook::*;

/// Report location used when `--output` is not given. Overwritten every run.
pub const DEFAULT_OUTPUT_FILE: &str = "ipl_player_stats.xlsx";

/// Replace `path` with `bytes` without ever leaving a half-written file there.
///
/// The bytes go to a sibling temp file first, which is then renamed over the
/// target. On failure the temp file is removed and `path` is untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let tmp = temp_sibling(path);

    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(AppError::report_write(format!(
            "Failed to write '{}': {e}",
            tmp.display()
        )));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(AppError::report_write(format!(
            "Failed to replace '{}': {e}",
            path.display()
        )));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "report".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
pub(crate) fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ipl-tally-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}
