//! Optional debug artifacts: pretty-printed JSON mirrors of the walk and
//! filter stages, written under a scratch directory.
//!
//! These exist purely for diagnostics; a write failure is reported to the
//! caller as `false` and never fails the command.

use std::path::{Path, PathBuf};

/// Scratch directory the artifacts are written into, relative to the
/// working directory. The default exclusion lists keep it out of scans.
pub const ARTIFACT_DIR: &str = "tmp";

/// Artifact filename for the raw (unfiltered) walk.
pub const WALKED_FILES: &str = "evsecrets-walked-files.json";

/// Artifact filename for the filtered, sorted file list.
pub const FILTERED_FILES: &str = "evsecrets-filtered-files.json";

/// Writes `paths` as a pretty-printed JSON array to `dir/filename`.
///
/// Returns `false` on any serialisation or write failure.
#[must_use]
pub fn write_path_list(dir: &Path, filename: &str, paths: &[PathBuf]) -> bool {
    let lines: Vec<String> = paths.iter().map(|path| path.display().to_string()).collect();

    let Ok(json) = serde_json::to_string_pretty(&lines) else {
        return false;
    };

    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }

    evsecrets_core::fs_util::atomic_write(&dir.join(filename), &json).is_ok()
}
