use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::filter::PathFilter;

/// Recursively enumerates every regular file reachable from `root`.
///
/// Symbolic links are not followed, which prevents cycles and
/// double-counting. Entries that vanish or become unreadable mid-walk are
/// skipped silently; the traversal never aborts.
///
/// When `prune` is given, traversal does not descend into directories the
/// filter rejects. The exclusion test applies to the path *relative* to
/// `root`, so a scan root that itself lives under an excluded-looking prefix
/// (say, a checkout in `/tmp`) is not excluded wholesale. Pruning is purely a
/// performance short-circuit: the file-level filter reapplies the same
/// substring tests, so the final filtered list is identical with or without
/// it.
#[must_use]
pub fn walk_files(root: &Path, prune: Option<&PathFilter>) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    // Every regular file is a candidate; gitignore and hidden-file rules do
    // not apply to this walk.
    builder.standard_filters(false).follow_links(false);

    if let Some(filter) = prune {
        let filter = filter.clone();
        let root = root.to_path_buf();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            match entry.file_type() {
                Some(file_type) if file_type.is_dir() => {
                    let path = entry.path();
                    filter.include_directory(path.strip_prefix(&root).unwrap_or(path))
                }
                _ => true,
            }
        });
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let Ok(entry) = entry else {
            continue;
        };
        if entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            files.push(entry.into_path());
        }
    }

    files
}
