use std::path::Path;

use crate::config::Config;

/// Path eligibility rules built from the configured exclusion lists.
///
/// A file is excluded when its path contains any excluded substring anywhere,
/// or ends with any excluded suffix. Directories are tested with the
/// substring rule only, so whole subtrees can be pruned during traversal;
/// that pruning is an optimisation, not a correctness requirement, because
/// the file-level check reapplies the same substring tests.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    path_substrings: Vec<String>,
    suffixes: Vec<String>,
}

impl PathFilter {
    /// Creates a filter from explicit exclusion lists.
    #[must_use]
    pub const fn new(path_substrings: Vec<String>, suffixes: Vec<String>) -> Self {
        Self {
            path_substrings,
            suffixes,
        }
    }

    /// Creates a filter from a configuration's two exclusion lists.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.exclude_file_patterns.clone(),
            config.exclude_file_suffixes.clone(),
        )
    }

    /// Returns `true` if the file at `path` is eligible for scanning.
    ///
    /// Both the substring and suffix rules apply; matching is case-sensitive.
    #[must_use]
    pub fn include_file(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if self.path_substrings.iter().any(|s| path_str.contains(s.as_str())) {
            return false;
        }

        !self.suffixes.iter().any(|suffix| path_str.ends_with(suffix.as_str()))
    }

    /// Returns `true` if traversal should descend into the directory.
    ///
    /// Only the path-substring rule applies; the suffix rule is for files.
    #[must_use]
    pub fn include_directory(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        !self.path_substrings.iter().any(|s| path_str.contains(s.as_str()))
    }
}
