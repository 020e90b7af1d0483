//! Scan orchestration: secret candidates x filtered files, line by line.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use aho_corasick::AhoCorasick;
#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::config::{Config, ConfigSource};
use crate::env::{self, EnvSnapshot};
use crate::filter::PathFilter;
use crate::fs_util;
use crate::walker::walk_files;

/// Orchestrates secret-value discovery, directory walking, path filtering,
/// and literal substring matching.
///
/// A scanner is built once per session from an immutable [`Config`] and an
/// explicit [`EnvSnapshot`]; both are injected rather than read from global
/// state so tests can run against a synthetic environment and a temporary
/// directory tree.
#[derive(Debug, Clone)]
pub struct SecretScanner {
    config: Config,
    env: EnvSnapshot,
}

impl SecretScanner {
    /// Creates a scanner from an explicit configuration and environment.
    #[must_use]
    pub const fn new(config: Config, env: EnvSnapshot) -> Self {
        Self { config, env }
    }

    /// Creates a scanner for the current working directory and live
    /// environment, reporting whether configuration came from a file or
    /// from built-in defaults.
    #[must_use]
    pub fn from_cwd() -> (Self, ConfigSource) {
        let (config, source) = Config::load(Path::new(crate::CONFIG_FILENAME));
        (Self::new(config, env::snapshot()), source)
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the environment-variable names matched by the configured
    /// patterns, deduplicated and sorted.
    #[must_use]
    pub fn secret_env_var_names(&self) -> Vec<String> {
        env::secret_env_var_names(&self.config.env_var_patterns, &self.env)
    }

    /// Returns the usable secret values, in the order their names sort.
    ///
    /// Absent and empty values are dropped here: the empty string is a
    /// substring of every line, so letting one through would flag the entire
    /// codebase.
    #[must_use]
    pub fn secret_values(&self) -> Vec<String> {
        let names = self.secret_env_var_names();
        env::resolve_values(&names, &self.env)
            .into_iter()
            .flatten()
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Enumerates every regular file under `root` (default: the process
    /// working directory), before any filtering.
    ///
    /// Order is unspecified; use [`SecretScanner::filtered_files`] when a
    /// deterministic list is needed.
    #[must_use]
    pub fn walked_files(&self, root: Option<&Path>) -> Vec<PathBuf> {
        walk_files(&resolve_root(root), None)
    }

    /// Returns the files eligible for scanning under `root`, deduplicated
    /// and sorted lexicographically by path.
    ///
    /// Exclusion rules are tested against each path relative to `root`, so a
    /// scan root that itself sits under an excluded-looking prefix is not
    /// filtered out wholesale. Determinism matters: downstream scan output
    /// must be stable across runs on an unchanged filesystem.
    #[must_use]
    pub fn filtered_files(&self, root: Option<&Path>) -> Vec<PathBuf> {
        let root = resolve_root(root);
        let filter = PathFilter::from_config(&self.config);

        let mut files: Vec<PathBuf> = walk_files(&root, Some(&filter))
            .into_iter()
            .filter(|path| filter.include_file(path.strip_prefix(&root).unwrap_or(path)))
            .collect();

        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        files.dedup();
        files
    }

    /// Scans every filtered file under `root` for occurrences of any secret
    /// value, returning the result lines in order.
    ///
    /// Each (line, secret) hit produces a fixed three-line group: a running
    /// match counter, a warning naming the 1-based line number and file path,
    /// and an echo of the raw line content. A line containing two distinct
    /// secrets produces two groups for the same line number. Unless `silent`
    /// is set, every result line is also printed to standard output.
    ///
    /// Files that cannot be read as text are skipped; the scan never aborts.
    #[must_use]
    pub fn scan(&self, root: Option<&Path>, silent: bool) -> Vec<String> {
        let mut results = Vec::new();

        let values = self.secret_values();
        if values.is_empty() {
            #[cfg(feature = "tracing")]
            debug!("no usable secret values in the environment");
            return results;
        }

        // Literal multi-pattern matching over the value set. Overlapping
        // search mirrors per-value containment: a value that is a substring
        // of another value is still reported in its own right.
        let Ok(automaton) = AhoCorasick::new(&values) else {
            #[cfg(feature = "tracing")]
            debug!("failed to build literal automaton over secret values");
            return results;
        };

        let mut counter = 0usize;

        for path in self.filtered_files(root) {
            let Some(content) = fs_util::read_text_file(&path) else {
                #[cfg(feature = "tracing")]
                debug!(path = %path.display(), "skipping unreadable or binary file");
                continue;
            };

            for (index, line) in content.lines().enumerate() {
                let line_number = index + 1;

                // One hit per distinct value per line, in resolved-value order.
                let matched: BTreeSet<usize> = automaton
                    .find_overlapping_iter(line)
                    .map(|m| m.pattern().as_usize())
                    .collect();

                for _value_index in matched {
                    counter += 1;

                    #[cfg(feature = "tracing")]
                    trace!(path = %path.display(), line = line_number, "secret value match");

                    emit(&mut results, silent, format!("--- {counter}"));
                    emit(
                        &mut results,
                        silent,
                        format!(
                            "WARNING: Secret found at line {line_number} of file {}",
                            path.display()
                        ),
                    );
                    emit(&mut results, silent, format!("content: {line}"));
                }
            }
        }

        results
    }
}

fn resolve_root(root: Option<&Path>) -> PathBuf {
    root.map_or_else(
        || std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        Path::to_path_buf,
    )
}

fn emit(results: &mut Vec<String>, silent: bool, line: String) {
    if !silent {
        println!("{line}");
    }
    results.push(line);
}
