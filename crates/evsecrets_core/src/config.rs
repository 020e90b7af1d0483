use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
#[cfg(feature = "tracing")]
use tracing::debug;

/// Environment-variable name patterns used when no config file is present.
///
/// These cover the common naming conventions for connection strings, API
/// keys, and service endpoints.
pub const DEFAULT_ENV_VAR_PATTERNS: &[&str] = &[
    "CONN_STR",
    "CONNECTION_STR",
    "CONNECTION_STRING",
    "_KEY",
    "_URI",
    "_URL",
];

/// Path substrings excluded from scanning by default: version-control
/// metadata, build output, dependency caches, and virtual environments.
pub const DEFAULT_EXCLUDE_FILE_PATTERNS: &[&str] = &[
    "__pycache__/",
    "bin/",
    "git/",
    "node_modules/",
    "obj/",
    "target/",
    "tmp/",
    "venv/",
];

/// File suffixes excluded from scanning by default: compiled artifacts,
/// archives, and binary media.
pub const DEFAULT_EXCLUDE_FILE_SUFFIXES: &[&str] = &[
    ".class", ".gif", ".gz", ".jar", ".jpeg", ".jpg", ".mp3", ".mp4", ".pdf", ".png", ".pyc",
    ".so", ".tar", ".zip",
];

/// Where a loaded configuration actually came from.
///
/// `Config::load` never fails; this makes the fallback observable so callers
/// and tests can tell whether built-in defaults were used without inspecting
/// log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The configuration file was present and parsed successfully.
    File,
    /// The file was absent or malformed; built-in defaults are in effect.
    Defaults,
}

/// Scan configuration loaded from `.evsecrets.json`.
///
/// Holds three ordered lists: substrings matched against environment-variable
/// *names*, substrings matched against file *paths*, and literal path
/// endings. When a config file parses successfully its lists replace the
/// defaults per-field; a field missing from the file becomes an empty list.
/// Immutable after load within a scan session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Substrings matched against environment-variable names.
    #[serde(default)]
    pub env_var_patterns: Vec<String>,

    /// Substrings matched anywhere in a file or directory path.
    #[serde(default)]
    pub exclude_file_patterns: Vec<String>,

    /// Literal path endings (case-sensitive exact tail match).
    #[serde(default)]
    pub exclude_file_suffixes: Vec<String>,

    /// Tool version tag written by `write_defaults`; ignored on read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Generation timestamp written by `write_defaults`; ignored on read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gen_timestamp: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Returns the built-in default configuration.
    ///
    /// All three lists are guaranteed non-empty.
    #[must_use]
    pub fn defaults() -> Self {
        let to_strings = |items: &[&str]| items.iter().map(ToString::to_string).collect();

        Self {
            env_var_patterns: to_strings(DEFAULT_ENV_VAR_PATTERNS),
            exclude_file_patterns: to_strings(DEFAULT_EXCLUDE_FILE_PATTERNS),
            exclude_file_suffixes: to_strings(DEFAULT_EXCLUDE_FILE_SUFFIXES),
            version: None,
            gen_timestamp: None,
        }
    }

    /// Loads configuration from a `.evsecrets.json` file.
    ///
    /// Never fails the caller: a missing or malformed file falls back to
    /// [`Config::defaults`], reported via [`ConfigSource::Defaults`].
    #[must_use]
    pub fn load(path: &Path) -> (Self, ConfigSource) {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_error) => {
                #[cfg(feature = "tracing")]
                debug!(path = %path.display(), error = %_error, "config unreadable, using defaults");
                return (Self::defaults(), ConfigSource::Defaults);
            }
        };

        match Self::from_json(&content) {
            Ok(config) => (config, ConfigSource::File),
            Err(_error) => {
                #[cfg(feature = "tracing")]
                debug!(path = %path.display(), error = %_error, "config malformed, using defaults");
                (Self::defaults(), ConfigSource::Defaults)
            }
        }
    }

    /// Loads configuration from `.evsecrets.json` inside `dir`.
    #[must_use]
    pub fn load_from_dir(dir: &Path) -> (Self, ConfigSource) {
        Self::load(&dir.join(crate::CONFIG_FILENAME))
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Serialises this configuration to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialize { source })
    }

    /// Atomically writes this configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json()?;
        crate::fs_util::atomic_write(path, &content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the default configuration to `path`, stamped with the crate
    /// version and a local-time generation timestamp.
    ///
    /// Returns `false` on any serialisation or write failure; never panics.
    /// This is the `init` operation of the configuration store.
    #[must_use]
    pub fn write_defaults(path: &Path) -> bool {
        let mut config = Self::defaults();
        config.version = Some(env!("CARGO_PKG_VERSION").to_string());
        config.gen_timestamp = Some(generation_timestamp());

        match config.save(path) {
            Ok(()) => true,
            Err(_error) => {
                #[cfg(feature = "tracing")]
                debug!(path = %path.display(), error = %_error, "failed to write default config");
                false
            }
        }
    }
}

/// Returns the current local time formatted as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn generation_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Errors that can occur when parsing, serialising, or writing a
/// `.evsecrets.json` configuration file.
///
/// Load failures are swallowed into the defaults fallback and never surface
/// as this type; only explicit parse/save operations report errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid JSON or unexpected values.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the config file that could not be parsed.
        path: PathBuf,
        /// The underlying JSON deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory configuration could not be serialised to JSON.
    #[error("failed to serialise config: {source}")]
    Serialize {
        /// The underlying JSON serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The config file could not be written to disk.
    #[error("failed to write config '{path}': {source}")]
    Write {
        /// Path to the config file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns the file path associated with this error, if any.
    ///
    /// `ConfigError::Serialize` errors have no associated path.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Write { path, .. } => {
                Some(path)
            }
            Self::Serialize { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_have_non_empty_lists() {
        let config = Config::defaults();
        assert!(!config.env_var_patterns.is_empty());
        assert!(!config.exclude_file_patterns.is_empty());
        assert!(!config.exclude_file_suffixes.is_empty());
        assert!(config.version.is_none());
        assert!(config.gen_timestamp.is_none());
    }

    #[test]
    fn defaults_cover_common_secret_name_conventions() {
        let config = Config::defaults();
        for pattern in ["_KEY", "_URI", "_URL", "CONN_STR", "CONNECTION_STR", "CONNECTION_STRING"] {
            assert!(
                config.env_var_patterns.iter().any(|p| p == pattern),
                "missing default pattern {pattern}"
            );
        }
    }

    #[test]
    fn defaults_exclude_dependency_and_vcs_directories() {
        let config = Config::defaults();
        assert!(config.exclude_file_patterns.iter().any(|p| p == "node_modules/"));
        assert!(config.exclude_file_patterns.iter().any(|p| p == "git/"));
    }

    #[test]
    fn from_json_parses_all_three_lists() {
        let json = r#"{
            "env_var_patterns": ["_TOKEN"],
            "exclude_file_patterns": ["vendor/"],
            "exclude_file_suffixes": [".log"]
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.env_var_patterns, vec!["_TOKEN"]);
        assert_eq!(config.exclude_file_patterns, vec!["vendor/"]);
        assert_eq!(config.exclude_file_suffixes, vec![".log"]);
    }

    #[test]
    fn from_json_treats_missing_fields_as_empty_lists() {
        let config = Config::from_json(r#"{"env_var_patterns": ["_KEY"]}"#).unwrap();
        assert_eq!(config.env_var_patterns, vec!["_KEY"]);
        assert!(config.exclude_file_patterns.is_empty());
        assert!(config.exclude_file_suffixes.is_empty());
    }

    #[test]
    fn from_json_ignores_version_and_timestamp_for_behaviour() {
        let json = r#"{
            "env_var_patterns": ["_KEY"],
            "version": "9.9.9",
            "gen_timestamp": "2026-01-01 00:00:00"
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.env_var_patterns, vec!["_KEY"]);
        assert_eq!(config.version.as_deref(), Some("9.9.9"));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(Config::from_json("not { json").is_err());
    }

    #[test]
    fn load_returns_defaults_when_file_absent() {
        let (config, source) = Config::load(Path::new("/nonexistent/.evsecrets.json"));
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config, Config::defaults());
    }

    #[test]
    fn load_returns_defaults_when_file_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(crate::CONFIG_FILENAME);
        std::fs::write(&path, "{ broken").unwrap();

        let (config, source) = Config::load(&path);
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config, Config::defaults());
    }

    #[test]
    fn load_replaces_defaults_per_field_without_merging() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(crate::CONFIG_FILENAME);
        std::fs::write(&path, r#"{"exclude_file_patterns": ["only/"]}"#).unwrap();

        let (config, source) = Config::load(&path);
        assert_eq!(source, ConfigSource::File);
        // Fields present in the file replace the defaults; absent fields are
        // empty lists, never merged with the defaults.
        assert_eq!(config.exclude_file_patterns, vec!["only/"]);
        assert!(config.env_var_patterns.is_empty());
        assert!(config.exclude_file_suffixes.is_empty());
    }

    #[test]
    fn load_from_dir_finds_named_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(crate::CONFIG_FILENAME);
        std::fs::write(&path, r#"{"env_var_patterns": ["_SECRET"]}"#).unwrap();

        let (config, source) = Config::load_from_dir(dir.path());
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.env_var_patterns, vec!["_SECRET"]);
    }

    #[test]
    fn write_defaults_then_load_round_trips_the_default_lists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(crate::CONFIG_FILENAME);

        assert!(Config::write_defaults(&path));

        let (config, source) = Config::load(&path);
        let defaults = Config::defaults();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.env_var_patterns, defaults.env_var_patterns);
        assert_eq!(config.exclude_file_patterns, defaults.exclude_file_patterns);
        assert_eq!(config.exclude_file_suffixes, defaults.exclude_file_suffixes);
    }

    #[test]
    fn write_defaults_stamps_version_and_timestamp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(crate::CONFIG_FILENAME);

        assert!(Config::write_defaults(&path));

        let (config, _) = Config::load(&path);
        assert_eq!(config.version.as_deref(), Some(env!("CARGO_PKG_VERSION")));

        let stamp = config.gen_timestamp.unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S").is_ok(),
            "unexpected timestamp format: {stamp}"
        );
    }

    #[test]
    fn write_defaults_returns_false_on_unwritable_path() {
        assert!(!Config::write_defaults(Path::new("/nonexistent/dir/.evsecrets.json")));
    }

    #[test]
    fn config_error_includes_path_in_display() {
        let error = ConfigError::Read {
            path: PathBuf::from("/etc/.evsecrets.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(error.to_string().contains("/etc/.evsecrets.json"));
        assert_eq!(error.path(), Some(Path::new("/etc/.evsecrets.json")));
    }
}
