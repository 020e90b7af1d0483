//! Core engine for the evsecrets environment-variable leak scanner.
//!
//! evsecrets finds known secret *values* - the current values of environment
//! variables whose names match configured patterns - inside the files of a
//! codebase. It is not a pattern-based secret detector: matching is plain
//! substring containment against values pulled from the live environment.
//!
//! # Main Types
//!
//! - [`SecretScanner`] - Orchestrates walking, filtering, and matching
//! - [`Config`] - Three exclusion/pattern lists loaded from `.evsecrets.json`
//! - [`PathFilter`] - Decides per path whether a file is eligible for scanning
//! - [`DotEnvFile`] - Read-only view of a local `.env` file
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for the typed [`ConfigError`]. The scanning
//! pipeline itself has no fatal error class: missing configuration falls back
//! to built-in defaults (observably, via [`ConfigSource`]) and unreadable
//! filesystem entries are skipped rather than collected. The CLI crate
//! (`evsecrets_cli`) uses `anyhow` for error propagation.

/// User configuration loaded from `.evsecrets.json`.
pub mod config;
/// Read-only parsing of local `.env` files.
pub mod dotenv;
/// Resolution of secret candidates from an environment snapshot.
pub mod env;
/// Path eligibility rules built from the configured exclusion lists.
pub mod filter;
/// Filesystem helpers for atomic writes and tolerant text reads.
pub mod fs_util;
/// Common re-exports for internal use.
pub mod prelude;
/// The scan orchestrator that cross-products files and secret values.
pub mod scanner;
/// Recursive regular-file enumeration with optional directory pruning.
pub mod walker;

pub use config::{Config, ConfigError, ConfigSource};
pub use dotenv::DotEnvFile;
pub use env::{EnvSnapshot, resolve_values, secret_env_var_names, snapshot};
pub use filter::PathFilter;
pub use scanner::SecretScanner;
pub use walker::walk_files;

/// Default filename for evsecrets configuration.
pub const CONFIG_FILENAME: &str = ".evsecrets.json";

/// Default filename for the optional dotenv source.
pub const DOTENV_FILENAME: &str = ".env";
