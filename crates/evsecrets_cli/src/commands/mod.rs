//! CLI command handlers.

/// Listing of the filtered, sorted scannable file set.
pub mod files;
/// Creation of the default `.evsecrets.json` configuration file.
pub mod init;
/// The scan itself: filtered files x resolved secret values.
pub mod scan;
/// Listing of environment-variable names matched by the patterns.
pub mod secrets;
/// Listing of the raw, unfiltered directory walk.
pub mod walk;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;
