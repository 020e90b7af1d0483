//! Convenience re-exports of the most commonly used types.

pub use crate::config::{Config, ConfigError, ConfigSource};
pub use crate::dotenv::DotEnvFile;
pub use crate::env::EnvSnapshot;
pub use crate::filter::PathFilter;
pub use crate::scanner::SecretScanner;
