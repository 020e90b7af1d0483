use std::collections::BTreeMap;
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Read-only view of a dotenv-style file.
///
/// A `.env` file can hold name/value pairs, including secrets, in ecosystems
/// that prefer a local file over the process environment. evsecrets reads it
/// only as a diagnostic source; parsed values are *not* merged into the
/// environment snapshot used for scanning.
#[derive(Debug, Clone, Default)]
pub struct DotEnvFile {
    exists: bool,
    vars: BTreeMap<String, String>,
}

impl DotEnvFile {
    /// Reads and parses the file at `path`.
    ///
    /// Never fails: on any read error the result is empty with
    /// [`DotEnvFile::exists`] returning `false`.
    #[must_use]
    pub fn read(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self {
                exists: true,
                vars: Self::parse(&content),
            },
            Err(_error) => {
                #[cfg(feature = "tracing")]
                debug!(path = %path.display(), error = %_error, "no readable dotenv file");
                Self::default()
            }
        }
    }

    /// Parses dotenv content into a name/value map.
    ///
    /// Per non-blank, non-comment (`#` or `//` prefix) line: split on the
    /// first `=`, trim both sides, then unwrap one layer of double quotes and
    /// one layer of single quotes, in that order. Lines without an `=` after
    /// a non-empty name portion are ignored.
    #[must_use]
    pub fn parse(content: &str) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }

            let Some((name_part, value_part)) = trimmed.split_once('=') else {
                continue;
            };

            let name = name_part.trim();
            if name.is_empty() {
                continue;
            }

            let value = strip_quotes(strip_quotes(value_part.trim(), '"'), '\'');
            vars.insert(name.to_string(), value.to_string());
        }

        vars
    }

    /// Returns `true` if the file was present and readable.
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.exists
    }

    /// Looks up the value parsed for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns the distinct parsed names in lexicographic order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.vars.keys().cloned().collect()
    }

    /// Returns the full name/value map.
    #[must_use]
    pub const fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

/// Strips one leading `quote` and, if present, one matching trailing quote.
///
/// An unterminated leading quote is still stripped; the two quote characters
/// are handled by independent passes, so `"abc"` unwraps exactly once.
fn strip_quotes(value: &str, quote: char) -> &str {
    match value.strip_prefix(quote) {
        Some(rest) => rest.strip_suffix(quote).unwrap_or(rest),
        None => value,
    }
}
