use std::collections::BTreeMap;

/// An immutable snapshot of environment-variable names and values.
///
/// The live process environment is global mutable state; capturing it into a
/// sorted map once per run keeps the resolver deterministic and lets tests
/// inject a synthetic environment instead of mutating the real one.
pub type EnvSnapshot = BTreeMap<String, String>;

/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped; they cannot
/// participate in substring matching against UTF-8 file content anyway.
#[must_use]
pub fn snapshot() -> EnvSnapshot {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Returns the environment-variable names matching any configured pattern.
///
/// Matching is plain substring containment, case-sensitive. A name matching
/// several patterns appears exactly once; the result is lexicographically
/// sorted.
#[must_use]
pub fn secret_env_var_names(patterns: &[String], env: &EnvSnapshot) -> Vec<String> {
    env.keys()
        .filter(|name| patterns.iter().any(|pattern| name.contains(pattern.as_str())))
        .cloned()
        .collect()
}

/// Resolves each name to its value in the snapshot, preserving input order.
///
/// A name with no value yields `None` rather than an error. Callers must skip
/// absent (and empty) values before using them as match targets: the empty
/// string is a substring of every line.
#[must_use]
pub fn resolve_values<'a>(names: &[String], env: &'a EnvSnapshot) -> Vec<Option<&'a str>> {
    names.iter().map(|name| env.get(name).map(String::as_str)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    fn patterns_of(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn names_match_by_substring_containment() {
        let env = env_of(&[("KAGGLE_KEY", "x"), ("HOME", "/root"), ("SOME_URL", "y")]);
        let names = secret_env_var_names(&patterns_of(&["_KEY", "_URL"]), &env);
        assert_eq!(names, vec!["KAGGLE_KEY", "SOME_URL"]);
    }

    #[test]
    fn name_matching_multiple_patterns_appears_once() {
        let env = env_of(&[("DB_KEY_URL", "x")]);
        let names = secret_env_var_names(&patterns_of(&["_KEY", "_URL"]), &env);
        assert_eq!(names, vec!["DB_KEY_URL"]);
    }

    #[test]
    fn names_are_lexicographically_sorted() {
        let env = env_of(&[("Z_KEY", "1"), ("A_KEY", "2"), ("M_KEY", "3")]);
        let names = secret_env_var_names(&patterns_of(&["_KEY"]), &env);
        assert_eq!(names, vec!["A_KEY", "M_KEY", "Z_KEY"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let env = env_of(&[("kaggle_key", "x"), ("KAGGLE_KEY", "y")]);
        let names = secret_env_var_names(&patterns_of(&["_KEY"]), &env);
        assert_eq!(names, vec!["KAGGLE_KEY"]);
    }

    #[test]
    fn no_patterns_match_nothing() {
        let env = env_of(&[("KAGGLE_KEY", "x")]);
        assert!(secret_env_var_names(&[], &env).is_empty());
    }

    #[test]
    fn resolve_preserves_input_order() {
        let env = env_of(&[("A_KEY", "1"), ("B_KEY", "2")]);
        let names = patterns_of(&["B_KEY", "A_KEY"]);
        let values = resolve_values(&names, &env);
        assert_eq!(values, vec![Some("2"), Some("1")]);
    }

    #[test]
    fn resolve_yields_none_for_absent_names() {
        let env = env_of(&[("A_KEY", "1")]);
        let names = patterns_of(&["A_KEY", "MISSING_KEY"]);
        assert_eq!(resolve_values(&names, &env), vec![Some("1"), None]);
    }

    #[test]
    fn resolve_keeps_empty_values_for_caller_to_skip() {
        let env = env_of(&[("EMPTY_KEY", "")]);
        let names = patterns_of(&["EMPTY_KEY"]);
        assert_eq!(resolve_values(&names, &env), vec![Some("")]);
    }

    #[test]
    fn snapshot_contains_live_variables() {
        // PATH is about the only variable safe to assume in any test runner.
        if std::env::var_os("PATH").is_some() {
            assert!(snapshot().contains_key("PATH"));
        }
    }
}
