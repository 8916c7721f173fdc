use std::env;

/// Changelog file rewritten in the working directory
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

pub const VERSION_VAR: &str = "WORKFLOW_VERSION";
pub const KOTLIN_VAR: &str = "KOTLIN_CHANGELOG";
pub const SWIFT_VAR: &str = "SWIFT_CHANGELOG";

/// Release inputs supplied by the invoking pipeline.
///
/// Every field defaults to an empty string when its variable is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseNotes {
    /// Version label, substituted verbatim into `## Version {version}`
    pub version: String,
    /// Notes placed under `### Kotlin`
    pub kotlin: String,
    /// Notes placed under `### Swift`
    pub swift: String,
}

impl ReleaseNotes {
    pub fn new(
        version: impl Into<String>,
        kotlin: impl Into<String>,
        swift: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            kotlin: kotlin.into(),
            swift: swift.into(),
        }
    }

    /// Reads `WORKFLOW_VERSION`, `KOTLIN_CHANGELOG` and `SWIFT_CHANGELOG`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the notes from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            version: lookup(VERSION_VAR).unwrap_or_default(),
            kotlin: lookup(KOTLIN_VAR).unwrap_or_default(),
            swift: lookup(SWIFT_VAR).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_reads_all_three_variables() {
        let vars: HashMap<&str, &str> = [
            (VERSION_VAR, "1.2.0"),
            (KOTLIN_VAR, "added X"),
            (SWIFT_VAR, "fixed Y"),
        ]
        .into_iter()
        .collect();

        let notes = ReleaseNotes::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(notes, ReleaseNotes::new("1.2.0", "added X", "fixed Y"));
    }

    #[test]
    fn unset_variables_become_empty() {
        let notes = ReleaseNotes::from_lookup(|key| {
            (key == VERSION_VAR).then(|| "0.9.0".to_string())
        });

        assert_eq!(notes.version, "0.9.0");
        assert!(notes.kotlin.is_empty());
        assert!(notes.swift.is_empty());
    }

    #[test]
    fn notes_are_kept_verbatim() {
        let notes = ReleaseNotes::from_lookup(|key| match key {
            KOTLIN_VAR => Some("  padded  ".to_string()),
            _ => None,
        });

        assert_eq!(notes.kotlin, "  padded  ");
    }
}
