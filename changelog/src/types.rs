use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Outcome of splicing a release section into a changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// The full document after the update
    pub content: String,
    /// The original line at index 2, which the splice drops
    pub dropped_line: Option<String>,
    /// Number of `## Version` sections present before the update
    pub existing_sections: usize,
    /// Whether a section for the same version was already present
    pub duplicate_version: bool,
}

impl UpdateReport {
    /// True when the dropped line carried text rather than a blank separator
    pub fn dropped_content(&self) -> bool {
        self.dropped_line
            .as_deref()
            .is_some_and(|line| !line.trim().is_empty())
    }
}
