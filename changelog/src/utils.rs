use once_cell::sync::Lazy;
use regex::Regex;

pub static VERSION_SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^## Version (.*)$").expect("Failed to compile version section regex")
});

/// Counts the `## Version` headers in a document
pub fn count_version_sections(content: &str) -> usize {
    VERSION_SECTION_PATTERN.find_iter(content).count()
}
