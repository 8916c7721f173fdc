use crate::types::Result;
use regex::Regex;

pub fn build_version_pattern(version: &str) -> Result<Regex> {
    let escaped = regex::escape(version);
    Ok(Regex::new(&format!(r"(?m)^## Version {escaped}\r?$"))?)
}

/// Whether `content` already holds a section for `version`
pub fn has_version_section(content: &str, version: &str) -> Result<bool> {
    Ok(build_version_pattern(version)?.is_match(content))
}
