//! Inserts dated release sections into a project changelog.
//!
//! The document keeps its two-line header; a new `## Version` section with
//! Kotlin and Swift notes goes directly beneath it.

pub mod config;
pub mod error;
pub mod formatter;
pub mod position;
pub mod regex_utils;
pub mod types;
pub mod updater;
pub mod utils;

pub use crate::config::{CHANGELOG_FILE, ReleaseNotes};
pub use crate::error::ChangelogError;
pub use crate::formatter::{MarkdownSectionFormatter, ReleaseSection, SectionFormatter};
pub use crate::position::splice_section;
pub use crate::types::{Result, UpdateReport};
pub use crate::updater::{Changelog, render_update, update_changelog, update_changelog_on};
