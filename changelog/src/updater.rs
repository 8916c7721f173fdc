use crate::config::ReleaseNotes;
use crate::error::ChangelogError;
use crate::formatter::{MarkdownSectionFormatter, ReleaseSection, SectionFormatter};
use crate::position::{dropped_line, split_document, splice_section};
use crate::regex_utils::has_version_section;
use crate::types::{Result, UpdateReport};
use crate::utils::count_version_sections;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// A changelog file together with the formatter used for new sections
pub struct Changelog {
    path: PathBuf,
    formatter: Box<dyn SectionFormatter>,
}

impl Changelog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            formatter: Box::new(MarkdownSectionFormatter),
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Box<dyn SectionFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole document
    ///
    /// # Errors
    /// Returns `ChangelogError::Read` if the file cannot be read as UTF-8 text
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| ChangelogError::read(&self.path, e))
    }

    /// Overwrites the document in place
    ///
    /// # Errors
    /// Returns `ChangelogError::Write` if the file cannot be written
    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| ChangelogError::write(&self.path, e))
    }

    /// Splices a section for `notes` into `content` without touching the disk
    pub fn render(&self, content: &str, notes: &ReleaseNotes, date: NaiveDate) -> Result<UpdateReport> {
        let section = ReleaseSection::new(notes, date);
        let lines = split_document(content);

        Ok(UpdateReport {
            content: splice_section(content, &self.formatter.format(&section)),
            dropped_line: dropped_line(&lines).map(str::to_string),
            existing_sections: count_version_sections(content),
            duplicate_version: has_version_section(content, &section.version)?,
        })
    }

    /// Read, splice and write back
    ///
    /// # Errors
    /// Returns error if the file cannot be read or written
    pub fn update(&self, notes: &ReleaseNotes, date: NaiveDate) -> Result<UpdateReport> {
        let content = self.read()?;
        let report = self.render(&content, notes, date)?;
        self.write(&report.content)?;
        Ok(report)
    }
}

/// Pure transform used by the updater, with the default Markdown formatter
///
/// # Errors
/// Only fails if the version pattern cannot be compiled
pub fn render_update(content: &str, notes: &ReleaseNotes, date: NaiveDate) -> Result<UpdateReport> {
    Changelog::new(PathBuf::new()).render(content, notes, date)
}

/// Inserts a section dated today into the changelog at `path`.
///
/// # Errors
/// Returns error if the file cannot be read or written
pub fn update_changelog(path: &Path, notes: &ReleaseNotes) -> Result<UpdateReport> {
    update_changelog_on(path, notes, Local::now().date_naive())
}

/// Same as [`update_changelog`] with an explicit date
///
/// # Errors
/// Returns error if the file cannot be read or written
pub fn update_changelog_on(path: &Path, notes: &ReleaseNotes, date: NaiveDate) -> Result<UpdateReport> {
    Changelog::new(path).update(notes, date)
}
