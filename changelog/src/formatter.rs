use chrono::{Local, NaiveDate};

use crate::config::ReleaseNotes;

const DATE_FORMAT: &str = "_%Y-%m-%d_";

// --- Traits ---

pub trait SectionFormatter: Send + Sync {
    fn format(&self, section: &ReleaseSection) -> Vec<String>;
}

/// One release entry, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSection {
    pub version: String,
    pub date: NaiveDate,
    pub kotlin: String,
    pub swift: String,
}

impl ReleaseSection {
    /// Builds a section from the raw notes, trimming each block
    pub fn new(notes: &ReleaseNotes, date: NaiveDate) -> Self {
        Self {
            version: notes.version.clone(),
            date,
            kotlin: notes.kotlin.trim().to_string(),
            swift: notes.swift.trim().to_string(),
        }
    }

    pub fn for_today(notes: &ReleaseNotes) -> Self {
        Self::new(notes, Local::now().date_naive())
    }

    /// Date stamp in the `_YYYY-MM-DD_` form
    pub fn date_stamp(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

// Section Formatter (Markdown)
#[derive(Debug, Clone, Default)]
pub struct MarkdownSectionFormatter;

impl SectionFormatter for MarkdownSectionFormatter {
    fn format(&self, section: &ReleaseSection) -> Vec<String> {
        vec![
            String::new(),
            format!("## Version {}", section.version),
            String::new(),
            section.date_stamp(),
            String::new(),
            "### Kotlin".to_string(),
            String::new(),
            section.kotlin.clone(),
            String::new(),
            "### Swift".to_string(),
            String::new(),
            section.swift.clone(),
            String::new(),
        ]
    }
}
