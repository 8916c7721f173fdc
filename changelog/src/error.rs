use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when updating a changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write changelog file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { path, source } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                format!("Could not write {}: {source}", path.display())
            }
            Self::RegexError(e) => format!("Regular expression error: {e}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
