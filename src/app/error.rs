use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("ID #{id} is out of range (0-{})", .len.saturating_sub(1))]
    OutOfRange { id: i64, len: usize },

    #[error("No changelog entries available")]
    NoEntries,

    #[error("No link available for item #{0}")]
    NoLink(usize),

    #[error("Failed to open browser: {0}")]
    Launch(#[source] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ChangelogError {
    /// Lookup and launch failures only abort the `open` command; everything
    /// else aborts the whole run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::InvalidId(_)
                | Self::OutOfRange { .. }
                | Self::NoEntries
                | Self::NoLink(_)
                | Self::Launch(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChangelogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ChangelogError::OutOfRange { id: 12, len: 10 };
        assert_eq!(err.to_string(), "ID #12 is out of range (0-9)");
    }

    #[test]
    fn test_lookup_errors_are_not_fatal() {
        assert!(!ChangelogError::InvalidId("abc".into()).is_fatal());
        assert!(!ChangelogError::NoLink(3).is_fatal());
        assert!(ChangelogError::FeedParse("bad".into()).is_fatal());
    }
}
