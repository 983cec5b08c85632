use chrono::{DateTime, FixedOffset};

use crate::format::date::parse_date;

/// One changelog item as decoded from the feed.
///
/// Entries are built once per fetch and never mutated afterwards. Their
/// position in the sorted sequence doubles as the display index used by
/// `open`, so that index is only meaningful within a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: Option<String>,
    /// Raw timestamp exactly as it appeared in the document.
    pub published_at: String,
    pub summary: String,
    pub body: Option<String>,
}

impl FeedEntry {
    pub fn new(title: impl Into<String>, published_at: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            published_at: published_at.into(),
            summary: String::new(),
            body: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Parsed publish date, or `None` when the raw timestamp is malformed.
    pub fn published(&self) -> Option<DateTime<FixedOffset>> {
        parse_date(&self.published_at)
    }

    /// Get the best available content for display
    pub fn display_body(&self) -> &str {
        match &self.body {
            Some(body) => body,
            None => &self.summary,
        }
    }
}
