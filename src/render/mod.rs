//! Plain-text rendering of the sorted entry sequence.
//!
//! Compact mode is a table in the style of `gh issue list`:
//!
//! ```text
//! ID      TITLE                                        UPDATED
//! #0      Copilot code review is generally available   Today
//! #1      Dependabot now groups security updates       1 day ago
//! ```
//!
//! Verbose mode prints every entry with its converted body.

use chrono::{DateTime, Local, TimeZone};
use crossterm::style::Stylize;

use crate::config::DEFAULT_TITLE_WIDTH;
use crate::domain::FeedEntry;
use crate::format::{format_date, format_relative_date_at, html_to_text};

const ID_WIDTH: usize = 6;
const RULE_WIDTH: usize = 40;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compact,
    Verbose,
}

impl Mode {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            Mode::Verbose
        } else {
            Mode::Compact
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    mode: Mode,
    color: bool,
    title_width: usize,
}

impl Renderer {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            color: false,
            title_width: DEFAULT_TITLE_WIDTH,
        }
    }

    /// Emit ANSI styling (underlined headers, green ids) in compact mode.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_title_width(mut self, title_width: usize) -> Self {
        self.title_width = title_width;
        self
    }

    pub fn render(&self, entries: &[FeedEntry]) -> String {
        self.render_at(entries, Local::now())
    }

    /// Render with relative dates measured against `now`.
    pub fn render_at<Tz: TimeZone>(&self, entries: &[FeedEntry], now: DateTime<Tz>) -> String {
        match self.mode {
            Mode::Compact => self.render_compact(entries, now),
            Mode::Verbose => render_verbose(entries),
        }
    }

    fn render_compact<Tz: TimeZone>(&self, entries: &[FeedEntry], now: DateTime<Tz>) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}  {}  {}\n",
            self.header(&format!("{:<width$}", "ID", width = ID_WIDTH)),
            self.header(&format!("{:<width$}", "TITLE", width = self.title_width)),
            self.header("UPDATED"),
        ));

        for (index, entry) in entries.iter().enumerate() {
            let id = format!("#{}", index);
            let padding = " ".repeat(ID_WIDTH.saturating_sub(id.len()));
            let id = if self.color {
                id.green().to_string()
            } else {
                id
            };

            out.push_str(&format!(
                "{}{}  {:<width$}  {}\n",
                id,
                padding,
                truncate(&entry.title, self.title_width),
                format_relative_date_at(&entry.published_at, now.clone()),
                width = self.title_width,
            ));
        }

        out
    }

    fn header(&self, cell: &str) -> String {
        if self.color {
            cell.underlined().to_string()
        } else {
            cell.to_string()
        }
    }
}

fn render_verbose(entries: &[FeedEntry]) -> String {
    let mut out = String::new();

    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{} - {}\n", format_date(&entry.published_at), entry.title));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&html_to_text(entry.display_body()));
        out.push('\n');
        if index + 1 < entries.len() {
            out.push('\n');
        }
    }

    out
}

/// Cut `title` to at most `width` characters, marking the cut with `...`.
pub fn truncate(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return title.to_string();
    }

    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = title.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
