//! Resolves a display index back to an entry and opens its link.
//!
//! Display indices are positions in the sorted entry sequence of the current
//! invocation. They are not stable identifiers: a new fetch can shift them.

use tracing::info;

use crate::app::{ChangelogError, Result};
use crate::domain::FeedEntry;

/// Hands a URL to whatever the host uses to open links.
pub trait Opener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Opens links with the platform default handler without waiting for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that_detached(url)
    }
}

/// Parse an id token such as `#3` or `3`.
///
/// Negative numbers parse here and are rejected by the bounds check.
pub fn parse_id(token: &str) -> Result<i64> {
    let trimmed = token.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    digits
        .parse::<i64>()
        .map_err(|_| ChangelogError::InvalidId(digits.to_string()))
}

/// Resolve an id token to its index and entry.
pub fn resolve<'a>(entries: &'a [FeedEntry], token: &str) -> Result<(usize, &'a FeedEntry)> {
    let id = parse_id(token)?;

    if entries.is_empty() {
        return Err(ChangelogError::NoEntries);
    }

    let index = usize::try_from(id)
        .ok()
        .filter(|&index| index < entries.len())
        .ok_or(ChangelogError::OutOfRange {
            id,
            len: entries.len(),
        })?;

    Ok((index, &entries[index]))
}

/// Resolve `token` and open the entry's link.
///
/// The opener is only called once the index and link have both checked out.
pub fn launch<'a>(
    entries: &'a [FeedEntry],
    token: &str,
    opener: &dyn Opener,
) -> Result<&'a FeedEntry> {
    let (index, entry) = resolve(entries, token)?;
    let link = entry.link.as_deref().ok_or(ChangelogError::NoLink(index))?;

    opener.open(link).map_err(ChangelogError::Launch)?;
    info!(index, link, "opened entry");

    Ok(entry)
}
