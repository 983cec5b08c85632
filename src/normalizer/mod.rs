use std::cmp::Reverse;

use html_escape::decode_html_entities;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use tracing::debug;

use crate::app::{ChangelogError, Result};
use crate::domain::FeedEntry;

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawItem {
    title: String,
    link: String,
    #[serde(rename = "pubDate")]
    pub_date: String,
    description: String,
    /// `content:encoded`; the deserializer matches local names only.
    #[serde(rename = "encoded")]
    content: String,
}

impl From<RawItem> for FeedEntry {
    fn from(raw: RawItem) -> Self {
        let non_empty = |s: String| if s.trim().is_empty() { None } else { Some(s) };

        FeedEntry {
            title: decode_html_entities(&raw.title).to_string(),
            link: non_empty(raw.link),
            published_at: raw.pub_date,
            summary: raw.description,
            body: non_empty(raw.content),
        }
    }
}

/// Decodes an RSS 2.0 changelog document into entries, newest first.
#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, body: &[u8]) -> Result<Vec<FeedEntry>> {
        let root = root_element(body)?;
        if root != "rss" {
            return Err(ChangelogError::FeedParse(format!(
                "expected <rss> root element, found <{}>",
                root
            )));
        }

        let document: RssDocument = quick_xml::de::from_reader(body)
            .map_err(|e| ChangelogError::FeedParse(e.to_string()))?;

        let mut entries: Vec<FeedEntry> = document
            .channel
            .items
            .into_iter()
            .map(FeedEntry::from)
            .collect();

        for entry in entries.iter().filter(|e| e.published().is_none()) {
            debug!(title = %entry.title, published_at = %entry.published_at, "unparseable publish date");
        }

        sort_newest_first(&mut entries);
        debug!(count = entries.len(), "normalized feed");

        Ok(entries)
    }
}

/// Local name of the document's first element.
fn root_element(body: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(ChangelogError::FeedParse(
                    "document has no root element".to_string(),
                ));
            }
            Err(e) => return Err(ChangelogError::FeedParse(e.to_string())),
            Ok(_) => {}
        }
        buf.clear();
    }
}

/// Stable sort by publish date, newest first. Entries whose date cannot be
/// parsed keep their document order at the end.
pub fn sort_newest_first(entries: &mut [FeedEntry]) {
    entries.sort_by_cached_key(|entry| Reverse(entry.published()));
}
