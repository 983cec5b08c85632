use std::io::Write;

use tracing::debug;

use crate::app::{AppContext, Result};
use crate::domain::FeedEntry;
use crate::launcher;
use crate::render::{Mode, Renderer};

/// Fetch the configured feed and return its entries, newest first.
pub async fn load_entries(ctx: &AppContext) -> Result<Vec<FeedEntry>> {
    let body = ctx.fetcher.fetch(&ctx.config.feed_url).await?;
    let entries = ctx.normalizer.normalize(&body)?;
    debug!(count = entries.len(), url = %ctx.config.feed_url, "loaded entries");
    Ok(entries)
}

/// Print the changelog in compact or verbose form.
pub async fn list_entries(
    ctx: &AppContext,
    pretty: bool,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let entries = load_entries(ctx).await?;

    let renderer = Renderer::new(Mode::from_pretty(pretty))
        .with_color(color)
        .with_title_width(ctx.config.title_width);

    out.write_all(renderer.render(&entries).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Open the entry shown as `id` in the list.
pub async fn open_entry(ctx: &AppContext, id: &str, out: &mut dyn Write) -> Result<()> {
    let entries = load_entries(ctx).await?;
    let entry = launcher::launch(&entries, id, ctx.opener.as_ref())?;

    writeln!(out, "Opening: {}", entry.title)?;
    Ok(())
}
