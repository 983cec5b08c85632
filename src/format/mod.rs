//! Text formatting helpers shared by the renderer.
//!
//! - [`date`]: absolute and relative publish dates
//! - [`html`]: HTML fragment to plain text conversion

pub mod date;
pub mod html;

pub use date::{format_date, format_relative_date, format_relative_date_at, parse_date};
pub use html::html_to_text;
