pub mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

use crate::app::Result;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "gh-changelog", version)]
#[command(about = "Read the GitHub changelog from the terminal", long_about = None)]
pub struct Cli {
    /// Show full content with formatted body
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Read this feed instead of the configured one
    #[arg(long, global = true)]
    pub feed_url: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a changelog entry in the default browser
    Open {
        /// Entry ID from the list, e.g. "#3" or "3"
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(feed_url) = &self.feed_url {
            Url::parse(feed_url)?;
            config.feed_url = feed_url.clone();
        }

        Ok(config)
    }

    /// Colors are used only on a terminal, and never when `--no-color` or
    /// `NO_COLOR` is set.
    pub fn use_color(&self) -> bool {
        !self.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal()
    }
}
