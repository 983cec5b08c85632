use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::launcher::{Opener, SystemOpener};
use crate::normalizer::Normalizer;

/// Everything one invocation needs: configuration plus the network and
/// browser collaborators.
pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
    pub opener: Arc<dyn Opener + Send + Sync>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(config.timeout())?);
        Ok(Self::with_parts(config, fetcher, Arc::new(SystemOpener)))
    }

    pub fn with_parts(
        config: Config,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        opener: Arc<dyn Opener + Send + Sync>,
    ) -> Self {
        Self {
            config,
            fetcher,
            normalizer: Normalizer::new(),
            opener,
        }
    }
}
