use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::db::Storage;
use crate::generation::TextGenerator;
use crate::rate_limit::GenerationRateLimiter;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn Storage>,
    /// `None` when no API key is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub newsletter_limiter: GenerationRateLimiter,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn Storage>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        let newsletter_limiter =
            GenerationRateLimiter::new(config.newsletter_rate_limit, Duration::from_secs(60));
        Self {
            config,
            store,
            generator,
            newsletter_limiter,
        }
    }
}
