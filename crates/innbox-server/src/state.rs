//! Shared application state.

use std::sync::Arc;

use innbox_core::InnboxConfig;
use innbox_keywords::KeywordRanker;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: InnboxConfig,
    pub ranker: Arc<dyn KeywordRanker>,
}

impl AppState {
    pub fn new(config: InnboxConfig, ranker: Arc<dyn KeywordRanker>) -> Self {
        Self { config, ranker }
    }
}
