use std::sync::Arc;

use brewery_core::{BreweryDirectory, FetchOptions};

use crate::config::ServerConfig;

/// Shared by every request; holds no per-request data
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn BreweryDirectory>,
    /// Paging for question answering
    pub query_options: FetchOptions,
    /// Paging for the full state report
    pub report_options: FetchOptions,
}

impl AppState {
    pub fn new(directory: Arc<dyn BreweryDirectory>, config: &ServerConfig) -> Self {
        Self {
            directory,
            query_options: FetchOptions::new(config.page_size, config.max_pages),
            report_options: FetchOptions::new(config.report_page_size, config.max_pages),
        }
    }

    /// Default paging, used by tests and embedders without a config
    pub fn with_directory(directory: Arc<dyn BreweryDirectory>) -> Self {
        Self {
            directory,
            query_options: FetchOptions::default(),
            report_options: FetchOptions::report(),
        }
    }
}
