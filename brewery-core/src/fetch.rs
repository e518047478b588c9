//! Paginated fetch-until-empty over a brewery directory

use async_trait::async_trait;

use crate::{BreweryRecord, FetchError, StateName};

/// Hard ceiling on page requests per fetch
pub const MAX_PAGES: u32 = 20;

/// Page size used by the question-answering endpoint
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Page size used by the full state report
pub const REPORT_PAGE_SIZE: u32 = 200;

/// Source of brewery listing pages
#[async_trait]
pub trait BreweryDirectory: Send + Sync {
    /// Fetch one page (1-based) of breweries for a state. An empty page ends the listing.
    async fn fetch_page(
        &self,
        state: &StateName,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<BreweryRecord>, FetchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub per_page: u32,
    pub max_pages: u32,
}

impl FetchOptions {
    /// max_pages is clamped to MAX_PAGES
    pub fn new(per_page: u32, max_pages: u32) -> Self {
        Self {
            per_page,
            max_pages: max_pages.min(MAX_PAGES),
        }
    }

    pub fn report() -> Self {
        Self::new(REPORT_PAGE_SIZE, MAX_PAGES)
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, MAX_PAGES)
    }
}

/// Fetch every brewery in a state, stopping on the first empty page or at the page ceiling
pub async fn fetch_breweries<D>(
    directory: &D,
    state: &StateName,
    options: &FetchOptions,
) -> Result<Vec<BreweryRecord>, FetchError>
where
    D: BreweryDirectory + ?Sized,
{
    tracing::info!("[FETCH] Fetching brewery data for state: {}", state.as_str());

    let max_pages = options.max_pages.min(MAX_PAGES);
    let mut breweries = Vec::new();

    for page in 1..=max_pages {
        let batch = directory
            .fetch_page(state, page, options.per_page)
            .await
            .map_err(|e| {
                tracing::error!("[FETCH] Page {} for {} failed: {}", page, state.as_str(), e);
                e
            })?;

        tracing::debug!("[FETCH] Page {} returned {} breweries", page, batch.len());

        if batch.is_empty() {
            break;
        }
        breweries.extend(batch);

        if page == max_pages {
            tracing::warn!(
                "[FETCH] Reached page ceiling ({}) for {}; result may be truncated",
                max_pages,
                state.as_str()
            );
        }
    }

    tracing::info!("[FETCH] ✓ {} breweries for {}", breweries.len(), state.as_str());
    Ok(breweries)
}
