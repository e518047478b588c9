//! Brewery lookup core
//! State extraction, paginated directory fetching, and answer generation shared by the
//! MCP server and its tools

pub mod answer;
pub mod error;
pub mod fetch;
pub mod record;
pub mod report;
pub mod states;

#[cfg(feature = "http")]
pub mod client;

pub use answer::{compose_answer, generate_answer, QueryIntent, MISSING_STATE_ANSWER};
pub use error::FetchError;
pub use fetch::{
    fetch_breweries, BreweryDirectory, FetchOptions, DEFAULT_PAGE_SIZE, MAX_PAGES, REPORT_PAGE_SIZE,
};
pub use record::BreweryRecord;
pub use report::{
    build_report, render_top_breweries, top_breweries, BreweryReport, BrewerySummary,
    TOP_BREWERIES_LIMIT,
};
pub use states::{extract_state, StateName, US_STATES};

#[cfg(feature = "http")]
pub use client::{BreweryClient, DEFAULT_API_URL};
