//! Server configuration from environment variables (after .env is loaded)

use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};
use brewery_core::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE, MAX_PAGES, REPORT_PAGE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub page_size: u32,
    pub report_page_size: u32,
    pub max_pages: u32,
    /// Applied to every upstream page request
    pub timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&get, "PORT", 3000u16)?;
        let api_url = get("BREWERY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let page_size = parse_var(&get, "BREWERY_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let report_page_size = parse_var(&get, "BREWERY_REPORT_PAGE_SIZE", REPORT_PAGE_SIZE)?;
        let max_pages = parse_var(&get, "BREWERY_MAX_PAGES", MAX_PAGES)?;
        let timeout_secs = parse_var(&get, "BREWERY_TIMEOUT_SECS", 10u64)?;

        if page_size == 0 || report_page_size == 0 {
            return Err(anyhow!("Brewery page sizes must be greater than zero"));
        }
        if max_pages == 0 {
            return Err(anyhow!("BREWERY_MAX_PAGES must be greater than zero"));
        }
        if max_pages > MAX_PAGES {
            tracing::warn!(
                "[CONFIG] BREWERY_MAX_PAGES={} exceeds the ceiling, using {}",
                max_pages,
                MAX_PAGES
            );
        }
        if timeout_secs == 0 {
            return Err(anyhow!("BREWERY_TIMEOUT_SECS must be greater than zero"));
        }

        Ok(Self {
            host,
            port,
            api_url,
            page_size,
            report_page_size,
            max_pages: max_pages.min(MAX_PAGES),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(get: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T> {
    match get(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow!("{} must be a number, got '{}'", name, raw)),
        None => Ok(default),
    }
}
