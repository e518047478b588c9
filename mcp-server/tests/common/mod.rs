//! Shared fixtures for the server integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use brewery_core::{BreweryDirectory, BreweryRecord, FetchError, StateName};
use brewery_mcp_server::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// In-memory directory keyed by lowercase state name
#[derive(Default)]
pub struct StaticDirectory {
    by_state: HashMap<&'static str, Vec<BreweryRecord>>,
    failure: Option<FetchError>,
}

impl StaticDirectory {
    pub fn with_state(mut self, state: &'static str, records: Vec<BreweryRecord>) -> Self {
        self.by_state.insert(state, records);
        self
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }
}

#[async_trait]
impl BreweryDirectory for StaticDirectory {
    async fn fetch_page(
        &self,
        state: &StateName,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<BreweryRecord>, FetchError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let records = self.by_state.get(state.as_str()).cloned().unwrap_or_default();
        let start = ((page - 1) * per_page) as usize;
        Ok(records
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect())
    }
}

pub fn brewery(name: &str, city: Option<&str>, brewery_type: Option<&str>) -> BreweryRecord {
    BreweryRecord {
        name: name.to_string(),
        city: city.map(str::to_string),
        brewery_type: brewery_type.map(str::to_string),
        ..Default::default()
    }
}

/// Three Texas breweries: two micro, one brewpub, across two cities
pub fn texas_directory() -> StaticDirectory {
    StaticDirectory::default().with_state(
        "texas",
        vec![
            brewery("Live Oak", Some("Austin"), Some("micro")),
            brewery("Jester King", Some("Austin"), Some("micro")),
            brewery("Saint Arnold", Some("Houston"), Some("brewpub")),
        ],
    )
}

pub fn app(directory: StaticDirectory) -> Router {
    build_router(AppState::with_directory(Arc::new(directory)))
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
