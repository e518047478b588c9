//! Brewery MCP server
//! Exposes brewery question answering over a tool-call boundary, REST tool endpoints,
//! and a JSON-RPC MCP endpoint

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod mcp;
pub mod routes;
pub mod tools;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use app::AppState;
pub use config::ServerConfig;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(routes::health))
        .route("/health", get(routes::health))
        .route("/call", post(routes::call_tool))
        .route("/mcp/search", post(routes::search))
        .route("/tools", get(routes::list_tools))
        .route(
            "/tools/state-brewery-report",
            post(routes::state_brewery_report),
        )
        .route("/mcp", post(mcp::handle_mcp))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
