use std::sync::Arc;

use anyhow::Result;
use brewery_core::BreweryClient;
use brewery_mcp_server::{build_router, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║            Brewery MCP Server (State Lookups)              ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    let config = ServerConfig::from_env()?;
    let directory = BreweryClient::new(config.api_url.clone(), config.timeout)?;
    let state = AppState::new(Arc::new(directory), &config);

    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("[INIT] Server configuration:");
    println!("🍺 Brewery API: {}", config.api_url);
    println!(
        "📄 Page size: {} (reports: {}), max pages: {}, timeout: {}s\n",
        config.page_size,
        config.report_page_size,
        config.max_pages,
        config.timeout.as_secs()
    );

    println!("✓ Brewery MCP Server running on http://{}", addr);
    println!("  GET  /test, /health                — Liveness check");
    println!("  POST /call                         — Tool call (X-MCP-HANDSHAKE for descriptor)");
    println!("  POST /mcp/search                   — Ask a brewery question");
    println!("  GET  /tools                        — List all tools");
    println!("  POST /tools/state-brewery-report   — Full state report");
    println!("  POST /mcp                          — MCP protocol endpoint\n");

    axum::serve(listener, app).await?;

    Ok(())
}
