use anyhow::Result;
use brewery_mcp_server::client::{ask_state_brewery, DEFAULT_SERVER_URL};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        eprintln!("Usage: ask-brewery <question about breweries in a U.S. state>");
        std::process::exit(2);
    }

    let server_url =
        std::env::var("BREWERY_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

    let client = reqwest::Client::new();
    let answer = ask_state_brewery(&client, &server_url, &query).await;
    println!("{}", answer);

    Ok(())
}
