//! Thin HTTP client for the /mcp/search endpoint, used by the ask-brewery CLI

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const NO_ANSWER: &str = "Sorry, I couldn't find an answer.";
pub const FETCH_FAILED: &str = "Sorry, I encountered an issue while fetching that data.";

#[derive(Debug, Deserialize)]
struct SearchReply {
    answer: Option<String>,
    error: Option<String>,
}

/// Ask the server a brewery question. Never fails; every outcome becomes a printable line.
pub async fn ask_state_brewery(client: &reqwest::Client, server_url: &str, query: &str) -> String {
    ask_state_brewery_within(client, server_url, query, REQUEST_TIMEOUT).await
}

/// Same as `ask_state_brewery` with an explicit deadline for the whole exchange
pub async fn ask_state_brewery_within(
    client: &reqwest::Client,
    server_url: &str,
    query: &str,
    deadline: Duration,
) -> String {
    let url = format!("{}/mcp/search", server_url.trim_end_matches('/'));

    match tokio::time::timeout(deadline, send_query(client, &url, query)).await {
        Ok(Ok(reply)) => render_reply(reply),
        Ok(Err(e)) => {
            tracing::warn!("[ASK] Request to {} failed: {}", url, e);
            FETCH_FAILED.to_string()
        }
        Err(_) => {
            tracing::warn!("[ASK] Request to {} timed out", url);
            FETCH_FAILED.to_string()
        }
    }
}

async fn send_query(
    client: &reqwest::Client,
    url: &str,
    query: &str,
) -> Result<SearchReply, reqwest::Error> {
    client
        .post(url)
        .json(&json!({ "query": query }))
        .send()
        .await?
        .error_for_status()?
        .json::<SearchReply>()
        .await
}

fn render_reply(reply: SearchReply) -> String {
    match reply {
        SearchReply {
            answer: Some(answer),
            ..
        } => answer,
        SearchReply {
            error: Some(error), ..
        } => format!("Sorry, something went wrong: {}", error),
        _ => NO_ANSWER.to_string(),
    }
}
