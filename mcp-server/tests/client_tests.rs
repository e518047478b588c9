/// ask-brewery client behaviour against a mocked server and a live router
mod common;

use std::time::Duration;

use brewery_mcp_server::client::{
    ask_state_brewery, ask_state_brewery_within, FETCH_FAILED, NO_ANSWER,
};
use common::{app, texas_directory};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_query_and_prints_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mcp/search"))
        .and(body_json(json!({"query": "How many breweries in Ohio?"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"answer": "There are 12 breweries in Ohio."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let answer = ask_state_brewery(
        &reqwest::Client::new(),
        &server.uri(),
        "How many breweries in Ohio?",
    )
    .await;

    assert_eq!(answer, "There are 12 breweries in Ohio.");
}

#[tokio::test]
async fn error_field_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mcp/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "bad input"})))
        .mount(&server)
        .await;

    let answer = ask_state_brewery(&reqwest::Client::new(), &server.uri(), "Ohio").await;
    assert_eq!(answer, "Sorry, something went wrong: bad input");
}

#[tokio::test]
async fn empty_reply_has_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mcp/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let answer = ask_state_brewery(&reqwest::Client::new(), &server.uri(), "Ohio").await;
    assert_eq!(answer, NO_ANSWER);
}

#[tokio::test]
async fn http_failure_is_apologised_for() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mcp/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let answer = ask_state_brewery(&reqwest::Client::new(), &server.uri(), "Ohio").await;
    assert_eq!(answer, FETCH_FAILED);
}

#[tokio::test]
async fn slow_server_hits_http_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mcp/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"answer": "late"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let answer = ask_state_brewery(&client, &server.uri(), "Ohio").await;
    assert_eq!(answer, FETCH_FAILED);
}

#[tokio::test]
async fn slow_server_hits_request_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mcp/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"answer": "late"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    // no client-level timeout, so only the deadline can end the wait
    let answer = ask_state_brewery_within(
        &reqwest::Client::new(),
        &server.uri(),
        "Ohio",
        Duration::from_millis(100),
    )
    .await;
    assert_eq!(answer, FETCH_FAILED);
}

#[tokio::test]
async fn round_trip_through_live_router() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(texas_directory())).await.unwrap();
    });

    let answer = ask_state_brewery(
        &reqwest::Client::new(),
        &format!("http://{}/", addr),
        "What types of breweries are in Texas?",
    )
    .await;

    assert_eq!(answer, "Brewery types in Texas: micro (2), brewpub (1).");
}
