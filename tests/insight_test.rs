use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use axum_test::TestServer;
use serde_json::{json, Value};

use docsight::services::llm::LlmClient;
use docsight::{modules, AppState};

async fn spawn_provider(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn completion_with(content: &str) -> Value {
    json!({"choices": [{"message": {"content": content}}]})
}

fn setup_test_server(provider_url: String) -> TestServer {
    let state = AppState {
        llm: LlmClient::with_base_url(provider_url, Some("test-key".to_string())),
    };

    let app = Router::new()
        .merge(modules::insight::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn insight_request() -> Value {
    json!({
        "schema": "orders(id INT, total DOUBLE, created_at DATE)",
        "messages": [{"role": "user", "content": "Analyze this dataset"}]
    })
}

#[tokio::test]
async fn test_insight_returns_query_turn() {
    let provider = spawn_provider(
        StatusCode::OK,
        completion_with(
            r#"{"action":"query","sql":"SELECT count(*) FROM orders","reasoning":"row count"}"#,
        ),
    )
    .await;
    let server = setup_test_server(provider);

    let response = server.post("/api/insight").json(&insight_request()).await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({
        "action": "query",
        "sql": "SELECT count(*) FROM orders",
        "reasoning": "row count"
    }));
}

#[tokio::test]
async fn test_insight_strips_code_fences() {
    let provider = spawn_provider(
        StatusCode::OK,
        completion_with(
            "```\n{\"action\":\"query\",\"sql\":\"SELECT count(*) FROM t\",\"reasoning\":\"row count\"}\n```",
        ),
    )
    .await;
    let server = setup_test_server(provider);

    let response = server.post("/api/insight").json(&insight_request()).await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({
        "action": "query",
        "sql": "SELECT count(*) FROM t",
        "reasoning": "row count"
    }));
}

#[tokio::test]
async fn test_insight_returns_final_insights() {
    let provider = spawn_provider(
        StatusCode::OK,
        completion_with(
            r#"{"action":"insight","summary":"Orders grew steadily","insights":[{"title":"Growth","description":"Orders up 40% quarter over quarter","type":"trend","priority":"high"}]}"#,
        ),
    )
    .await;
    let server = setup_test_server(provider);

    let response = server.post("/api/insight").json(&insight_request()).await;

    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["action"], "insight");
    assert_eq!(body["summary"], "Orders grew steadily");
    assert_eq!(body["insights"].as_array().unwrap().len(), 1);
    assert_eq!(body["insights"][0]["priority"], "high");
}

#[tokio::test]
async fn test_insight_accepts_empty_insight_list() {
    let provider = spawn_provider(
        StatusCode::OK,
        completion_with(r#"{"action":"insight","summary":"s","insights":[]}"#),
    )
    .await;
    let server = setup_test_server(provider);

    let response = server.post("/api/insight").json(&insight_request()).await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({"action": "insight", "summary": "s", "insights": []}));
}

#[tokio::test]
async fn test_insight_unknown_action_is_internal_error() {
    let provider =
        spawn_provider(StatusCode::OK, completion_with(r#"{"action":"bogus"}"#)).await;
    let server = setup_test_server(provider);

    let response = server.post("/api/insight").json(&insight_request()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_insight_query_missing_fields_is_internal_error() {
    let provider = spawn_provider(
        StatusCode::OK,
        completion_with(r#"{"action":"query","reasoning":"no sql"}"#),
    )
    .await;
    let server = setup_test_server(provider);

    let response = server.post("/api/insight").json(&insight_request()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("sql"));
}

#[tokio::test]
async fn test_insight_missing_schema_fails() {
    let provider = spawn_provider(StatusCode::OK, completion_with("{}")).await;
    let server = setup_test_server(provider);

    let response = server
        .post("/api/insight")
        .json(&json!({
            "messages": [{"role": "user", "content": "Analyze"}]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Missing schema"}));
}

#[tokio::test]
async fn test_insight_missing_messages_fails() {
    let provider = spawn_provider(StatusCode::OK, completion_with("{}")).await;
    let server = setup_test_server(provider);

    let response = server
        .post("/api/insight")
        .json(&json!({"schema": "orders(id INT)"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Missing messages"}));
}

#[tokio::test]
async fn test_insight_provider_error_becomes_bad_gateway() {
    let provider = spawn_provider(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"error": "upstream overloaded"}),
    )
    .await;
    let server = setup_test_server(provider);

    let response = server.post("/api/insight").json(&insight_request()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("503"));
    assert!(message.contains("upstream overloaded"));
}
