//! File and CSV tool tests driven through the HTTP surface.

use std::fs;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use mr_mcp::core::{Config, McpServer, build_router};

fn test_app() -> (TempDir, Router) {
    let root = TempDir::new().unwrap();
    let mut config = Config::default();
    config.security.root_path = root.path().to_path_buf();
    let server = McpServer::new(config).unwrap();
    (root, build_router(server, false))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn call_tool(app: Router, tool: &str, input: Value) -> (StatusCode, Value) {
    post_json(app, "/tools/call", json!({ "tool": tool, "input": input })).await
}

#[tokio::test]
async fn write_then_read_round_trips_content() {
    let (_root, app) = test_app();
    let content = "Zażółć gęślą jaźń\nline two\n";

    let (status, body) = call_tool(
        app.clone(),
        "write_file",
        json!({ "path": "notes/today.txt", "content": content }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"]["success"], true);
    assert_eq!(body["output"]["path"], "notes/today.txt");

    let (status, body) = call_tool(
        app,
        "read_file",
        json!({ "path": "notes/today.txt" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"]["content"], content);
}

#[tokio::test]
async fn list_files_defaults_to_root() {
    let (root, app) = test_app();
    fs::write(root.path().join("b.txt"), "").unwrap();
    fs::write(root.path().join("a.txt"), "").unwrap();

    let (status, body) = call_tool(app, "list_files", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"]["files"], json!(["a.txt", "b.txt"]));
}

#[tokio::test]
async fn parses_csv_file() {
    let (root, app) = test_app();
    fs::write(root.path().join("test.csv"), "Name,Age\nAlice,30\nBob,25").unwrap();

    let (status, body) = call_tool(app, "parse_csv", json!({ "path": "test.csv" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"]["headers"], json!(["Name", "Age"]));
    assert_eq!(
        body["output"]["rows"],
        json!([
            { "Name": "Alice", "Age": "30" },
            { "Name": "Bob", "Age": "25" }
        ])
    );
}

#[tokio::test]
async fn analyzes_numeric_column() {
    let (root, app) = test_app();
    fs::write(
        root.path().join("ages.csv"),
        "Age\n25\n30\n35\n25\n35",
    )
    .unwrap();

    let (status, body) = call_tool(
        app,
        "analyze_data",
        json!({ "path": "ages.csv", "column": "Age" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let output = &body["output"];
    assert_eq!(output["count"], 5);
    assert_eq!(output["numericCount"], 5);
    assert_eq!(output["min"], 25.0);
    assert_eq!(output["max"], 35.0);
    assert_eq!(output["sum"], 150.0);
    assert_eq!(output["average"], 30.0);
    assert_eq!(output["median"], 30.0);
}

#[tokio::test]
async fn analyze_missing_column_is_a_client_error() {
    let (root, app) = test_app();
    fs::write(root.path().join("data.csv"), "A\n1").unwrap();

    let (status, body) = call_tool(
        app,
        "analyze_data",
        json!({ "path": "data.csv", "column": "B" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("'B'"));
}

#[tokio::test]
async fn path_escape_is_rejected_with_403() {
    let (_root, app) = test_app();

    let (status, body) = call_tool(
        app,
        "read_file",
        json!({ "path": "../../etc/passwd" }),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("access denied"));
}

#[tokio::test]
async fn path_escape_on_write_does_not_create_file() {
    let (root, app) = test_app();

    let (status, _body) = call_tool(
        app,
        "write_file",
        json!({ "path": "../escaped.txt", "content": "x" }),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(!root.path().parent().unwrap().join("escaped.txt").exists());
}

#[tokio::test]
async fn generates_infographic_via_dispatch() {
    let (root, app) = test_app();
    fs::write(root.path().join("data.csv"), "Color\nred\nblue\nred").unwrap();

    let (status, body) = call_tool(
        app,
        "generate_infographic",
        json!({
            "csvPath": "data.csv",
            "outputPath": "output/test.html",
            "title": "Test Infographic"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"]["success"], true);
    assert_eq!(body["output"]["totalResponses"], 3);

    let html = fs::read_to_string(root.path().join("output/test.html")).unwrap();
    assert!(html.contains("Test Infographic"));
    assert!(html.contains("Łączna liczba odpowiedzi: 3"));
}

#[tokio::test]
async fn infographics_shortcut_answers_201_and_applies_defaults() {
    let (root, app) = test_app();
    fs::write(root.path().join("data.csv"), "X\n1\n2").unwrap();

    let (status, body) = post_json(
        app,
        "/infographics",
        json!({ "csvPath": "data.csv" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["type"], "tool_result");
    assert_eq!(body["tool"], "generate_infographic");
    assert_eq!(body["output"]["outputPath"], "output/infographic.html");

    let html = fs::read_to_string(root.path().join("output/infographic.html")).unwrap();
    assert!(html.contains("Infografika"));
}

#[tokio::test]
async fn infographics_shortcut_rejects_missing_csv_path() {
    let (_root, app) = test_app();

    let (status, body) = post_json(app, "/infographics", json!({ "title": "T" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");
    assert_eq!(body["details"][0]["message"], "csvPath is required");
}
