use plagcheck_core::checker::{CheckStatus, CheckerResponse};
use plagcheck_core::config::DetectorConfig;
use plagcheck_core::detector::Detector;
use plagcheck_server::{AppState, DEFAULT_BODY_LIMIT};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use rstest::rstest;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

const SAMPLE: &str = "Hello world. This is a test.";

async fn spawn_server(body_limit: usize) -> String {
    let config = DetectorConfig {
        seed: Some(17),
        ..Default::default()
    };
    let detector = Detector::ready(config).unwrap();
    let app = plagcheck_server::app(Arc::new(AppState::new(detector)), body_limit);

    let addr = SocketAddr::from(([127, 0, 0, 1], 0)); // Random port
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

async fn upload(server: &str, name: &str, body: &[u8]) -> reqwest::Response {
    let part = Part::bytes(body.to_vec()).file_name(name.to_string());
    reqwest::Client::new()
        .post(format!("{}/checker", server))
        .multipart(Form::new().part("file", part))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = spawn_server(DEFAULT_BODY_LIMIT).await;
    let body: serde_json::Value = reqwest::get(format!("{}/health", server))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

#[rstest]
#[case("essay.txt")]
#[case("Essay.PDF")]
#[case("notes.docx")]
#[tokio::test]
async fn test_checker_accepts_documents(#[case] name: &str) {
    let server = spawn_server(DEFAULT_BODY_LIMIT).await;
    let resp = upload(&server, name, SAMPLE.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: CheckerResponse = resp.json().await.unwrap();
    assert_eq!(body.status, CheckStatus::Success);
    assert_eq!(body.plagiarism_score, Some(28.0));
    assert_eq!(body.matched_sources.len(), 4);
    assert_eq!(
        body.matched_sources[0],
        "scholar.google.com Academic publications and research papers"
    );
    assert_eq!(body.filename.as_deref(), Some(name));
}

#[tokio::test]
async fn test_document_ids_increase() {
    let server = spawn_server(DEFAULT_BODY_LIMIT).await;
    let first: CheckerResponse = upload(&server, "a.txt", b"one").await.json().await.unwrap();
    let second: CheckerResponse = upload(&server, "b.txt", b"two").await.json().await.unwrap();
    assert!(second.document_id.unwrap() > first.document_id.unwrap());
}

#[tokio::test]
async fn test_checker_rejects_unknown_extension() {
    let server = spawn_server(DEFAULT_BODY_LIMIT).await;
    let resp = upload(&server, "payload.exe", b"MZ").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: CheckerResponse = resp.json().await.unwrap();
    assert_eq!(body.status, CheckStatus::Error);
    assert!(body.message.unwrap().contains("payload.exe"));
}

#[tokio::test]
async fn test_checker_requires_file_field() {
    let server = spawn_server(DEFAULT_BODY_LIMIT).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/checker", server))
        .multipart(Form::new().text("comment", "no file here"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_limit_applies_to_uploads() {
    let server = spawn_server(1024).await;
    let resp = upload(&server, "big.txt", &vec![b'a'; 8 * 1024]).await;
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_analyze_endpoint() {
    let server = spawn_server(DEFAULT_BODY_LIMIT).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/analyze", server))
        .json(&json!({ "text": SAMPLE }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["details"]["analysis"]["statistics"]["wordCount"], 6);
    let score = body["score"].as_u64().unwrap();
    assert!(score <= 100);
    assert_eq!(body["isLikelyPlagiarized"], score > 60);
}

#[tokio::test]
async fn test_analyze_rejects_blank_text() {
    let server = spawn_server(DEFAULT_BODY_LIMIT).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/analyze", server))
        .json(&json!({ "text": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: CheckerResponse = resp.json().await.unwrap();
    assert_eq!(body.message.as_deref(), Some("Input text is empty"));
}

#[tokio::test]
async fn test_render_endpoint_returns_fragments() {
    let server = spawn_server(DEFAULT_BODY_LIMIT).await;
    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("{}/api/render", server))
        .json(&json!({ "text": SAMPLE }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let sources = body["sources"].as_str().unwrap();
    assert_eq!(sources.matches("source-item").count(), 4);
    assert!(body["statistics"]
        .as_str()
        .unwrap()
        .contains("Word Count: <span>6</span>"));
    assert!(body["progress"].as_str().unwrap().contains("conic-gradient"));
}
