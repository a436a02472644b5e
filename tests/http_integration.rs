//! End-to-end tests driving a live server over HTTP.

use hmac_server::{AppConfig, HttpServer};
use serde_json::{json, Value};

const MAX_MSG_SIZE_BYTES: i64 = 1024;

fn test_config() -> AppConfig {
    AppConfig {
        hmac_alg: "SHA256".into(),
        secret: "dGVzdC1zZWNyZXQ=".into(),
        listen_port: 0,
        max_msg_size_bytes: MAX_MSG_SIZE_BYTES,
    }
}

/// Start a server on an ephemeral port and return its base URL.
async fn start_server() -> String {
    let server = HttpServer::new(&test_config()).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    format!("http://{addr}")
}

async fn sign(client: &reqwest::Client, base: &str, msg: &str) -> String {
    let response = client
        .post(format!("{base}/sign"))
        .json(&json!({ "msg": msg }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    let signature = body["signature"].as_str().unwrap().to_string();
    assert!(!signature.trim().is_empty());
    signature
}

async fn verify(client: &reqwest::Client, base: &str, msg: &str, signature: &str) -> String {
    let response = client
        .post(format!("{base}/verify"))
        .json(&json!({ "msg": msg, "signature": signature }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    body["ok"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn sign_then_verify_round_trip() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let signature = sign(&client, &base, "message").await;
    assert_eq!(verify(&client, &base, "message", &signature).await, "true");
}

#[tokio::test]
async fn verify_fails_for_modified_message() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let signature = sign(&client, &base, "message").await;
    assert_eq!(verify(&client, &base, "messsage", &signature).await, "false");
}

#[tokio::test]
async fn verify_fails_for_modified_signature() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let signature = sign(&client, &base, "message").await;
    let mut bytes = signature.into_bytes();
    bytes[0] = if bytes[0] == b'A' { b'B' } else { b'A' };
    let mutated = String::from_utf8(bytes).unwrap();
    assert_eq!(verify(&client, &base, "message", &mutated).await, "false");
}

#[tokio::test]
async fn sign_is_stable_across_requests() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let first = sign(&client, &base, "message").await;
    for _ in 0..5 {
        assert_eq!(sign(&client, &base, "message").await, first);
    }
}

#[tokio::test]
async fn sign_rejects_blank_msg() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    for body in [json!({ "msg": "" }), json!({ "msg": "   " }), json!({})] {
        let response = client
            .post(format!("{base}/sign"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(response.text().await.unwrap(), "msg field cannot be empty");
    }
}

#[tokio::test]
async fn verify_rejects_non_base64_signature() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/verify"))
        .json(&json!({ "msg": "message", "signature": "@@@" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "signature is not a valid base64 encoded string"
    );
}

#[tokio::test]
async fn verify_rejects_missing_fields() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/verify"))
        .json(&json!({ "msg": "message" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "msg or signature field is missing or null"
    );
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let msg = "a".repeat(MAX_MSG_SIZE_BYTES as usize * 2);
    let response = client
        .post(format!("{base}/sign"))
        .json(&json!({ "msg": msg }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 413);
    assert_eq!(
        response.text().await.unwrap(),
        format!("Request body size exceeds max {MAX_MSG_SIZE_BYTES} bytes")
    );
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/sign"))
        .header("Content-Type", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Request body is empty");
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{base}/sign")).send().await.unwrap();
    assert_eq!(response.status(), 405);
    assert_eq!(
        response.text().await.unwrap(),
        "Http method GET is not supported"
    );
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/sign"))
        .body(r#"{"msg":"message"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "Required header Content-Type is missing"
    );
}

#[tokio::test]
async fn unsupported_media_type_is_rejected() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/sign"))
        .header("Content-Type", "text/plain")
        .body(r#"{"msg":"message"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 415);
    assert_eq!(
        response.text().await.unwrap(),
        "Request contains unsupported media types. Supported types are [application/json]"
    );
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/other"))
        .json(&json!({ "msg": "message" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn malformed_json_is_an_internal_error() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/sign"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    assert!(response
        .text()
        .await
        .unwrap()
        .starts_with("Error while parsing json: "));
}
