use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::Form,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use form_relay::{
    build_router,
    relay::{FormUpstream, HttpUpstream, RelayError},
    AppState,
};
use shared::domain::{AccessKey, FormPayload};
use std::collections::HashMap;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

/// Stand-in for Web3Forms: echoes the fields it received and the Accept
/// header, and rejects submissions without an access key.
async fn fake_web3forms() -> SocketAddr {
    async fn submit(
        headers: HeaderMap,
        Form(fields): Form<HashMap<String, String>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let accept = headers
            .get("accept")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !fields.contains_key("access_key") {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "success": false, "message": "missing key" })),
            );
        }
        (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "accept": accept, "fields": fields })),
        )
    }
    serve(Router::new().route("/submit", post(submit))).await
}

async fn html_upstream() -> SocketAddr {
    serve(Router::new().route(
        "/submit",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
    ))
    .await
}

const ORDERED_REPLY: &str =
    r#"{"success":true,"message":"Email sent","body":{"z":1,"a":2},"data":[3,1]}"#;

/// Replies with a fixed JSON text whose keys are deliberately not sorted.
async fn ordered_upstream() -> SocketAddr {
    serve(Router::new().route(
        "/submit",
        post(|| async {
            (
                StatusCode::OK,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                ORDERED_REPLY,
            )
        }),
    ))
    .await
}

fn upstream_for(addr: SocketAddr) -> HttpUpstream {
    HttpUpstream::new(format!("http://{addr}/submit"), Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn http_upstream_posts_urlencoded_fields_and_reads_json() {
    let addr = fake_web3forms().await;
    let upstream = upstream_for(addr);
    let payload: FormPayload = [("name", "Ada"), ("access_key", "k")].into_iter().collect();

    let reply = upstream.submit(&payload).await.expect("reply");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.reported_success(), Some(true));
    let body: serde_json::Value = serde_json::from_str(reply.body_text()).expect("json");
    assert_eq!(body["accept"], "application/json");
    assert_eq!(body["fields"]["name"], "Ada");
}

#[tokio::test]
async fn http_upstream_reports_non_json_body() {
    let addr = html_upstream().await;
    let err = upstream_for(addr)
        .submit(&FormPayload::new())
        .await
        .expect_err("should fail");
    assert!(matches!(err, RelayError::InvalidBody { status: 502, .. }));
}

#[tokio::test]
async fn http_upstream_reports_unreachable_host() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = upstream_for(addr)
        .submit(&FormPayload::new())
        .await
        .expect_err("should fail");
    assert!(matches!(err, RelayError::Transport(_)));
}

#[tokio::test]
async fn relay_end_to_end_through_real_sockets() {
    let upstream_addr = fake_web3forms().await;
    let state = AppState {
        upstream: Arc::new(upstream_for(upstream_addr)),
        access_key: AccessKey::parse("server-key"),
        max_body_bytes: 16 * 1024,
    };
    let relay_addr = serve(build_router(Arc::new(state))).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{relay_addr}/submit"))
        .form(&[("student-name", "Automated Test"), ("dob", "2010-01-01")])
        .send()
        .await
        .expect("response");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("json");
    assert_eq!(body["fields"]["student-name"], "Automated Test");
    assert_eq!(body["fields"]["access_key"], "server-key");

    let response = client
        .get(format!("http://{relay_addr}/submit"))
        .send()
        .await
        .expect("response");
    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn relay_returns_upstream_json_byte_for_byte() {
    let upstream_addr = ordered_upstream().await;
    let state = AppState {
        upstream: Arc::new(upstream_for(upstream_addr)),
        access_key: AccessKey::parse("server-key"),
        max_body_bytes: 16 * 1024,
    };
    let relay_addr = serve(build_router(Arc::new(state))).await;

    let response = reqwest::Client::new()
        .post(format!("http://{relay_addr}/submit"))
        .form(&[("student-name", "Automated Test")])
        .send()
        .await
        .expect("response");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let text = response.text().await.expect("text");
    assert_eq!(text, ORDERED_REPLY);
}
