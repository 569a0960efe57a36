#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use bluebot::router::init_router;
use bluebot::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn setup_test_app() -> Router {
    init_router(AppState::default())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(request: Request<Body>) -> TestResponse {
    let response = setup_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(uri: &str) -> TestResponse {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_with_header(uri: &str, name: &str, value: &str) -> TestResponse {
    send(
        Request::builder()
            .uri(uri)
            .header(name, value)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(uri: &str, body: &str) -> TestResponse {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
