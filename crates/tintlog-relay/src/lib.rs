//! HTTP mounting for the tintlog relay endpoint
//!
//! ```rust,ignore
//! let endpoint = Arc::new(RelayEndpoint::new(Logger::new("client")));
//! let app = tintlog_relay::router(endpoint);
//! axum::serve(listener, app).await?;
//! ```

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tintlog_core::config::DEFAULT_RELAY_PATH;
use tintlog_core::{RelayEndpoint, RelayResponse};

/// Router serving `POST /api/log`
pub fn router(endpoint: Arc<RelayEndpoint>) -> Router {
    router_at(DEFAULT_RELAY_PATH, endpoint)
}

/// Router serving `POST <path>`
pub fn router_at(path: &str, endpoint: Arc<RelayEndpoint>) -> Router {
    Router::new()
        .route(path, post(relay_handler))
        .with_state(endpoint)
}

async fn relay_handler(State(endpoint): State<Arc<RelayEndpoint>>, body: Bytes) -> Response {
    into_response(endpoint.handle(&body))
}

fn into_response(response: RelayResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tintlog_core::{Level, LevelFilter, Logger, MemorySink};
    use tower::ServiceExt;

    fn app() -> (Router, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .module("relay")
            .filter(LevelFilter::fixed(Level::Debug))
            .sink(sink.clone())
            .build();
        (router(Arc::new(RelayEndpoint::new(logger))), sink)
    }

    fn post_log(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/log")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_payload() {
        let (app, sink) = app();
        let response = app
            .oneshot(post_log(r#"{"level":"info","message":"page loaded","context":{"module":"web"}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"{}");

        let line = sink.last().unwrap();
        assert!(line.contains("[web]"));
        assert!(line.contains("page loaded"));
    }

    #[tokio::test]
    async fn test_rejects_malformed_payload() {
        let (app, sink) = app();
        let response = app.oneshot(post_log("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Failed to process log" }));
        assert_eq!(sink.count(Level::Error), 1);
    }

    #[tokio::test]
    async fn test_only_post_is_routed() {
        let (app, _sink) = app();
        let request = Request::builder().uri("/api/log").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
