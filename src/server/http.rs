//! HTTP surface for the reviewer.
//!
//! `POST /review-json` takes the uploaded JSON array of posts as the request
//! body and answers with the rendered report as plain text. Malformed JSON
//! and wrong top-level shapes are rejected at this boundary (400) and never
//! reach the review core.

use std::convert::Infallible;
use std::net::SocketAddr;

use serde_json::json;
use warp::{http::StatusCode, Filter};

use crate::core::models::PostRecord;
use crate::core::state::ReviewState;
use crate::reporters::markdown;

pub async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("postcheck HTTP server listening on {}", addr);
    warp::serve(routes().with(warp::log("postcheck_http")))
        .run(addr)
        .await;
    Ok(())
}

pub fn routes() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // POST /review-json -> plain-text report
    let review = warp::path("review-json")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(|posts: Vec<PostRecord>| async move {
            // Fresh accumulators per request; nothing shared across calls.
            let (status, body) = match ReviewState::review(&posts) {
                Ok(summary) => (StatusCode::OK, markdown::render(&summary)),
                Err(err) => (StatusCode::UNPROCESSABLE_ENTITY, format!("error: {}\n", err)),
            };
            Ok::<_, Infallible>(warp::reply::with_status(
                warp::reply::with_header(body, "content-type", "text/plain; charset=utf-8"),
                status,
            ))
        });

    // GET /health
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({"ok": true})));

    review.or(health)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_endpoint() {
        let resp = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&routes())
            .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.body(), "{\"ok\":true}");
    }

    #[tokio::test]
    async fn test_review_endpoint_returns_plain_text_report() {
        let resp = warp::test::request()
            .method("POST")
            .path("/review-json")
            .json(&json!([{
                "ID": 1,
                "post_title": "Hi",
                "post_name": "hi",
                "post_content": "short",
                "post_excerpt": "ok",
                "featured_image": null,
                "meta": {}
            }]))
            .reply(&routes())
            .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        let body = String::from_utf8(resp.body().to_vec()).unwrap();
        assert!(body.starts_with("# AI Review Results\n\n## Summary\nTotal posts reviewed: 1\n"));
    }

    #[tokio::test]
    async fn test_empty_batch_is_unprocessable() {
        let resp = warp::test::request()
            .method("POST")
            .path("/review-json")
            .json(&json!([]))
            .reply(&routes())
            .await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = String::from_utf8(resp.body().to_vec()).unwrap();
        assert_eq!(body, "error: no posts to review\n");
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_the_core() {
        let resp = warp::test::request()
            .method("POST")
            .path("/review-json")
            .body("{\"not\": \"an array\"}")
            .reply(&routes())
            .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
