use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::AppError;

/// Rejects requests whose `Origin` header is not on the allow-list.
///
/// Runs before routing, so a rejected request never reaches a handler.
/// Requests without an `Origin` header pass through untouched, as do all
/// requests when the policy is permissive.
pub async fn enforce_origin(
    State(policy): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if !policy.permissive {
        if let Some(origin) = request.headers().get(header::ORIGIN) {
            let origin = String::from_utf8_lossy(origin.as_bytes()).into_owned();
            if !policy.is_allowed(&origin) {
                return AppError::OriginRejected(origin).into_response();
            }
        }
    }

    next.run(request).await
}

/// Creates the CORS layer answering preflights and adding response headers.
///
/// - Allowed origins from the policy (any origin when permissive)
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: Content-Type, Accept
/// - 1 hour max age
///
/// # Errors
/// Returns an error if a configured origin is not a valid header value.
pub fn create_cors_layer(policy: &CorsConfig) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if policy.permissive {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let origins = policy
        .allowed_origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    fn app(policy: CorsConfig, hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "ok"
                    }
                }),
            )
            .layer(middleware::from_fn_with_state(Arc::new(policy), enforce_origin))
    }

    fn request(origin: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/");
        if let Some(origin) = origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_disallowed_origin_never_reaches_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = app(CorsConfig::single("http://localhost:5173"), hits.clone())
            .oneshot(request(Some("http://evil.example")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_allowed_origin_passes() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = app(CorsConfig::single("http://localhost:5173"), hits.clone())
            .oneshot(request(Some("http://localhost:5173")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_request_without_origin_passes() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = app(CorsConfig::single("http://localhost:5173"), hits)
            .oneshot(request(None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_permissive_policy_allows_any_origin() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = app(CorsConfig::permissive(), hits)
            .oneshot(request(Some("http://anything.example")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_create_cors_layer_rejects_invalid_origin() {
        assert!(create_cors_layer(&CorsConfig::single("http://ok.example")).is_ok());
        assert!(create_cors_layer(&CorsConfig::single("bad\norigin")).is_err());
        assert!(create_cors_layer(&CorsConfig::permissive()).is_ok());
    }
}
