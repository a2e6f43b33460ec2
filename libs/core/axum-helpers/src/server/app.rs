use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, enforce_origin, security_headers};
use axum::{Router, middleware};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation: Swagger UI at `/docs`, ReDoc, RapiDoc, Scalar
/// - API routes nested under `/api`
/// - Root routes (health, readiness) merged as given
/// - 404 fallback handler
///
/// Middleware, outermost first:
/// 1. Origin gate: a request whose `Origin` is not allowed gets 403
/// 2. CORS layer: preflight answers and `Access-Control-*` headers
/// 3. Request tracing
/// 4. Security headers and response compression
///
/// Every route, root routes included, sits behind all of these layers.
///
/// # Errors
/// Returns an error if a configured CORS origin is not a valid header value.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum_helpers::server::create_router;
/// use core_config::cors::CorsConfig;
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes, health_router(app_info!()), &CorsConfig::permissive()).await?;
/// ```
pub async fn create_router<T>(apis: Router, routes: Router, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(cors).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
        )
    })?;

    if cors.permissive {
        info!("CORS is permissive: every origin is allowed");
    } else {
        info!(
            "CORS configured with allowed origins: {}",
            cors.allowed_origins.join(",")
        );
    }

    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .merge(routes)
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(security_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer)
        .layer(middleware::from_fn_with_state(
            Arc::new(cors.clone()),
            enforce_origin,
        ));

    Ok(router)
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// This provides:
/// - Graceful shutdown on SIGTERM/SIGINT
/// - Connection cleanup bounded by `shutdown_timeout`
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::{close_postgres, create_production_app};
///
/// create_production_app(
///     router,
///     &config,
///     Duration::from_secs(30),
///     async move { close_postgres(db, "main").await },
/// ).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_handle = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.wait_for_signal().await })
    };

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Serving can end without a signal (e.g. listener error); stop waiting for one.
    signal_handle.abort();

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(_) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
