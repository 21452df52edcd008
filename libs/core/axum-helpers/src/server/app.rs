use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors_origins_from_env, create_cors_layer, security_headers};
use axum::http::HeaderValue;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router with cross-cutting middleware and docs.
///
/// Sets up:
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
/// - `apis` merged at the root (routes keep their own paths)
/// - Plain-text 404 / 405 fallbacks
/// - Tracing, security headers, CORS and response compression
///
/// CORS origins come from `CORS_ALLOWED_ORIGIN` (comma-separated), defaulting
/// to the local front-end dev server `http://localhost:5173`.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` holds an invalid or empty list.
///
/// # Example
/// ```ignore
/// let routes = Router::new()
///     .route("/events", get(list_events))
///     .with_state(state);
///
/// let router = create_router::<ApiDoc>(routes).await?;
/// ```
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let origins = cors_origins_from_env()?;
    Ok(create_router_with_origins::<T>(apis, origins))
}

/// [`create_router`] with an explicit origin list instead of the environment.
pub fn create_router_with_origins<T>(apis: Router, origins: Vec<HeaderValue>) -> Router
where
    T: OpenApi + 'static,
{
    info!(
        origins = ?origins,
        "CORS configured with allowed origins"
    );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_cors_layer(origins))
        .layer(CompressionLayer::new())
}

/// Server with coordinated shutdown and a bounded cleanup phase.
///
/// On SIGINT/SIGTERM the listener stops accepting, in-flight requests finish,
/// and `cleanup` runs for at most `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     mongo_client.shutdown().await;
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
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
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        if shutdown_rx.recv().await.is_err() {
            return;
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator.clone()))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Serve can also end on error; make sure cleanup still runs.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
