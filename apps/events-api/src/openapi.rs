//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events API",
        version = "0.1.0",
        description = "Event board REST API: create events with an optional picture, list them and look them up by id",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::hello, crate::api::health::readiness_check),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
struct ServiceDoc;

/// Service-level docs merged with the events domain paths, which are served at the root.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_events::ApiDoc::openapi());
        doc
    }
}
