//! HTTP routes for the events API

pub mod events;
pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Liveness greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Server is up", body = String, content_type = "text/plain"))
)]
pub async fn hello() -> &'static str {
    "Hello, World!"
}

/// All API routes, served at the root by `axum_helpers::create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .merge(events::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{Environment, app_info, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use mongodb::Client;
    use mongodb::options::ClientOptions;
    use tower::ServiceExt;

    /// State pointing at a MongoDB that is never there; the driver connects lazily.
    async fn unreachable_state() -> AppState {
        let url = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";
        let options = ClientOptions::parse(url).await.unwrap();
        let mongo_client = Client::with_options(options).unwrap();
        let db = mongo_client.database("events_test");

        let config = Config {
            app: app_info!(),
            mongodb: MongoConfig::new(url),
            server: ServerConfig::default(),
            environment: Environment::Development,
            cloudinary: None,
        };
        let events = events::service(&config, &db);

        AppState {
            config,
            mongo_client,
            events,
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let app = routes(&unreachable_state().await);

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Hello, World!");
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_mongodb() {
        let app = routes(&unreachable_state().await);

        let response = app
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["mongodb"], "disconnected");
    }

    #[tokio::test]
    async fn test_image_submission_without_media_host_is_rejected() {
        let app = routes(&unreachable_state().await);
        let boundary = "events-api-test";
        let mut body = String::new();
        for (name, value) in [
            ("title", "Jazz night"),
            ("description", "Live trio"),
            ("date", "2025-06-01"),
            ("time", "19:30"),
            ("location", "Berlin"),
            ("category", "Music"),
            ("totalParticipants", "40"),
        ] {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"imageFile\"; filename=\"a.png\"\r\n\
             Content-Type: image/png\r\n\r\nPNG\r\n--{boundary}--\r\n"
        ));

        let response = app
            .oneshot(
                Request::post("/add-event")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "Error adding event: Image upload failed: no media host is configured"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_through_full_router() {
        let state = unreachable_state().await;
        let app = axum_helpers::create_router_with_origins::<crate::openapi::ApiDoc>(
            routes(&state),
            vec![],
        );

        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not Found");
    }
}
