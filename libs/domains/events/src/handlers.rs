//! HTTP handlers for the events API

use crate::error::{EventError, Result};
use crate::models::{Event, EventForm, ImageUpload, ParticipantCount};
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::{DefaultBodyLimit, Form, FromRequest, Multipart, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_helpers::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Acknowledgement body for a stored submission
pub const EVENT_ADDED: &str = "Event added successfully!";

/// Upper bound for a whole submission, image included
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Multipart field carrying the optional image
pub const IMAGE_FIELD: &str = "imageFile";

const ADD_CONTEXT: &str = "Error adding event";
const LIST_CONTEXT: &str = "Error fetching events";
const GET_CONTEXT: &str = "Error fetching event";

/// Events router state
pub type EventsState<R> = Arc<EventService<R>>;

/// Routes keep the paths web clients already call: `/add-event`, `/events`, `/events/{id}`.
pub fn events_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new()
        .route(
            "/add-event",
            post(create_event::<R>).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/events", get(list_events::<R>))
        .route("/events/{id}", get(get_event::<R>))
}

/// A create request decoded from `multipart/form-data`, a urlencoded form, or JSON.
///
/// In multipart bodies a file part named `imageFile` with content is the image.
/// An empty file part, or a text part under that name (browsers send `"null"`
/// when nothing was picked), means no image.
#[derive(Debug)]
pub struct EventSubmission {
    pub form: EventForm,
    pub image: Option<ImageUpload>,
}

impl EventSubmission {
    async fn extract<S: Send + Sync>(req: Request, state: &S) -> Result<Self> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            return Self::from_multipart(multipart).await;
        }

        let form = if content_type.starts_with("application/x-www-form-urlencoded") {
            Form::<EventForm>::from_request(req, state).await?.0
        } else {
            Json::<EventForm>::from_request(req, state).await?.0
        };

        Ok(Self { form, image: None })
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut text: HashMap<String, String> = HashMap::new();
        let mut image = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?;

            match file_name {
                Some(file_name) if name == IMAGE_FIELD => {
                    if !data.is_empty() && image.is_none() {
                        image = Some(ImageUpload {
                            file_name,
                            content_type,
                            data,
                        });
                    }
                }
                Some(_) => debug!(field = %name, "Ignoring unexpected file part"),
                None if name == IMAGE_FIELD => {}
                None => {
                    let value = String::from_utf8(data.to_vec()).map_err(|_| {
                        EventError::Multipart(format!("field {name} is not valid UTF-8"))
                    })?;
                    text.entry(name).or_insert(value);
                }
            }
        }

        let total_participants = text
            .remove("totalParticipants")
            .or_else(|| text.remove("maxParticipants"))
            .map(ParticipantCount::Text);

        let form = EventForm {
            title: text.remove("title"),
            description: text.remove("description"),
            date: text.remove("date"),
            time: text.remove("time"),
            location: text.remove("location"),
            category: text.remove("category"),
            total_participants,
        };

        Ok(Self { form, image })
    }
}

impl<S: Send + Sync> FromRequest<S> for EventSubmission {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        Self::extract(req, state)
            .await
            .map_err(|e| e.into_app_error(ADD_CONTEXT))
    }
}

/// Create an event, uploading its image first when one is attached
#[utoipa::path(
    post,
    path = "/add-event",
    request_body(
        content = EventForm,
        content_type = "multipart/form-data",
        description = "Event fields plus an optional `imageFile` part; JSON bodies are accepted too"
    ),
    responses(
        (status = 200, description = "Event stored", body = String, content_type = "text/plain"),
        (status = 500, description = "Validation, upload or database failure", body = String, content_type = "text/plain")
    ),
    tag = "events"
)]
#[instrument(skip_all, fields(title = ?submission.form.title))]
pub async fn create_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    submission: EventSubmission,
) -> std::result::Result<&'static str, AppError> {
    state
        .create(submission.form, submission.image)
        .await
        .map_err(|e| e.into_app_error(ADD_CONTEXT))?;
    Ok(EVENT_ADDED)
}

/// List all events
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events", body = Vec<Event>),
        (status = 500, description = "Database failure", body = String, content_type = "text/plain")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn list_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
) -> std::result::Result<Json<Vec<Event>>, AppError> {
    let events = state
        .list()
        .await
        .map_err(|e| e.into_app_error(LIST_CONTEXT))?;
    Ok(Json(events))
}

/// Get a single event by id
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = String, Path, description = "Event id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed id or database failure", body = String, content_type = "text/plain")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn get_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Path(id): Path<String>,
) -> std::result::Result<Json<Event>, AppError> {
    let event = state
        .get_by_id(&id)
        .await
        .map_err(|e| e.into_app_error(GET_CONTEXT))?;
    Ok(Json(event))
}
