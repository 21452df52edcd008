//! Events Domain
//!
//! Event listings stored in MongoDB, with optional pictures hosted on Cloudinary.
//!
//! ```text
//! POST /add-event ──► validate ──► upload image (MediaHost) ──► insert (EventRepository)
//! GET  /events    ──► list
//! GET  /events/id ──► get by id
//! ```

use utoipa::OpenApi;

mod error;
mod handlers;
mod media;
#[cfg(any(test, feature = "testing"))]
mod memory;
mod models;
mod mongodb;
mod repository;
mod service;

pub use error::{EventError, NOT_FOUND_MESSAGE, Result};
pub use handlers::{EVENT_ADDED, EventSubmission, EventsState, IMAGE_FIELD, MAX_UPLOAD_BYTES, events_router};
pub use media::{CloudinaryConfig, CloudinaryMediaHost, MediaHost};
#[cfg(any(test, feature = "testing"))]
pub use memory::InMemoryEventRepository;
pub use models::{Event, EventForm, ImageUpload, NewEvent, ParticipantCount};
pub use self::mongodb::MongoEventRepository;
pub use repository::EventRepository;
pub use service::EventService;

/// OpenAPI documentation for the events API
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_event,
        handlers::list_events,
        handlers::get_event,
    ),
    components(schemas(Event, EventForm, ParticipantCount)),
    tags(
        (name = "events", description = "Create, list and look up events")
    )
)]
pub struct ApiDoc;
