//! Client for the events API
//!
//! Lists events, groups them by location, looks one up by id and submits new
//! ones (with an optional picture) as `multipart/form-data`.

mod client;
mod error;
mod models;

pub use client::{ClientConfig, DEFAULT_API_URL, EventsClient};
pub use error::{ClientError, Result};
pub use models::{CATEGORY_SUGGESTIONS, Event, EventSubmission, ImageFile, group_by_location};
