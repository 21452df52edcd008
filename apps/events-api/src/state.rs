//! Shared application state.

use domain_events::{EventsState, MongoEventRepository};
use mongodb::Client;

/// Cloned into every router; all fields are cheap handle clones.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Kept for the shutdown hook
    pub mongo_client: Client,
    pub events: EventsState<MongoEventRepository>,
}
