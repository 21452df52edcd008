//! Events routes backed by MongoDB and, when configured, Cloudinary

use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use domain_events::{
    CloudinaryMediaHost, EventService, EventsState, MongoEventRepository, events_router,
};
use mongodb::Database;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the event service from configuration
pub fn service(config: &Config, db: &Database) -> EventsState<MongoEventRepository> {
    let mut service = EventService::new(MongoEventRepository::new(db));

    match &config.cloudinary {
        Some(cloudinary) => {
            info!(cloud_name = %cloudinary.cloud_name, "Cloudinary image uploads enabled");
            service = service.with_media_host(CloudinaryMediaHost::new(cloudinary.clone()));
        }
        None => warn!("CLOUDINARY_* not set; events with an image will be rejected"),
    }

    Arc::new(service)
}

pub fn router(state: &AppState) -> Router {
    events_router().with_state(state.events.clone())
}

/// Initialize event indexes in MongoDB
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoEventRepository::new(db)
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create event indexes: {}", e))?;
    info!("Event collection indexes created");
    Ok(())
}
