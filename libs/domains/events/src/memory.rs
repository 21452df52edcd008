//! In-memory repository for tests and local runs without MongoDB.

use crate::error::{EventError, Result};
use crate::models::{Event, NewEvent};
use crate::repository::EventRepository;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Insert-ordered store with the same id rules as MongoDB.
#[derive(Clone, Default)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: NewEvent) -> Result<Event> {
        let event = event.into_event(ObjectId::new().to_hex());
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn list(&self) -> Result<Vec<Event>> {
        Ok(self.events.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Event>> {
        let id = ObjectId::parse_str(id).map_err(EventError::from)?.to_hex();
        Ok(self
            .events
            .read()
            .await
            .iter()
            .find(|event| event.id == id)
            .cloned())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
