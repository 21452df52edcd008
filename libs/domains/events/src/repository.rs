//! Event repository trait

use crate::error::Result;
use crate::models::{Event, NewEvent};
use async_trait::async_trait;

/// Storage for events. Records are only ever inserted and read.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event with no participants; returns it with its assigned id.
    async fn create(&self, event: NewEvent) -> Result<Event>;

    /// Every stored event in the store's natural order.
    async fn list(&self) -> Result<Vec<Event>>;

    /// `Ok(None)` for an unknown id. A malformed id is `EventError::InvalidId`.
    async fn get_by_id(&self, id: &str) -> Result<Option<Event>>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<()>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub EventRepository {}

        #[async_trait]
        impl EventRepository for EventRepository {
            async fn create(&self, event: NewEvent) -> Result<Event>;
            async fn list(&self) -> Result<Vec<Event>>;
            async fn get_by_id(&self, id: &str) -> Result<Option<Event>>;
            async fn ping(&self) -> Result<()>;
        }
    }
}
