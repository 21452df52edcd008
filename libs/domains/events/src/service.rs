//! Event service layer

use crate::error::{EventError, Result};
use crate::media::MediaHost;
use crate::models::{Event, EventForm, ImageUpload};
use crate::repository::EventRepository;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// Validates submissions, uploads images and talks to the repository.
pub struct EventService<R: EventRepository> {
    repository: R,
    media: Option<Arc<dyn MediaHost>>,
}

impl<R: EventRepository> EventService<R> {
    /// Service without image hosting; submissions carrying an image fail.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            media: None,
        }
    }

    pub fn with_media_host(mut self, media: impl MediaHost + 'static) -> Self {
        self.media = Some(Arc::new(media));
        self
    }

    pub fn has_media_host(&self) -> bool {
        self.media.is_some()
    }

    /// Validate, upload the image if any, then persist.
    ///
    /// Nothing is written unless every earlier step succeeded.
    #[instrument(skip_all, fields(title = ?form.title, has_image = image.is_some()))]
    pub async fn create(&self, form: EventForm, image: Option<ImageUpload>) -> Result<Event> {
        let mut new_event = form.into_new_event()?;
        new_event.validate()?;

        if let Some(image) = image {
            let media = self.media.as_ref().ok_or_else(|| {
                EventError::MediaUpload("no media host is configured".to_string())
            })?;
            let url = media.upload(image).await?;
            new_event = new_event.with_image_url(url);
        }

        let event = self.repository.create(new_event).await?;
        info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Event>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| EventError::NotFound { id: id.to_string() })
    }

    /// Check the backing store
    pub async fn health(&self) -> Result<()> {
        self.repository.ping().await
    }
}
