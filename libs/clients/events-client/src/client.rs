use crate::error::{ClientError, Result};
use crate::models::{Event, EventSubmission};
use core_config::{ConfigError, FromEnv, env_or_default};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the events API lives
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// `EVENTS_API_URL` (default: `http://localhost:8080`)
impl FromEnv for ClientConfig {
    fn from_env() -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            api_url: env_or_default("EVENTS_API_URL", DEFAULT_API_URL),
        })
    }
}

/// HTTP client for the events API.
///
/// ```ignore
/// let client = EventsClient::new("http://localhost:8080")?;
/// for event in client.list_events().await? {
///     println!("{} @ {}", event.title, event.location);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_url.clone())
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// All events in server order.
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self.http.get(self.url("/events")).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// One event, or `None` when the server answers 404.
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: &str) -> Result<Option<Event>> {
        let response = self
            .http
            .get(self.url(&format!("/events/{id}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(id, "Event not found");
            return Ok(None);
        }

        let response = check(response).await?;
        Ok(Some(response.json().await?))
    }

    /// Post the submission as `multipart/form-data`; returns the server's acknowledgement.
    #[instrument(skip_all, fields(title = %submission.title, has_image = submission.image.is_some()))]
    pub async fn create_event(&self, submission: &EventSubmission) -> Result<String> {
        let mut form = Form::new();
        for (name, value) in submission.text_fields() {
            form = form.text(name, value);
        }

        if let Some(image) = &submission.image {
            let part = Part::bytes(image.data.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("imageFile", part);
        }

        let response = self
            .http
            .post(self.url("/add-event"))
            .multipart(form)
            .send()
            .await?;

        let response = check(response).await?;
        Ok(response.text().await?)
    }
}

/// Turn a non-success response into [`ClientError::Api`] carrying the body text.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    warn!(status = %status, message = %message, "Events API request failed");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
