//! Event domain models

use crate::error::{EventError, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A listed event as stored and served over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Store-assigned identifier (24 hex characters)
    #[serde(rename = "_id", alias = "id")]
    #[schema(example = "665f1c2ab4d3e9a1f0c12345")]
    pub id: String,

    pub title: String,
    pub description: String,

    /// Free-form date text, e.g. `2025-06-01`
    pub date: String,

    /// Free-form time text, e.g. `19:30`
    pub time: String,

    pub location: String,
    pub category: String,
    pub max_participants: i64,

    /// Always 0; nothing registers participants
    pub curr_participants: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Participant capacity as submitted: a JSON number or numeric text.
///
/// Integers are tried first so large values are kept exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ParticipantCount {
    Int(i64),
    Number(f64),
    Text(String),
}

impl ParticipantCount {
    /// Whole-number value, `None` when blank. Non-numeric or fractional input is an error.
    pub fn to_count(&self) -> Result<Option<i64>> {
        let value = match self {
            Self::Int(n) => return Ok(Some(*n)),
            Self::Number(n) => *n,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                if let Ok(n) = trimmed.parse::<i64>() {
                    return Ok(Some(n));
                }
                trimmed.parse::<f64>().map_err(|_| {
                    EventError::Validation(format!(
                        "maxParticipants must be a number, got \"{text}\""
                    ))
                })?
            }
        };

        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !value.is_finite()
            || value.fract() != 0.0
            || value < i64::MIN as f64
            || value >= i64::MAX as f64
        {
            return Err(EventError::Validation(format!(
                "maxParticipants must be a whole number, got {value}"
            )));
        }
        Ok(Some(value as i64))
    }
}

impl From<i64> for ParticipantCount {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// Raw event submission. Every field is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,

    /// Capacity; `maxParticipants` is accepted as well
    #[serde(alias = "maxParticipants")]
    pub total_participants: Option<ParticipantCount>,
}

impl EventForm {
    /// Apply the required-field rule: absent or empty counts as missing.
    ///
    /// All missing fields are reported together.
    pub fn into_new_event(self) -> Result<NewEvent> {
        let mut missing = Vec::new();

        let mut required = |name: &'static str, value: Option<String>| match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let title = required("title", self.title);
        let description = required("description", self.description);
        let date = required("date", self.date);
        let time = required("time", self.time);
        let location = required("location", self.location);
        let category = required("category", self.category);

        let max_participants = match self.total_participants {
            Some(count) => count.to_count()?,
            None => None,
        };
        if max_participants.is_none() {
            missing.push("maxParticipants");
        }

        if !missing.is_empty() {
            return Err(EventError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(NewEvent {
            title,
            description,
            date,
            time,
            location,
            category,
            max_participants: max_participants.unwrap_or_default(),
            image_url: None,
        })
    }
}

/// Validated creation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    pub max_participants: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "imageUrl must be a URL"))]
    pub image_url: Option<String>,
}

impl NewEvent {
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Stored record for this input under `id`, with no participants yet.
    pub fn into_event(self, id: impl Into<String>) -> Event {
        Event {
            id: id.into(),
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            category: self.category,
            max_participants: self.max_participants,
            curr_participants: 0,
            image_url: self.image_url,
        }
    }
}

/// Image file received with a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
