//! MongoDB implementation of EventRepository

use crate::error::{EventError, Result};
use crate::models::{Event, NewEvent};
use crate::repository::EventRepository;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, instrument};

const COLLECTION: &str = "events";

/// Stored shape of an event: same field names as the API, `_id` as an ObjectId.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    #[serde(deserialize_with = "whole_number")]
    pub max_participants: i64,
    #[serde(default, deserialize_with = "whole_number")]
    pub curr_participants: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<NewEvent> for EventDocument {
    fn from(event: NewEvent) -> Self {
        Self {
            id: None,
            title: event.title,
            description: event.description,
            date: event.date,
            time: event.time,
            location: event.location,
            category: event.category,
            max_participants: event.max_participants,
            curr_participants: 0,
            image_url: event.image_url,
        }
    }
}

impl From<EventDocument> for Event {
    fn from(document: EventDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: document.title,
            description: document.description,
            date: document.date,
            time: document.time,
            location: document.location,
            category: document.category,
            max_participants: document.max_participants,
            curr_participants: document.curr_participants,
            image_url: document.image_url,
        }
    }
}

/// Counts written by other clients may be stored as int32, int64 or double.
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Int(i64),
        Double(f64),
    }

    match Stored::deserialize(deserializer)? {
        Stored::Int(n) => Ok(n),
        Stored::Double(n) if n.fract() == 0.0 => Ok(n as i64),
        Stored::Double(n) => Err(serde::de::Error::custom(format!(
            "expected a whole number, found {n}"
        ))),
    }
}

/// MongoDB-based event repository
#[derive(Clone)]
pub struct MongoEventRepository {
    database: Database,
    collection: Collection<EventDocument>,
}

impl MongoEventRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
            collection: database.collection(COLLECTION),
        }
    }

    /// Indexes for grouping and filtering by location and category.
    pub async fn create_indexes(&self) -> Result<()> {
        let indexes = vec![
            IndexModel::builder().keys(doc! { "location": 1 }).build(),
            IndexModel::builder().keys(doc! { "category": 1 }).build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!(collection = COLLECTION, "Event indexes ensured");
        Ok(())
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(title = %event.title))]
    async fn create(&self, event: NewEvent) -> Result<Event> {
        let mut document = EventDocument::from(event);
        let result = self.collection.insert_one(&document).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            EventError::Database(format!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;
        document.id = Some(id);

        info!(event_id = %id, "Event stored");
        Ok(document.into())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Event>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<EventDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> Result<Option<Event>> {
        let object_id = ObjectId::parse_str(id)?;
        let document = self.collection.find_one(doc! { "_id": object_id }).await?;
        Ok(document.map(Event::from))
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson};

    fn sample_document() -> bson::Document {
        doc! {
            "_id": ObjectId::parse_str("665f1c2ab4d3e9a1f0c12345").unwrap(),
            "title": "Jazz Night",
            "description": "Live quartet",
            "date": "2025-06-01",
            "time": "19:30",
            "location": "Berlin",
            "category": "Music",
            "maxParticipants": 50_i32,
            "currParticipants": 0.0_f64,
            "__v": 0_i32,
        }
    }

    #[test]
    fn test_document_reads_mixed_numeric_types() {
        let document: EventDocument = bson::from_document(sample_document()).unwrap();
        let event = Event::from(document);

        assert_eq!(event.id, "665f1c2ab4d3e9a1f0c12345");
        assert_eq!(event.max_participants, 50);
        assert_eq!(event.curr_participants, 0);
        assert!(event.image_url.is_none());
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let mut raw = sample_document();
        raw.insert("maxParticipants", Bson::Double(2.5));
        assert!(bson::from_document::<EventDocument>(raw).is_err());
    }

    #[test]
    fn test_new_document_has_no_id_and_zero_participants() {
        let new_event = NewEvent {
            title: "Jazz Night".into(),
            description: "Live quartet".into(),
            date: "2025-06-01".into(),
            time: "19:30".into(),
            location: "Berlin".into(),
            category: "Music".into(),
            max_participants: 50,
            image_url: None,
        };

        let stored = bson::to_document(&EventDocument::from(new_event)).unwrap();
        assert!(!stored.contains_key("_id"));
        assert!(!stored.contains_key("imageUrl"));
        assert_eq!(stored.get_i64("currParticipants").unwrap(), 0);
        assert_eq!(stored.get_str("location").unwrap(), "Berlin");
    }
}
