use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Category names offered when creating an event. The server accepts any text.
pub const CATEGORY_SUGGESTIONS: [&str; 8] = [
    "Music",
    "Technology",
    "Art",
    "Food",
    "Sports",
    "Business",
    "Education",
    "Entertainment",
];

/// An event as returned by `GET /events` and `GET /events/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub max_participants: i64,
    #[serde(default)]
    pub curr_participants: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Event {
    /// Places still open, never negative
    pub fn spots_left(&self) -> i64 {
        (self.max_participants - self.curr_participants).max(0)
    }
}

/// Events keyed by location, each group in input order.
pub fn group_by_location(events: &[Event]) -> BTreeMap<String, Vec<Event>> {
    let mut groups: BTreeMap<String, Vec<Event>> = BTreeMap::new();
    for event in events {
        groups
            .entry(event.location.clone())
            .or_default()
            .push(event.clone());
    }
    groups
}

/// Picture attached to a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            data,
        }
    }

    /// Read an image from disk, naming it after the file.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();
        Ok(Self::new(file_name, data))
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Local form state for a new event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSubmission {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    pub total_participants: Option<i64>,
    pub image: Option<ImageFile>,
}

impl EventSubmission {
    /// Fields the server will reject as missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let text = [
            ("title", &self.title),
            ("description", &self.description),
            ("date", &self.date),
            ("time", &self.time),
            ("location", &self.location),
            ("category", &self.category),
        ];

        let mut missing: Vec<_> = text
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if self.total_participants.is_none() {
            missing.push("totalParticipants");
        }
        missing
    }

    /// Text fields in the order they are sent.
    pub(crate) fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("date", self.date.clone()),
            ("time", self.time.clone()),
            ("location", self.location.clone()),
            ("category", self.category.clone()),
        ];
        if let Some(total) = self.total_participants {
            fields.push(("totalParticipants", total.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, location: &str) -> Event {
        Event {
            id: id.into(),
            title: format!("Event {id}"),
            description: "d".into(),
            date: "2025-06-01".into(),
            time: "19:30".into(),
            location: location.into(),
            category: "Music".into(),
            max_participants: 10,
            curr_participants: 0,
            image_url: None,
        }
    }

    #[test]
    fn test_group_by_location_keeps_input_order() {
        let events = vec![event("1", "Berlin"), event("2", "Lisbon"), event("3", "Berlin")];

        let groups = group_by_location(&events);

        assert_eq!(groups.len(), 2);
        let berlin: Vec<_> = groups["Berlin"].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(berlin, ["1", "3"]);
        assert_eq!(groups["Lisbon"].len(), 1);
    }

    #[test]
    fn test_group_by_location_empty() {
        assert!(group_by_location(&[]).is_empty());
    }

    #[test]
    fn test_event_reads_server_json() {
        let event: Event = serde_json::from_str(
            r#"{"_id":"665f1c2ab4d3e9a1f0c12345","title":"Jazz","description":"d",
                "date":"2025-06-01","time":"19:30","location":"Berlin","category":"Music",
                "maxParticipants":50,"currParticipants":0,"__v":0}"#,
        )
        .unwrap();

        assert_eq!(event.id, "665f1c2ab4d3e9a1f0c12345");
        assert_eq!(event.spots_left(), 50);
        assert!(event.image_url.is_none());
    }

    #[test]
    fn test_missing_fields() {
        let submission = EventSubmission {
            title: "Jazz".into(),
            location: "Berlin".into(),
            ..Default::default()
        };

        assert_eq!(
            submission.missing_fields(),
            ["description", "date", "time", "category", "totalParticipants"]
        );
    }

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(ImageFile::new("poster.PNG", vec![]).content_type, "image/png");
        assert_eq!(ImageFile::new("a.jpeg", vec![]).content_type, "image/jpeg");
        assert_eq!(
            ImageFile::new("notes", vec![]).content_type,
            "application/octet-stream"
        );
    }
}
