//! MongoEventRepository against a real MongoDB
//!
//! Requires Docker: `cargo test -p domain_events -- --ignored`

use domain_events::*;
use test_utils::assertions::{assert_object_id, assert_some};
use test_utils::{TestDataBuilder, TestMongo};

fn new_event(builder: &TestDataBuilder, location: &str) -> NewEvent {
    NewEvent {
        title: builder.name("event", location),
        description: "Integration run".into(),
        date: "2025-06-01".into(),
        time: "19:30".into(),
        location: location.into(),
        category: "Music".into(),
        max_participants: 25,
        image_url: None,
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_then_read_back() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_create_then_read_back");
    let repo = MongoEventRepository::new(&mongo.database(&builder.database_name()));
    repo.create_indexes().await.unwrap();

    let created = repo
        .create(new_event(&builder, "Berlin").with_image_url("https://res.cloudinary.com/x.png"))
        .await
        .unwrap();
    assert_object_id(&created.id, "created event id");
    assert_eq!(created.curr_participants, 0);

    let found = assert_some(
        repo.get_by_id(&created.id).await.unwrap(),
        "event by id",
    );
    assert_eq!(found, created);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_returns_every_created_event() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_list");
    let repo = MongoEventRepository::new(&mongo.database(&builder.database_name()));

    for location in ["Berlin", "Lisbon", "Berlin"] {
        repo.create(new_event(&builder, location)).await.unwrap();
    }

    let events = repo.list().await.unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events.iter().filter(|e| e.location == "Berlin").count(), 2);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_unknown_and_malformed_ids() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_ids");
    let repo = MongoEventRepository::new(&mongo.database(&builder.database_name()));

    assert!(repo.get_by_id(&builder.object_id()).await.unwrap().is_none());
    assert!(matches!(
        repo.get_by_id("not-an-id").await,
        Err(EventError::InvalidId(_))
    ));
    assert!(repo.ping().await.is_ok());
}
