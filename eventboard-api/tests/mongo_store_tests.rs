/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for the MongoDB store.
//!
//! These need a reachable server: `MONGO_URI=mongodb://localhost:27017 cargo
//! test -- --ignored`. Each test works in its own uniquely named collection
//! and drops it afterwards.

use eventboard_api::config::MongoConfig;
use eventboard_api::store::{mongo, DocumentStore, MongoStore};
use eventboard_types::{EventFields, Fields, MeetingFields, MeetingPatch, SubMeeting};
use mongodb::bson::Document;
use mongodb::Database;
use serial_test::serial;

async fn test_database() -> Database {
    let uri = std::env::var("MONGO_URI").expect("MONGO_URI must be set for tests");
    let config = MongoConfig {
        uri,
        database: Some("eventboard_test".to_string()),
    };
    mongo::connect(&config)
        .await
        .expect("Failed to connect to test database")
}

async fn drop_collection(database: &Database, name: &str) {
    let _ = database.collection::<Document>(name).drop(None).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires MONGO_URI"]
async fn test_event_lifecycle() {
    let database = test_database().await;
    let collection = "events_lifecycle_test";
    drop_collection(&database, collection).await;
    let store = MongoStore::<EventFields>::new(&database, collection);

    let created = store
        .insert(EventFields::from_patch(EventFields {
            title: Some("Launch".to_string()),
            location: Some("HQ".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert_eq!(created.id.len(), 24);

    let fetched = store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let patch = EventFields {
        location: Some("Rooftop".to_string()),
        ..Default::default()
    };
    let updated = store.update(&created.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.fields.title.as_deref(), Some("Launch"));
    assert_eq!(updated.fields.location.as_deref(), Some("Rooftop"));

    let unchanged = store
        .update(&created.id, EventFields::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, updated);

    assert_eq!(store.list().await.unwrap(), vec![updated.clone()]);

    let removed = store.remove(&created.id).await.unwrap().unwrap();
    assert_eq!(removed, updated);
    assert!(store.get(&created.id).await.unwrap().is_none());

    drop_collection(&database, collection).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires MONGO_URI"]
async fn test_malformed_and_unknown_ids_are_not_found() {
    let database = test_database().await;
    let collection = "events_missing_test";
    drop_collection(&database, collection).await;
    let store = MongoStore::<EventFields>::new(&database, collection);

    for id in ["1", "65f0c0ffee0123456789abcd"] {
        assert!(store.get(id).await.unwrap().is_none());
        assert!(store
            .update(id, EventFields::default())
            .await
            .unwrap()
            .is_none());
        assert!(store.remove(id).await.unwrap().is_none());
    }

    drop_collection(&database, collection).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires MONGO_URI"]
async fn test_meeting_rename_keeps_sub_meetings() {
    let database = test_database().await;
    let collection = "meetings_rename_test";
    drop_collection(&database, collection).await;
    let store = MongoStore::<MeetingFields>::new(&database, collection);

    let created = store
        .insert(MeetingFields {
            name: "Board".to_string(),
            meetings: vec![SubMeeting {
                full_name: Some("Quarterly Board Review".to_string()),
                name: Some("Review".to_string()),
                start_time: None,
                end_time: None,
            }],
        })
        .await
        .unwrap();

    let patch = MeetingPatch {
        name: Some("Renamed".to_string()),
        meetings: None,
    };
    let updated = store.update(&created.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.fields.name, "Renamed");
    assert_eq!(updated.fields.meetings, created.fields.meetings);

    drop_collection(&database, collection).await;
}
