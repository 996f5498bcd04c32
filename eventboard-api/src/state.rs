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

//! Shared application state passed to every Axum handler via `State`.

use std::sync::Arc;

use eventboard_types::{EventFields, Fields, MeetingFields, Record};
use mongodb::Database;
use tracing::info;

use crate::config::{Backend, Config};
use crate::store::{
    mongo, seed, InMemoryStore, MongoStore, SharedStore, StoreError, EVENTS_COLLECTION,
    MEETINGS_COLLECTION,
};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Event collection.
    pub events: SharedStore<EventFields>,
    /// Meeting collection.
    pub meetings: SharedStore<MeetingFields>,
}

impl AppState {
    pub fn new(events: SharedStore<EventFields>, meetings: SharedStore<MeetingFields>) -> Self {
        Self { events, meetings }
    }

    /// Both collections in process memory, meetings seeded with the samples.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStore::<EventFields>::new()),
            Arc::new(InMemoryStore::with_records(seed::sample_meetings())),
        )
    }

    /// Build the stores selected by `config`, connecting to MongoDB when
    /// either collection lives there.
    pub async fn from_config(config: &Config) -> Result<Self, StoreError> {
        let database = match &config.mongo {
            Some(mongo_config) if config.uses_mongo() => {
                Some(mongo::connect(mongo_config).await?)
            }
            _ => None,
        };

        info!(
            events = %config.events_backend,
            meetings = %config.meetings_backend,
            "Storage backends selected"
        );

        Ok(Self::new(
            build_store(
                config.events_backend,
                database.as_ref(),
                EVENTS_COLLECTION,
                Vec::new(),
            ),
            build_store(
                config.meetings_backend,
                database.as_ref(),
                MEETINGS_COLLECTION,
                seed::sample_meetings(),
            ),
        ))
    }
}

/// `seed` only applies to the in-memory backend.
fn build_store<F: Fields>(
    backend: Backend,
    database: Option<&Database>,
    collection: &str,
    seed: Vec<Record<F>>,
) -> SharedStore<F> {
    match (backend, database) {
        (Backend::Mongo, Some(database)) => Arc::new(MongoStore::<F>::new(database, collection)),
        _ => Arc::new(InMemoryStore::with_records(seed)),
    }
}
