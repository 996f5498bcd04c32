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

//! Document storage behind a single interface, so each resource collection
//! can live in MongoDB or in process memory.

pub mod memory;
pub mod mongo;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use eventboard_types::{Fields, Record};
use thiserror::Error;

pub use memory::InMemoryStore;
pub use mongo::MongoStore;

/// Collection holding events.
pub const EVENTS_COLLECTION: &str = "events";
/// Collection holding meetings.
pub const MEETINGS_COLLECTION: &str = "meetings";

/// Failure of the storage layer. Not-found is never an error: lookups
/// return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Backend(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("failed to decode document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),

    #[error("unexpected document id: {0}")]
    UnexpectedId(String),
}

/// One collection of `Record<F>` documents.
///
/// Every operation is a single store round trip. Concurrent writers to the
/// same id are resolved last-write-wins.
#[async_trait]
pub trait DocumentStore<F: Fields>: Send + Sync {
    /// Every record, in store order.
    async fn list(&self) -> Result<Vec<Record<F>>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Record<F>>, StoreError>;

    /// Persist `fields` under a freshly assigned id.
    async fn insert(&self, fields: F) -> Result<Record<F>, StoreError>;

    /// Shallow-merge `patch` into the record and return it as it is after
    /// the update.
    async fn update(&self, id: &str, patch: F::Patch) -> Result<Option<Record<F>>, StoreError>;

    /// Remove the record and return it.
    async fn remove(&self, id: &str) -> Result<Option<Record<F>>, StoreError>;
}

/// Shared handle to a collection, as held by the application state.
pub type SharedStore<F> = Arc<dyn DocumentStore<F>>;
