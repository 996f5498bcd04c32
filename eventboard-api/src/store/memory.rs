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

//! Process-local document store.

use async_trait::async_trait;
use eventboard_types::{Fields, Record};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentStore, StoreError};

/// Ordered in-memory collection. Ids are random UUIDs unless seeded.
///
/// State is lost when the process exits. Each operation holds the lock for
/// its whole read-modify-write, so concurrent updates never interleave.
pub struct InMemoryStore<F> {
    records: RwLock<Vec<Record<F>>>,
}

impl<F> InMemoryStore<F> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from a fixed set of records (kept in the given order).
    pub fn with_records(records: Vec<Record<F>>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<F> Default for InMemoryStore<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<F: Fields> DocumentStore<F> for InMemoryStore<F> {
    async fn list(&self) -> Result<Vec<Record<F>>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Record<F>>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, fields: F) -> Result<Record<F>, StoreError> {
        let record = Record::new(Uuid::new_v4().to_string(), fields);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, patch: F::Patch) -> Result<Option<Record<F>>, StoreError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.fields.merge(patch);
        Ok(Some(record.clone()))
    }

    async fn remove(&self, id: &str) -> Result<Option<Record<F>>, StoreError> {
        let mut records = self.records.write().await;
        Ok(records
            .iter()
            .position(|r| r.id == id)
            .map(|index| records.remove(index)))
    }
}
