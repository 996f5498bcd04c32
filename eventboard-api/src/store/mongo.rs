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

//! MongoDB-backed document store.

use std::marker::PhantomData;

use async_trait::async_trait;
use eventboard_types::{Fields, Record};
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Bson, Document},
    options::{
        Acknowledgment, ClientOptions, FindOneAndUpdateOptions, ReturnDocument, WriteConcern,
    },
    Client, Collection, Database,
};
use tracing::info;

use super::{DocumentStore, StoreError};
use crate::config::MongoConfig;

const APP_NAME: &str = "eventboard";
const DEFAULT_DATABASE: &str = "eventboard";

/// Fields written by other clients of the same collections that are not part
/// of any resource.
const BOOKKEEPING_FIELDS: &[&str] = &["_id", "__v"];

/// Connect to MongoDB and return the configured database.
///
/// Writes are acknowledged by a majority of the replica set. The server is
/// pinged once so a bad connection string fails at startup.
pub async fn connect(config: &MongoConfig) -> Result<Database, StoreError> {
    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.write_concern = Some(WriteConcern::builder().w(Acknowledgment::Majority).build());

    let database_name = config
        .database
        .clone()
        .or_else(|| options.default_database.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

    let client = Client::with_options(options)?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await?;

    info!(database = %database_name, "Connected to MongoDB");
    Ok(client.database(&database_name))
}

/// A MongoDB collection of `Record<F>` documents keyed by `ObjectId`.
///
/// Ids are exposed as 24-character hex strings. Anything else can never match
/// a document and is answered as not-found without a round trip.
pub struct MongoStore<F> {
    collection: Collection<Document>,
    _fields: PhantomData<fn() -> F>,
}

impl<F: Fields> MongoStore<F> {
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
            _fields: PhantomData,
        }
    }
}

#[async_trait]
impl<F: Fields> DocumentStore<F> for MongoStore<F> {
    async fn list(&self) -> Result<Vec<Record<F>>, StoreError> {
        let documents: Vec<Document> = self
            .collection
            .find(doc! {}, None)
            .await?
            .try_collect()
            .await?;
        documents.into_iter().map(decode_record).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Record<F>>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        self.collection
            .find_one(doc! { "_id": oid }, None)
            .await?
            .map(decode_record)
            .transpose()
    }

    async fn insert(&self, fields: F) -> Result<Record<F>, StoreError> {
        let document = bson::to_document(&fields)?;
        let result = self.collection.insert_one(document, None).await?;
        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))?;
        Ok(Record::new(oid.to_hex(), fields))
    }

    async fn update(&self, id: &str, patch: F::Patch) -> Result<Option<Record<F>>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        let set = bson::to_document(&patch)?;
        if set.is_empty() {
            return self.get(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        self.collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set }, options)
            .await?
            .map(decode_record)
            .transpose()
    }

    async fn remove(&self, id: &str) -> Result<Option<Record<F>>, StoreError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };
        self.collection
            .find_one_and_delete(doc! { "_id": oid }, None)
            .await?
            .map(decode_record)
            .transpose()
    }
}

fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// Turn a stored document into a record: `_id` becomes the hex `id`,
/// bookkeeping fields are dropped and BSON dates become RFC 3339 strings.
fn decode_record<F: Fields>(mut document: Document) -> Result<Record<F>, StoreError> {
    let id = match document.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => return Err(StoreError::UnexpectedId(other.to_string())),
        None => return Err(StoreError::UnexpectedId("<missing>".to_string())),
    };
    for field in BOOKKEEPING_FIELDS {
        document.remove(*field);
    }
    let fields = bson::from_document(dates_to_strings(document))?;
    Ok(Record::new(id, fields))
}

/// Documents written by other clients store timestamps as BSON dates while
/// this service writes RFC 3339 strings. Fold both into strings so the field
/// types decode either way.
fn dates_to_strings(document: Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, date_to_string(value)))
        .collect()
}

fn date_to_string(value: Bson) -> Bson {
    match value {
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Bson::String)
            .unwrap_or(Bson::DateTime(dt)),
        Bson::Document(document) => Bson::Document(dates_to_strings(document)),
        Bson::Array(values) => Bson::Array(values.into_iter().map(date_to_string).collect()),
        other => other,
    }
}
