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

//! Stored-record envelope and the shallow-merge contract shared by every
//! resource type.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A persisted document: the store-assigned `id` plus the resource fields.
///
/// The fields are flattened, so an event serializes as
/// `{ "id": "...", "title": "...", ... }`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Record<F> {
    /// Opaque identifier assigned by the store on create.
    pub id: String,

    #[serde(flatten)]
    pub fields: F,
}

impl<F> Record<F> {
    pub fn new(id: impl Into<String>, fields: F) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// The field set of a resource type, together with the partial body accepted
/// by create and update.
pub trait Fields: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static {
    /// Partial body. Every field is optional; absent fields are left alone.
    type Patch: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static;

    /// Display name used in error messages (`"Event"`, `"Meeting"`).
    const RESOURCE: &'static str;

    /// Shallow merge: every field present in `patch` overwrites the current
    /// value, every absent field is kept.
    fn merge(&mut self, patch: Self::Patch);

    /// Merge `patch` over the empty template.
    fn from_patch(patch: Self::Patch) -> Self {
        let mut fields = Self::default();
        fields.merge(patch);
        fields
    }
}

/// Overwrite `slot` only when `value` is present.
pub(crate) fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
