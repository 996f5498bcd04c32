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

//! Event resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{overwrite, Fields, Record};

/// An event as returned by the API.
pub type Event = Record<EventFields>;

/// Event fields. Every field is optional, so the same shape doubles as the
/// create and update body. Unset fields are omitted from responses.
///
/// ```json
/// {
///   "title": "Launch",
///   "location": "HQ",
///   "startTime": "2025-03-01T18:00:00Z",
///   "requiredToFillInForm": false
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "crate::de::lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(
        default,
        deserialize_with = "crate::de::lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,

    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Image URL shown on the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_picture: Option<String>,

    /// External sign-up URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_to_fill_in_form: Option<bool>,
}

impl Fields for EventFields {
    type Patch = EventFields;

    const RESOURCE: &'static str = "Event";

    fn merge(&mut self, patch: EventFields) {
        overwrite(&mut self.title, patch.title);
        overwrite(&mut self.location, patch.location);
        overwrite(&mut self.description, patch.description);
        overwrite(&mut self.start_time, patch.start_time);
        overwrite(&mut self.end_time, patch.end_time);
        overwrite(&mut self.picture, patch.picture);
        overwrite(&mut self.detail_picture, patch.detail_picture);
        overwrite(&mut self.subscription_url, patch.subscription_url);
        overwrite(
            &mut self.required_to_fill_in_form,
            patch.required_to_fill_in_form,
        );
    }
}
