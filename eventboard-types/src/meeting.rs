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

//! Meeting resource: a named group of sub-meetings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Fields, Record};

/// A meeting group as returned by the API.
pub type Meeting = Record<MeetingFields>;

/// Meeting fields. Responses always carry both keys.
///
/// ```json
/// {
///   "id": "1",
///   "name": "Board",
///   "meetings": [
///     { "fullName": "Quarterly board review", "name": "Q1",
///       "startTime": "2025-01-15T09:00:00Z", "endTime": "2025-01-15T11:00:00Z" }
///   ]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MeetingFields {
    /// Top-level grouping label.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub meetings: Vec<SubMeeting>,
}

/// One entry of [`MeetingFields::meetings`]. Serialized with exactly these
/// four keys; extra stored keys are discarded.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubMeeting {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient_timestamp")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::de::lenient_timestamp")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Create/update body for meetings. A present `meetings` list replaces the
/// stored one wholesale.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MeetingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meetings: Option<Vec<SubMeeting>>,
}

impl Fields for MeetingFields {
    type Patch = MeetingPatch;

    const RESOURCE: &'static str = "Meeting";

    fn merge(&mut self, patch: MeetingPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(meetings) = patch.meetings {
            self.meetings = meetings;
        }
    }
}
