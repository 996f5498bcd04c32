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

//! Shared API types for the eventboard backend.
//!
//! This crate defines the API contract between the events/meetings backend
//! and its consumers (clients, frontend, integration tests).
//! It is intentionally framework-agnostic: no axum, no database types.

pub mod de;
pub mod error;
pub mod event;
pub mod meeting;
pub mod record;

pub use error::ErrorBody;
pub use event::{Event, EventFields};
pub use meeting::{Meeting, MeetingFields, MeetingPatch, SubMeeting};
pub use record::{Fields, Record};
