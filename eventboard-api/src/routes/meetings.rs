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

//! Handlers for meeting CRUD endpoints.
//!
//! Every handler answers with the same normalized meeting shape: `id`,
//! `name`, and `meetings` entries carrying exactly `fullName`, `name`,
//! `startTime` and `endTime`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use eventboard_types::{Fields, Meeting, MeetingFields, MeetingPatch};

use crate::error::AppError;
use crate::extract::Payload;
use crate::state::AppState;

fn meeting_not_found() -> AppError {
    AppError::not_found(MeetingFields::RESOURCE)
}

/// POST /api/meetings
pub async fn create_meeting(
    State(state): State<AppState>,
    Payload(body): Payload<MeetingPatch>,
) -> Result<(StatusCode, Json<Meeting>), AppError> {
    tracing::debug!(?body, "Creating meeting");
    let meeting = state
        .meetings
        .insert(MeetingFields::from_patch(body))
        .await?;
    Ok((StatusCode::CREATED, Json(meeting)))
}

/// GET /api/meetings
pub async fn list_meetings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Meeting>>, AppError> {
    Ok(Json(state.meetings.list().await?))
}

/// GET /api/meetings/{id}
pub async fn get_meeting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Meeting>, AppError> {
    let meeting = state
        .meetings
        .get(&id)
        .await?
        .ok_or_else(meeting_not_found)?;
    Ok(Json(meeting))
}

/// PUT /api/meetings/{id}
pub async fn update_meeting(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(patch): Payload<MeetingPatch>,
) -> Result<Json<Meeting>, AppError> {
    let meeting = state
        .meetings
        .update(&id, patch)
        .await?
        .ok_or_else(meeting_not_found)?;
    Ok(Json(meeting))
}

/// DELETE /api/meetings/{id}
///
/// Unknown ids answer 404.
pub async fn delete_meeting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Meeting>, AppError> {
    let meeting = state
        .meetings
        .remove(&id)
        .await?
        .ok_or_else(meeting_not_found)?;
    Ok(Json(meeting))
}
