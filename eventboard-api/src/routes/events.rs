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

//! Handlers for event CRUD endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use eventboard_types::{Event, EventFields, Fields};

use crate::error::AppError;
use crate::extract::Payload;
use crate::state::AppState;

fn event_not_found() -> AppError {
    AppError::not_found(EventFields::RESOURCE)
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Payload(body): Payload<EventFields>,
) -> Result<Json<Event>, AppError> {
    tracing::debug!(?body, "Creating event");
    let event = state.events.insert(EventFields::from_patch(body)).await?;
    Ok(Json(event))
}

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.events.list().await?))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let event = state.events.get(&id).await?.ok_or_else(event_not_found)?;
    Ok(Json(event))
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(patch): Payload<EventFields>,
) -> Result<Json<Event>, AppError> {
    let event = state
        .events
        .update(&id, patch)
        .await?
        .ok_or_else(event_not_found)?;
    Ok(Json(event))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let event = state
        .events
        .remove(&id)
        .await?
        .ok_or_else(event_not_found)?;
    Ok(Json(event))
}
