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

//! Axum router configuration for the eventboard API.

pub mod events;
pub mod meetings;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Build the full application router with the event and meeting routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Events
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        // Meetings
        .route(
            "/api/meetings",
            get(meetings::list_meetings).post(meetings::create_meeting),
        )
        .route(
            "/api/meetings/{id}",
            get(meetings::get_meeting)
                .put(meetings::update_meeting)
                .delete(meetings::delete_meeting),
        )
}
