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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `{ "error": "<message>" }` paired with the
//! appropriate HTTP status code. Only two kinds exist: not-found and a
//! generic internal failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eventboard_types::ErrorBody;

use crate::store::StoreError;

/// Application-level error that pairs an HTTP status code with an [`ErrorBody`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl AppError {
    pub fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self { status, body }
    }

    /// 404 for a resource id that does not resolve.
    pub fn not_found(resource: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorBody::not_found(resource))
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store error: {err}");
        Self::internal()
    }
}
