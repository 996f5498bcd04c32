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

//! API error body.
//!
//! Every failed request is answered with `{ "error": "<message>" }` and the
//! matching HTTP status code.

use serde::{Deserialize, Serialize};

/// Body of every non-2xx response produced by the backend itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// `"<Resource> not found"`, e.g. `"Event not found"`.
    pub fn not_found(resource: &str) -> Self {
        Self::new(format!("{resource} not found"))
    }

    /// Generic failure message. Driver details never reach the client.
    pub fn internal() -> Self {
        Self::new("Internal Server Error")
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl std::error::Error for ErrorBody {}
