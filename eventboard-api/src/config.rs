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

//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 5000;

/// Configuration for the eventboard backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:5000").
    pub listen_addr: String,
    /// MongoDB connection settings. `None` if `MONGO_URI` is unset or empty.
    pub mongo: Option<MongoConfig>,
    /// Storage backend for the `events` collection.
    pub events_backend: Backend,
    /// Storage backend for the `meetings` collection.
    pub meetings_backend: Backend,
}

/// MongoDB connection settings.
#[derive(Clone)]
pub struct MongoConfig {
    /// Connection string, credentials included.
    pub uri: String,
    /// Database name override. Falls back to the database named in `uri`.
    pub database: Option<String>,
}

// The connection string carries credentials; keep it out of logs.
impl std::fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConfig")
            .field("uri", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Where a resource collection lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Process-local, lost on restart.
    Memory,
    /// MongoDB collection.
    Mongo,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Backend::Memory),
            "mongo" | "mongodb" => Ok(Backend::Mongo),
            other => Err(format!("unknown storage backend '{other}' (expected 'memory' or 'mongo')")),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Memory => write!(f, "memory"),
            Backend::Mongo => write!(f, "mongo"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:$PORT"`)
    /// - `PORT` (default: `"5000"`)
    /// - `MONGO_URI`, `MONGO_DB_NAME`
    /// - `EVENTS_BACKEND`, `MEETINGS_BACKEND` (`memory` | `mongo`; default:
    ///   `mongo` when `MONGO_URI` is set, `memory` otherwise)
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_vars<V>(var: V) -> Result<Self, String>
    where
        V: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|s| !s.trim().is_empty());

        let listen_addr = match non_empty("LISTEN_ADDR") {
            Some(addr) => addr,
            None => {
                let port = non_empty("PORT")
                    .map(|p| p.trim().parse::<u16>())
                    .transpose()
                    .map_err(|_| "PORT must be a valid port number")?
                    .unwrap_or(DEFAULT_PORT);
                format!("0.0.0.0:{port}")
            }
        };

        let mongo = non_empty("MONGO_URI").map(|uri| MongoConfig {
            uri,
            database: non_empty("MONGO_DB_NAME"),
        });

        let default_backend = if mongo.is_some() {
            Backend::Mongo
        } else {
            Backend::Memory
        };
        let backend = |key: &str| -> Result<Backend, String> {
            let backend = non_empty(key)
                .map(|s| s.parse::<Backend>())
                .transpose()
                .map_err(|e| format!("{key}: {e}"))?
                .unwrap_or(default_backend);
            if backend == Backend::Mongo && mongo.is_none() {
                return Err(format!("{key}=mongo requires MONGO_URI to be set"));
            }
            Ok(backend)
        };

        let events_backend = backend("EVENTS_BACKEND")?;
        let meetings_backend = backend("MEETINGS_BACKEND")?;

        Ok(Self {
            listen_addr,
            mongo,
            events_backend,
            meetings_backend,
        })
    }

    /// Whether any collection is stored in MongoDB.
    pub fn uses_mongo(&self) -> bool {
        self.events_backend == Backend::Mongo || self.meetings_backend == Backend::Mongo
    }
}
