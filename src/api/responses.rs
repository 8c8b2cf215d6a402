//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerSession;

/// Envelope for the timer control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    fn new(status: &str, message: String) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
        }
    }

    /// A start request was accepted and a session is now running.
    pub fn started() -> Self {
        Self::new("started", "Timer session started".to_string())
    }

    /// A stop request was acknowledged.
    pub fn stopped() -> Self {
        Self::new("stopped", "Timer session stopped".to_string())
    }

    /// A start request was rejected with the given reason.
    pub fn rejected(reason: String) -> Self {
        Self::new("rejected", reason)
    }
}

/// Current server status including the session snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub session: Option<TimerSession>,
    pub observers: usize,
    pub uptime: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
