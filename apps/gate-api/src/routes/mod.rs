//! # Route Handlers
//!
//! Thin handlers over usher-core validation. No storage, no sessions:
//! each route validates its input and echoes a constructed record.

pub mod account;
pub mod auth;

use axum::Json;
use serde::Serialize;

/// Health probe payload.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// Liveness probe.
pub async fn healthz() -> Json<Health> {
    Json(Health { status: "ok" })
}
