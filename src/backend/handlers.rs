//! Handlers for the routes exposed by the backend.

use axum::{extract::Json, response::IntoResponse};
use http::StatusCode;
use log::{debug, info};

use crate::backend::models::Health;
use crate::utils::validation::{validate, ValidationOutcome};

/// Checks a start stream form and answers with the tagged outcome.
/// A rejected form is answered with 422 and every violation found.
pub async fn validate_stream(Json(payload): Json<serde_json::Value>) -> impl IntoResponse {
    let outcome = ValidationOutcome::from(validate(&payload));

    let status = if outcome.is_ok() {
        info!("Start stream form accepted");
        StatusCode::OK
    } else {
        debug!("Start stream form rejected");
        StatusCode::UNPROCESSABLE_ENTITY
    };

    (status, Json(outcome))
}

/// Liveness probe
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
