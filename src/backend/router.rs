//! Routes of the backend and the layers wrapped around them.

use axum::{routing::{get, post}, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers::{health, validate_stream};

/// Builds the main router
pub fn get_router() -> Router {
    let router = Router::new()
        .route("/stream/validate", post(validate_stream)) // Checks a start stream form
        .route("/health", get(health)); // Liveness probe

    // Let the dev client call us from any origin (debug builds only)
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_headers(Any)
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}
