//! Response bodies that are not validation outcomes.

use serde::Serialize;

/// Body of the health check
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}
