use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload for the verifier. The service keeps no state between
/// requests, so being able to answer is the whole health signal; the DNS
/// endpoint is deliberately not probed here.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "version": "0.1.0",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
