use actix_web::{HttpResponse, Responder, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::VerificationResult;
use crate::validation::VerificationEngine;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    /// Candidate address. Surrounding whitespace is trimmed.
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

/// # Email Verification Endpoint
///
/// Classifies one address as `valid`, `invalid` or `risky`:
/// 1. Structural syntax check
/// 2. Disposable domain denylist
/// 3. Role-based local part denylist
/// 4. MX lookup over DNS-over-HTTPS
/// 5. Suspicious domain heuristics
///
/// ## Responses
/// - **200 OK**: `{"status": ..., "reason": ...}` for every verdict
/// - **400 Bad Request**: `email` field absent or null
/// - **500 Internal Server Error**: the resolver returned data that could
///   not be interpreted
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/verify-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Verdict for the address", body = VerificationResult),
        (status = 400, description = "Missing email field", body = ErrorResponse),
        (status = 500, description = "Internal verification fault", body = ErrorResponse)
    ),
    tag = "Email Verification"
)]
#[post("/verify-email")]
pub async fn verify_email(
    req: web::Json<EmailRequest>,
    engine: web::Data<VerificationEngine>,
) -> impl Responder {
    let Some(email) = req.into_inner().email else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "MISSING_EMAIL",
            "Request body must contain an `email` field",
        ));
    };

    match engine.verify(email.trim()).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            tracing::error!(error = %e, "verification failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "Email verification failed unexpectedly",
            ))
        }
    }
}

/// Registers email verification routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(verify_email);
}
