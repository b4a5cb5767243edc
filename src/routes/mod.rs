use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health`: liveness status with version and timestamp.
pub mod health;

/// # Email Verification Endpoint
///
/// `POST /verify-email`: runs the verification engine on one address and
/// returns its `(status, reason)` verdict.
pub mod email;

/// # GraphQL Endpoint
///
/// `POST /graphql` and the `GET /playground` development UI.
pub mod graphql;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api/v1` base path.
///
/// ```text
/// GET  /api/v1/health       - Service health status
/// POST /api/v1/verify-email - Email verification
/// POST /api/v1/graphql      - GraphQL queries
/// GET  /api/v1/playground   - GraphQL playground
/// ```
///
/// The email and GraphQL routes expect `web::Data<VerificationEngine>` and
/// `web::Data<AppSchema>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(graphql::configure_routes),
    );
}
