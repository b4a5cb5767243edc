use utoipa::OpenApi;

/// OpenAPI document for the REST surface.
///
/// Served at `/api-docs/openapi.json` and rendered by Swagger UI under
/// `/swagger-ui/`. The GraphQL endpoint is listed as a tag only; its schema
/// is introspectable through `/api/v1/graphql`.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Verification: `POST /api/v1/verify-email`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::verify_email,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::verification::VerificationResult,
            crate::models::verification::Status,
            crate::models::verification::Reason,
            crate::routes::email::EmailRequest,
            crate::routes::email::ErrorResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Verification", description = "Classify an address as valid, invalid or risky"),
        (name = "GraphQL", description = "GraphQL API exposing the same health and verification queries")
    ),
    info(
        description = "Email address verification with syntax, denylist, DNS and heuristic checks over REST and GraphQL",
        title = "Email Verifier API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
