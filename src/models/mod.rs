/// # Health Status Response
///
/// Operational status of the service with its version and a timestamp.
/// Returned by `GET /api/v1/health` and the GraphQL `health` query.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "version": "0.1.0",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// Verdict types shared by the engine and every ingress surface:
/// [`Status`](verification::Status), [`Reason`](verification::Reason),
/// [`VerificationResult`](verification::VerificationResult) and the parsed
/// [`EmailAddress`](verification::EmailAddress).
pub mod verification;

pub use health::HealthResponse;
pub use verification::{EmailAddress, Reason, Status, VerificationResult};
