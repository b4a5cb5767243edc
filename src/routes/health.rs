use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Liveness probe. Does not touch the DNS resolver.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "version": "0.1.0",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let health_response: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health_response.status, "UP");
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
        assert!(!health_response.timestamp.is_empty());
    }
}
