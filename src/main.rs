use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, web::Data};
use email_verifier::config::AppConfig;
use email_verifier::graphql::schema::create_schema;
use email_verifier::logger::init_logger;
use email_verifier::openapi::ApiDoc;
use email_verifier::validation::{Denylist, DohResolver, VerificationEngine};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Verifier Service Entry Point
///
/// Loads configuration from the environment (and `.env` if present), builds
/// the verification engine over a DNS-over-HTTPS resolver, and serves:
/// - REST: `/api/v1/health`, `/api/v1/verify-email`
/// - GraphQL: `/api/v1/graphql`, playground at `/api/v1/playground`
/// - Swagger UI: `/swagger-ui/`, OpenAPI spec at `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    init_logger(config.log_format);

    let denylist = Denylist::load(
        config.disposable_domains_file.as_deref(),
        config.role_local_parts_file.as_deref(),
    )
    .map_err(io::Error::other)?;
    let resolver =
        DohResolver::new(config.doh_endpoint.clone(), config.dns_timeout).map_err(io::Error::other)?;

    tracing::info!(
        endpoint = %resolver.endpoint(),
        timeout_ms = config.dns_timeout.as_millis() as u64,
        disposable_domains = denylist.disposable_count(),
        role_local_parts = denylist.role_count(),
        "verification engine ready"
    );

    let engine = VerificationEngine::new(denylist, Arc::new(resolver));
    let schema = create_schema(engine.clone());

    tracing::info!(host = %config.host, port = config.port, "starting HTTP server");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(openapi.clone()))
            .app_data(Data::new(engine.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(email_verifier::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
