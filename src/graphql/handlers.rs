use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::schema::AppSchema;

/// Executes a GraphQL request against the shared schema.
///
/// Resolver errors, including internal verification faults, are reported in
/// the `errors` array of a 200 response.
pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphQL Playground pointed at `/api/v1/graphql`.
pub async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(
            "/api/v1/graphql",
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::schema::create_schema;
    use crate::validation::resolver::{DnsRecord, MockNameResolver, RecordType};
    use crate::validation::{Denylist, VerificationEngine};
    use actix_web::{
        App,
        http::{StatusCode, header::ContentType},
        test::{self, TestRequest, call_service, init_service},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn schema() -> AppSchema {
        let mut resolver = MockNameResolver::new();
        resolver
            .expect_lookup()
            .returning(|domain, record_type| match record_type {
                RecordType::Mx => Ok(vec![DnsRecord::new(
                    domain,
                    RecordType::Mx,
                    300,
                    "10 mx.legitcompany.com.",
                )]),
                RecordType::A => Ok(vec![DnsRecord::new(
                    domain,
                    RecordType::A,
                    300,
                    "203.0.113.7",
                )]),
            });
        create_schema(VerificationEngine::new(
            Denylist::default(),
            Arc::new(resolver),
        ))
    }

    #[actix_web::test]
    async fn test_graphql_handler() {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(schema()))
                .route("/graphql", web::post().to(graphql_handler)),
        )
        .await;

        let req = TestRequest::post()
            .uri("/graphql")
            .insert_header(ContentType::json())
            .set_json(json!({
                "query": "query { health { status timestamp } }"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["health"]["status"], "UP");
        assert!(body["data"]["health"]["timestamp"].is_string());

        // Unknown fields still come back as 200 with errors
        let req = TestRequest::post()
            .uri("/graphql")
            .insert_header(ContentType::json())
            .set_json(json!({ "query": "query { invalid_field }" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_graphql_handler_verify_email() {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(schema()))
                .route("/api/v1/graphql", web::post().to(graphql_handler)),
        )
        .await;

        let req = TestRequest::post()
            .uri("/api/v1/graphql")
            .insert_header(ContentType::json())
            .set_json(json!({
                "query": "query($email: String!) { verifyEmail(email: $email) { status reason } }",
                "variables": { "email": "user@mailinator.com" }
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["verifyEmail"]["status"], "invalid");
        assert_eq!(body["data"]["verifyEmail"]["reason"], "disposable_domain");
    }

    #[actix_web::test]
    async fn test_graphql_playground() {
        let app = init_service(
            App::new().service(
                web::resource("/playground").route(web::get().to(graphql_playground)),
            ),
        )
        .await;

        let req = TestRequest::get().uri("/playground").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(content_type, "text/html; charset=utf-8");

        let body_bytes = test::read_body(resp).await;
        let body = std::str::from_utf8(&body_bytes).unwrap();
        assert!(body.contains("GraphQL Playground"));
        assert!(body.contains("/api/v1/graphql"));
    }
}
