use async_graphql::{Context, ErrorExtensions, Object, Result, SimpleObject};

use crate::models::VerificationResult;
use crate::validation::VerificationEngine;

/// Verdict for one address.
///
/// `status` is one of `valid`, `invalid`, `risky`; `reason` is the fixed code
/// that goes with it (`dns_verified`, `bad_syntax`, `no_mx`, ...).
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct Verification {
    pub status: String,
    pub reason: String,
}

impl From<VerificationResult> for Verification {
    fn from(result: VerificationResult) -> Self {
        Self {
            status: result.status().as_str().to_string(),
            reason: result.reason().as_str().to_string(),
        }
    }
}

/// Email verification queries. Reads the [`VerificationEngine`] from the
/// schema data.
#[derive(Default)]
pub struct EmailQuery;

#[Object]
impl EmailQuery {
    /// Classify one address. Internal faults come back as a GraphQL error
    /// with `extensions.code = "INTERNAL_ERROR"`, never as a verdict.
    async fn verify_email(&self, ctx: &Context<'_>, email: String) -> Result<Verification> {
        let engine = ctx.data::<VerificationEngine>()?;
        match engine.verify(email.trim()).await {
            Ok(result) => Ok(result.into()),
            Err(e) => {
                tracing::error!(error = %e, "verification failed");
                Err(
                    async_graphql::Error::new("Email verification failed unexpectedly")
                        .extend_with(|_, ext| ext.set("code", "INTERNAL_ERROR")),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::schema::create_schema;
    use crate::validation::Denylist;
    use crate::validation::resolver::{DnsRecord, MockNameResolver, RecordType};
    use std::sync::Arc;

    fn engine_with(mx_data: Option<&'static str>) -> VerificationEngine {
        let mut resolver = MockNameResolver::new();
        resolver
            .expect_lookup()
            .returning(move |domain, record_type| match (record_type, mx_data) {
                (RecordType::Mx, Some(data)) => {
                    Ok(vec![DnsRecord::new(domain, RecordType::Mx, 60, data)])
                }
                _ => Ok(Vec::new()),
            });
        VerificationEngine::new(Denylist::default(), Arc::new(resolver))
    }

    const QUERY: &str = r#"
        query Verify($email: String!) {
            verifyEmail(email: $email) {
                status
                reason
            }
        }
    "#;

    async fn run(engine: VerificationEngine, email: &str) -> async_graphql::Response {
        let schema = create_schema(engine);
        let request = async_graphql::Request::new(QUERY)
            .variables(async_graphql::Variables::from_json(serde_json::json!({ "email": email })));
        schema.execute(request).await
    }

    #[test]
    fn test_verification_from_result() {
        let verification = Verification::from(VerificationResult::suspicious_domain());
        assert_eq!(verification.status, "risky");
        assert_eq!(verification.reason, "suspicious_domain");
    }

    #[tokio::test]
    async fn test_verify_email_valid() {
        let res = run(engine_with(Some("5 mx.legitcompany.com.")), "user@legitcompany.com").await;

        assert!(res.errors.is_empty(), "GraphQL errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();
        assert_eq!(data["verifyEmail"]["status"], "valid");
        assert_eq!(data["verifyEmail"]["reason"], "dns_verified");
    }

    #[tokio::test]
    async fn test_verify_email_role_based() {
        let res = run(engine_with(None), "support@legitcompany.com").await;

        assert!(res.errors.is_empty());
        let data = res.data.into_json().unwrap();
        assert_eq!(data["verifyEmail"]["status"], "invalid");
        assert_eq!(data["verifyEmail"]["reason"], "role_based");
    }

    #[tokio::test]
    async fn test_verify_email_suspicious() {
        let res = run(engine_with(Some("10 mx.ab12.co.")), " user@ab12.co ").await;

        let data = res.data.into_json().unwrap();
        assert_eq!(data["verifyEmail"]["status"], "risky");
        assert_eq!(data["verifyEmail"]["reason"], "suspicious_domain");
    }

    #[tokio::test]
    async fn test_verify_email_internal_fault() {
        let res = run(engine_with(Some("???")), "user@legitcompany.com").await;

        assert_eq!(res.errors.len(), 1);
        assert_eq!(res.errors[0].message, "Email verification failed unexpectedly");
        let error = serde_json::to_value(&res.errors[0]).unwrap();
        assert_eq!(error["extensions"]["code"], "INTERNAL_ERROR");
    }
}
