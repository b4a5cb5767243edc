use super::email::EmailQuery;
use super::health::HealthQuery;
use crate::validation::VerificationEngine;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query: health plus email verification.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, EmailQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema with the engine attached as context data.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use email_verifier::graphql::schema::create_schema;
/// use email_verifier::validation::{Denylist, DohResolver, VerificationEngine};
///
/// let resolver = DohResolver::new("https://cloudflare-dns.com/dns-query", Duration::from_secs(3)).unwrap();
/// let schema = create_schema(VerificationEngine::new(Denylist::default(), Arc::new(resolver)));
/// ```
pub fn create_schema(engine: VerificationEngine) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(engine)
        .finish()
}
