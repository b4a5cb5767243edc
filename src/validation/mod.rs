/// Structural address check.
///
/// Accepts `local@domain.tld` shapes: exactly one `@`, no whitespace, and a
/// dot inside the domain with text on both sides.
///
/// # Examples
/// ```
/// use email_verifier::validation::syntax::validate;
///
/// assert!(validate("user.name+tag@example.com").is_ok());
/// assert!(validate("user@localhost").is_err());
/// ```
pub mod syntax;

/// Disposable-domain and role-based local part membership sets, injected into
/// the engine as configuration.
pub mod denylist;

/// Named, independent predicates flagging fabricated-looking domains.
pub mod suspicion;

/// MX / A existence lookups over DNS-over-HTTPS.
///
/// [`NameResolver`](resolver::NameResolver) is the seam the engine depends
/// on; [`DohResolver`](resolver::DohResolver) is the production
/// implementation.
pub mod resolver;

/// Ordered decision table combining every check into one verdict.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use email_verifier::validation::denylist::Denylist;
/// use email_verifier::validation::engine::VerificationEngine;
/// use email_verifier::validation::resolver::{DohResolver, DEFAULT_DOH_ENDPOINT};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = DohResolver::new(DEFAULT_DOH_ENDPOINT, Duration::from_secs(3))?;
/// let engine = VerificationEngine::new(Denylist::default(), Arc::new(resolver));
/// let result = engine.verify("jane@example.com").await?;
/// println!("{} / {}", result.status().as_str(), result.reason().as_str());
/// # Ok(())
/// # }
/// ```
pub mod engine;

pub use denylist::Denylist;
pub use engine::{AddressHint, Rule, VerificationEngine};
pub use resolver::{DnsAnswerSet, DnsRecord, DohResolver, NameResolver, RecordType};
pub use suspicion::{DomainSuspicionVerdict, SuspicionHeuristic};
