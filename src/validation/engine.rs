use std::sync::Arc;

use crate::error::{LookupError, VerifyError};
use crate::models::{EmailAddress, VerificationResult};
use crate::validation::denylist::Denylist;
use crate::validation::resolver::{DnsAnswerSet, MxRecord, NameResolver, RecordType};
use crate::validation::suspicion::SuspicionHeuristic;
use crate::validation::syntax;

/// Advisory outcome of the A-record lookup.
///
/// The A lookup runs next to the MX lookup but no [`Rule`] reads it: a failed
/// lookup becomes [`AddressHint::Absent`] and the verdict is the same whatever
/// this holds. It is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressHint {
    Present(usize),
    Absent,
}

impl AddressHint {
    fn from_lookup(result: Result<DnsAnswerSet, LookupError>) -> Self {
        match result {
            Ok(answers) if !answers.is_empty() => Self::Present(answers.len()),
            Ok(_) => Self::Absent,
            Err(e) => {
                tracing::debug!(error = %e, "A lookup failed, treated as absent");
                Self::Absent
            }
        }
    }
}

/// DNS facts gathered for one address, fetched once on first use.
#[derive(Debug)]
struct DnsEvidence {
    /// `None` when the MX lookup failed or timed out.
    mx: Option<Vec<MxRecord>>,
    a: AddressHint,
}

/// One row of the decision table. Rows are evaluated in [`Rule::ORDER`] and
/// the first one that holds decides the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    BadSyntax,
    DisposableDomain,
    RoleBased,
    MxLookupFailed,
    NoMx,
    SuspiciousDomain,
}

impl Rule {
    pub const ORDER: [Rule; 6] = [
        Rule::BadSyntax,
        Rule::DisposableDomain,
        Rule::RoleBased,
        Rule::MxLookupFailed,
        Rule::NoMx,
        Rule::SuspiciousDomain,
    ];

    pub fn verdict(self) -> VerificationResult {
        match self {
            Rule::BadSyntax => VerificationResult::bad_syntax(),
            Rule::DisposableDomain => VerificationResult::disposable_domain(),
            Rule::RoleBased => VerificationResult::role_based(),
            Rule::MxLookupFailed => VerificationResult::dns_timeout(),
            Rule::NoMx => VerificationResult::no_mx(),
            Rule::SuspiciousDomain => VerificationResult::suspicious_domain(),
        }
    }

    /// Whether this row needs DNS evidence. Rows that do not never touch the
    /// network.
    pub fn needs_dns(self) -> bool {
        matches!(self, Rule::MxLookupFailed | Rule::NoMx)
    }
}

/// Verdict when no rule holds.
pub fn fallthrough_verdict() -> VerificationResult {
    VerificationResult::dns_verified()
}

/// Per-call state while walking the decision table.
struct Evaluation<'a> {
    engine: &'a VerificationEngine,
    address: Option<EmailAddress>,
    dns: Option<DnsEvidence>,
}

impl<'a> Evaluation<'a> {
    fn new(engine: &'a VerificationEngine, raw: &str) -> Self {
        Self {
            engine,
            address: syntax::validate(raw).ok(),
            dns: None,
        }
    }

    async fn holds(&mut self, rule: Rule) -> Result<bool, VerifyError> {
        let Some(address) = self.address.clone() else {
            // Every later row needs a parsed address
            return Ok(rule == Rule::BadSyntax);
        };

        let holds = match rule {
            Rule::BadSyntax => false,
            Rule::DisposableDomain => self.engine.denylist.is_disposable(address.domain()),
            Rule::RoleBased => self.engine.denylist.is_role_based(address.local()),
            Rule::MxLookupFailed => self.dns(&address).await?.mx.is_none(),
            Rule::NoMx => self
                .dns(&address)
                .await?
                .mx
                .as_ref()
                .is_some_and(|records| records.is_empty()),
            Rule::SuspiciousDomain => {
                let verdict = self.engine.heuristic.assess(address.domain());
                if verdict.suspicious {
                    tracing::debug!(matched = ?verdict.matched, "suspicion predicates fired");
                }
                verdict.suspicious
            }
        };
        Ok(holds)
    }

    async fn dns(&mut self, address: &EmailAddress) -> Result<&DnsEvidence, VerifyError> {
        let evidence = match self.dns.take() {
            Some(evidence) => evidence,
            None => self.engine.gather_dns(address.domain()).await?,
        };
        Ok(self.dns.insert(evidence))
    }
}

/// Runs the ordered checks for one address and maps the outcome to a
/// [`VerificationResult`].
///
/// The engine owns only immutable configuration and a shared resolver, so it
/// is cheap to clone and safe to use from many requests at once.
#[derive(Clone)]
pub struct VerificationEngine {
    denylist: Arc<Denylist>,
    heuristic: Arc<SuspicionHeuristic>,
    resolver: Arc<dyn NameResolver>,
}

impl VerificationEngine {
    pub fn new(denylist: Denylist, resolver: Arc<dyn NameResolver>) -> Self {
        Self::with_heuristic(denylist, SuspicionHeuristic::default(), resolver)
    }

    pub fn with_heuristic(
        denylist: Denylist,
        heuristic: SuspicionHeuristic,
        resolver: Arc<dyn NameResolver>,
    ) -> Self {
        Self {
            denylist: Arc::new(denylist),
            heuristic: Arc::new(heuristic),
            resolver,
        }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Classify `raw` as valid, invalid or risky.
    ///
    /// Malformed input and DNS failures come back as ordinary results. The
    /// only error is a fault outside the verdict model, such as an MX answer
    /// the resolver could not have produced legitimately.
    ///
    /// # Errors
    /// [`VerifyError::MalformedAnswer`] when an MX record cannot be read as
    /// `<preference> <exchange>`.
    #[tracing::instrument(name = "verify", skip_all, fields(domain = tracing::field::Empty))]
    pub async fn verify(&self, raw: &str) -> Result<VerificationResult, VerifyError> {
        let mut evaluation = Evaluation::new(self, raw);
        if let Some(address) = &evaluation.address {
            tracing::Span::current().record("domain", address.domain());
        }

        for rule in Rule::ORDER {
            if evaluation.holds(rule).await? {
                let verdict = rule.verdict();
                tracing::info!(
                    rule = ?rule,
                    status = verdict.status().as_str(),
                    reason = verdict.reason().as_str(),
                    "verdict"
                );
                return Ok(verdict);
            }
        }

        if let Some(dns) = &evaluation.dns {
            tracing::debug!(a_records = ?dns.a, "address hint (advisory)");
        }
        let verdict = fallthrough_verdict();
        tracing::info!(
            status = verdict.status().as_str(),
            reason = verdict.reason().as_str(),
            "verdict"
        );
        Ok(verdict)
    }

    /// MX and A lookups issued together. Only the MX side feeds the table.
    async fn gather_dns(&self, domain: &str) -> Result<DnsEvidence, VerifyError> {
        let (mx, a) = futures::join!(
            self.resolver.lookup(domain, RecordType::Mx),
            self.resolver.lookup(domain, RecordType::A),
        );

        let mx = match mx {
            Ok(answers) => Some(parse_mx_answers(domain, &answers)?),
            Err(e) => {
                tracing::warn!(error = %e, "MX lookup failed");
                None
            }
        };

        Ok(DnsEvidence {
            mx,
            a: AddressHint::from_lookup(a),
        })
    }
}

fn parse_mx_answers(domain: &str, answers: &DnsAnswerSet) -> Result<Vec<MxRecord>, VerifyError> {
    answers
        .iter()
        .map(|record| {
            MxRecord::parse(&record.data).ok_or_else(|| VerifyError::MalformedAnswer {
                domain: domain.to_string(),
                data: record.data.clone(),
            })
        })
        .collect()
}
