use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::error::LookupError;

pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

const DNS_JSON: &str = "application/dns-json";

/// Record types the verifier asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Mx,
    A,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mx => "MX",
            Self::A => "A",
        }
    }

    /// IANA RR type number, as found in the `type` field of JSON answers.
    pub fn code(self) -> u16 {
        match self {
            Self::Mx => 15,
            Self::A => 1,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub data: String,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}

/// Answers for one (domain, record type) query, in resolver order. May be empty.
pub type DnsAnswerSet = Vec<DnsRecord>;

/// Parsed `data` of an MX answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub preference: u16,
    /// Lowercased, without the trailing dot. Empty for a null MX (`0 .`).
    pub exchange: String,
}

impl MxRecord {
    /// Reads `"<preference> <exchange>"`. Returns `None` for anything else.
    pub fn parse(data: &str) -> Option<Self> {
        let mut parts = data.split_whitespace();
        let preference = parts.next()?.parse::<u16>().ok()?;
        let exchange = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            preference,
            exchange: exchange.trim_end_matches('.').to_ascii_lowercase(),
        })
    }
}

/// Existence queries against a DNS-over-HTTPS service.
///
/// Implementations are stateless: every call is one outbound request with
/// its own timeout, no retry and no cache. An empty answer is a successful
/// lookup; only transport problems, timeouts or unreadable responses are
/// errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsAnswerSet, LookupError>;
}

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Status", default)]
    status: u16,
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    record_type: u16,
    #[serde(rename = "TTL", default)]
    ttl: u32,
    data: String,
}

/// [`NameResolver`] speaking the JSON flavour of DNS-over-HTTPS
/// (`GET ?name=..&type=..` with `Accept: application/dns-json`), as served by
/// Cloudflare and Google.
///
/// Each lookup is bounded twice: by the HTTP client timeout and by a
/// `tokio::time::timeout` around the whole exchange, body included. Dropping
/// the lookup future aborts the request.
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl DohResolver {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("email-verifier/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[tracing::instrument(name = "doh_lookup", skip(self), fields(endpoint = %self.endpoint))]
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsAnswerSet, LookupError> {
        let started = Instant::now();
        let result = match tokio::time::timeout(self.timeout, self.query(domain, record_type)).await
        {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout {
                domain: domain.to_string(),
                record_type,
                elapsed: started.elapsed(),
            }),
        };

        match &result {
            Ok(answers) => tracing::debug!(
                answers = answers.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "lookup resolved"
            ),
            Err(e) => tracing::warn!(error = %e, "lookup failed"),
        }
        result
    }

    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsAnswerSet, LookupError> {
        let transport = |source: reqwest::Error| {
            if source.is_timeout() {
                LookupError::Timeout {
                    domain: domain.to_string(),
                    record_type,
                    elapsed: self.timeout,
                }
            } else {
                LookupError::Transport {
                    domain: domain.to_string(),
                    record_type,
                    source,
                }
            }
        };

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", domain), ("type", record_type.as_str())])
            .header(ACCEPT, DNS_JSON)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::HttpStatus {
                domain: domain.to_string(),
                record_type,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let parsed: DohResponse =
            serde_json::from_slice(&body).map_err(|e| LookupError::Malformed {
                domain: domain.to_string(),
                record_type,
                message: e.to_string(),
            })?;

        if parsed.status != 0 {
            // NXDOMAIN and friends come back without answers
            tracing::debug!(rcode = parsed.status, "non-zero DNS response code");
        }

        Ok(parsed
            .answer
            .into_iter()
            .filter(|answer| answer.record_type == record_type.code())
            .map(|answer| DnsRecord::new(answer.name, record_type, answer.ttl, answer.data))
            .collect())
    }
}

#[async_trait]
impl NameResolver for DohResolver {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsAnswerSet, LookupError> {
        self.resolve(domain, record_type).await
    }
}
