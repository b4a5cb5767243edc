use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Verification Status
///
/// Top-level outcome of a verification run.
///
/// - `valid`: every check passed, the domain accepts mail
/// - `invalid`: the address should be rejected
/// - `risky`: the address could not be confirmed and should be flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
    Risky,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Risky => "risky",
        }
    }
}

/// # Verification Reason
///
/// Fixed reason code attached to every [`Status`]. There are no free-text
/// reasons; each code belongs to exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    BadSyntax,
    DisposableDomain,
    RoleBased,
    NoMx,
    SuspiciousDomain,
    DnsTimeout,
    DnsVerified,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BadSyntax => "bad_syntax",
            Self::DisposableDomain => "disposable_domain",
            Self::RoleBased => "role_based",
            Self::NoMx => "no_mx",
            Self::SuspiciousDomain => "suspicious_domain",
            Self::DnsTimeout => "dns_timeout",
            Self::DnsVerified => "dns_verified",
        }
    }

    /// The only status this reason can be reported with.
    pub fn status(self) -> Status {
        match self {
            Self::BadSyntax | Self::DisposableDomain | Self::RoleBased | Self::NoMx => {
                Status::Invalid
            }
            Self::SuspiciousDomain | Self::DnsTimeout => Status::Risky,
            Self::DnsVerified => Status::Valid,
        }
    }
}

/// # Verification Result
///
/// The `(status, reason)` pair returned for one address.
///
/// Fields are private: a result can only be built from a [`Reason`], which
/// fixes the status. This keeps every output inside the seven allowed pairs.
///
/// ## Example JSON
/// ```json
/// { "status": "invalid", "reason": "no_mx" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct VerificationResult {
    status: Status,
    reason: Reason,
}

impl VerificationResult {
    pub fn from_reason(reason: Reason) -> Self {
        Self {
            status: reason.status(),
            reason,
        }
    }

    pub fn bad_syntax() -> Self {
        Self::from_reason(Reason::BadSyntax)
    }

    pub fn disposable_domain() -> Self {
        Self::from_reason(Reason::DisposableDomain)
    }

    pub fn role_based() -> Self {
        Self::from_reason(Reason::RoleBased)
    }

    pub fn no_mx() -> Self {
        Self::from_reason(Reason::NoMx)
    }

    pub fn suspicious_domain() -> Self {
        Self::from_reason(Reason::SuspiciousDomain)
    }

    pub fn dns_timeout() -> Self {
        Self::from_reason(Reason::DnsTimeout)
    }

    pub fn dns_verified() -> Self {
        Self::from_reason(Reason::DnsVerified)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }
}

/// An address that passed the structural check, split on its first `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local: String,
    domain: String,
}

impl EmailAddress {
    pub(crate) fn new(local: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            domain: domain.into(),
        }
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}
