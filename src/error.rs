use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::validation::resolver::RecordType;

/// Structural rejection of a raw address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("address does not match local@domain.tld")]
    BadSyntax,
}

/// Failure of a single DNS-over-HTTPS query.
///
/// Every variant means the same thing to the engine: the lookup could not be
/// resolved. The split exists for logging.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{record_type} lookup for {domain} timed out after {elapsed:?}")]
    Timeout {
        domain: String,
        record_type: RecordType,
        elapsed: Duration,
    },

    #[error("{record_type} lookup for {domain} failed: {source}")]
    Transport {
        domain: String,
        record_type: RecordType,
        #[source]
        source: reqwest::Error,
    },

    #[error("{record_type} lookup for {domain} returned HTTP {status}")]
    HttpStatus {
        domain: String,
        record_type: RecordType,
        status: u16,
    },

    #[error("{record_type} lookup for {domain} returned an unreadable body: {message}")]
    Malformed {
        domain: String,
        record_type: RecordType,
        message: String,
    },
}

/// Fault outside the three verdict statuses.
///
/// The ingress layer reports this as an internal error; it must never be
/// folded into a `valid` result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("MX answer for {domain} is malformed: {data:?}")]
    MalformedAnswer { domain: String, data: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("failed to read denylist file {path}: {source}")]
    DenylistFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
