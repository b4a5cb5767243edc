use std::sync::LazyLock;

use regex::Regex;

use crate::error::SyntaxError;
use crate::models::EmailAddress;

static ADDRESS_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("address shape pattern is valid")
});

/// Checks the gross structure of an address and splits it.
///
/// Accepted shape: exactly one `@`, non-empty text without whitespace on both
/// sides, and a domain holding a `.` with non-empty text on each side of it.
/// This is intentionally looser than RFC 5322; the DNS checks that follow do
/// the real filtering.
///
/// # Examples
/// ```
/// use email_verifier::validation::syntax::validate;
///
/// let address = validate("jane.doe@example.com").unwrap();
/// assert_eq!(address.local(), "jane.doe");
/// assert_eq!(address.domain(), "example.com");
///
/// assert!(validate("jane.doe@localhost").is_err());
/// ```
pub fn validate(raw: &str) -> Result<EmailAddress, SyntaxError> {
    if !ADDRESS_SHAPE.is_match(raw) {
        return Err(SyntaxError::BadSyntax);
    }

    let (local, domain) = raw.split_once('@').ok_or(SyntaxError::BadSyntax)?;
    if local.is_empty() || domain.is_empty() {
        return Err(SyntaxError::BadSyntax);
    }

    Ok(EmailAddress::new(local, domain))
}
