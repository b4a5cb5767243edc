use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Domains of throwaway-mailbox providers known out of the box.
pub const SEED_DISPOSABLE_DOMAINS: &[&str] = &[
    "mailinator.com",
    "10minutemail.com",
    "guerrillamail.com",
    "tempmail.org",
    "throwaway.email",
    "maildrop.cc",
];

/// Local parts that name a function rather than a person.
pub const SEED_ROLE_LOCAL_PARTS: &[&str] = &[
    "info", "support", "admin", "sales", "contact", "noreply", "no-reply",
];

/// Static membership sets for disposable domains and role-based local parts.
///
/// Entries are stored lowercased and compared case-insensitively with exact
/// matching (no suffix or subdomain matching). A `Denylist` is built once at
/// start-up and handed to the engine; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    disposable_domains: HashSet<String>,
    role_local_parts: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(
            SEED_DISPOSABLE_DOMAINS.iter().copied(),
            SEED_ROLE_LOCAL_PARTS.iter().copied(),
        )
    }
}

impl Denylist {
    pub fn new<D, R>(disposable_domains: D, role_local_parts: R) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self {
            disposable_domains: normalize_all(disposable_domains),
            role_local_parts: normalize_all(role_local_parts),
        }
    }

    /// A denylist with nothing in it.
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<&str>(), std::iter::empty::<&str>())
    }

    pub fn with_disposable_domains<I>(mut self, domains: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.disposable_domains.extend(normalize_all(domains));
        self
    }

    pub fn with_role_local_parts<I>(mut self, local_parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.role_local_parts.extend(normalize_all(local_parts));
        self
    }

    /// Seed sets extended with the entries of the given files, if any.
    pub fn load(
        disposable_file: Option<&Path>,
        role_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut denylist = Self::default();
        if let Some(path) = disposable_file {
            let entries = read_entries(path)?;
            tracing::info!(path = %path.display(), count = entries.len(), "loaded disposable domains");
            denylist = denylist.with_disposable_domains(entries);
        }
        if let Some(path) = role_file {
            let entries = read_entries(path)?;
            tracing::info!(path = %path.display(), count = entries.len(), "loaded role-based local parts");
            denylist = denylist.with_role_local_parts(entries);
        }
        Ok(denylist)
    }

    pub fn is_disposable(&self, domain: &str) -> bool {
        self.disposable_domains.contains(&domain.to_lowercase())
    }

    pub fn is_role_based(&self, local: &str) -> bool {
        self.role_local_parts.contains(&local.to_lowercase())
    }

    pub fn disposable_count(&self) -> usize {
        self.disposable_domains.len()
    }

    pub fn role_count(&self) -> usize {
        self.role_local_parts.len()
    }
}

fn normalize_all<I>(entries: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// One entry per line; blank lines and `#` comments are skipped.
pub(crate) fn parse_entries(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_entries(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::DenylistFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_entries(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn seed_disposable_domains_match_case_insensitively() {
        let denylist = Denylist::default();
        for domain in SEED_DISPOSABLE_DOMAINS {
            assert!(denylist.is_disposable(domain), "{domain} should be disposable");
        }
        assert!(denylist.is_disposable("Mailinator.COM"));
        assert!(denylist.is_disposable("MAILDROP.CC"));
    }

    #[test]
    fn disposable_match_is_exact() {
        let denylist = Denylist::default();
        assert!(!denylist.is_disposable("gmail.com"));
        assert!(!denylist.is_disposable("eu.mailinator.com"));
        assert!(!denylist.is_disposable("mailinator.com.evil.org"));
    }

    #[test]
    fn seed_role_local_parts_match_case_insensitively() {
        let denylist = Denylist::default();
        for local in SEED_ROLE_LOCAL_PARTS {
            assert!(denylist.is_role_based(local), "{local} should be role-based");
        }
        assert!(denylist.is_role_based("INFO"));
        assert!(denylist.is_role_based("No-Reply"));
        assert!(!denylist.is_role_based("john.doe"));
        assert!(!denylist.is_role_based("info.desk"));
    }

    #[test]
    fn entries_can_be_added_without_code_change() {
        let denylist = Denylist::default()
            .with_disposable_domains(["YopMail.com "])
            .with_role_local_parts(["billing"]);

        assert!(denylist.is_disposable("yopmail.com"));
        assert!(denylist.is_role_based("Billing"));
        assert_eq!(denylist.disposable_count(), SEED_DISPOSABLE_DOMAINS.len() + 1);
        assert_eq!(denylist.role_count(), SEED_ROLE_LOCAL_PARTS.len() + 1);
    }

    #[test]
    fn empty_denylist_matches_nothing() {
        let denylist = Denylist::empty();
        assert!(!denylist.is_disposable("mailinator.com"));
        assert!(!denylist.is_role_based("info"));
    }

    #[test]
    fn parse_entries_skips_comments_and_blanks() {
        let entries = parse_entries("# disposable\nfoo.com\n\n  bar.net  # trailing\n#baz.org\n");
        assert_eq!(entries, vec!["foo.com".to_string(), "bar.net".to_string()]);
    }

    #[test]
    fn load_extends_seed_sets_from_files() {
        let mut disposable = tempfile::NamedTempFile::new().unwrap();
        writeln!(disposable, "trashmail.de\nSharklasers.com").unwrap();
        let mut roles = tempfile::NamedTempFile::new().unwrap();
        writeln!(roles, "# roles\nhr").unwrap();

        let denylist = Denylist::load(Some(disposable.path()), Some(roles.path())).unwrap();

        assert!(denylist.is_disposable("trashmail.de"));
        assert!(denylist.is_disposable("sharklasers.com"));
        assert!(denylist.is_disposable("mailinator.com"));
        assert!(denylist.is_role_based("hr"));
        assert!(denylist.is_role_based("support"));
    }

    #[test]
    fn load_without_files_is_the_seed() {
        assert_eq!(Denylist::load(None, None).unwrap(), Denylist::default());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = Denylist::load(Some(&missing), None).unwrap_err();
        assert!(matches!(err, ConfigError::DenylistFile { .. }));
    }
}
