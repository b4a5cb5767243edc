use std::sync::LazyLock;

use regex::Regex;

static LONG_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{5,}").expect("digit run pattern is valid"));

static SHORT_ALPHA_NUMERIC_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{1,3}[0-9]+\.").expect("short label pattern is valid"));

const PLACEHOLDER_WORDS: &[&str] = &["temp", "test", "fake", "spam"];

/// One named suspicion check over a domain string.
#[derive(Debug, Clone, Copy)]
pub struct Predicate {
    pub name: &'static str,
    pub check: fn(&str) -> bool,
}

/// A run of five or more consecutive digits anywhere in the domain.
pub fn long_digit_run(domain: &str) -> bool {
    LONG_DIGIT_RUN.is_match(domain)
}

/// "temp", "test", "fake" or "spam" anywhere in the domain, any case.
pub fn placeholder_word(domain: &str) -> bool {
    let lowered = domain.to_lowercase();
    PLACEHOLDER_WORDS.iter().any(|word| lowered.contains(word))
}

/// First label of 1-3 lowercase letters then digits, like `ab12.co`.
pub fn short_alpha_numeric_label(domain: &str) -> bool {
    SHORT_ALPHA_NUMERIC_LABEL.is_match(domain)
}

pub const DEFAULT_PREDICATES: &[Predicate] = &[
    Predicate {
        name: "long_digit_run",
        check: long_digit_run,
    },
    Predicate {
        name: "placeholder_word",
        check: placeholder_word,
    },
    Predicate {
        name: "short_alpha_numeric_label",
        check: short_alpha_numeric_label,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSuspicionVerdict {
    pub suspicious: bool,
    /// Names of the predicates that fired, in evaluation order.
    pub matched: Vec<&'static str>,
}

/// Logical OR of independent predicates over the domain string.
///
/// Pure and synchronous. New checks are added as further [`Predicate`]s
/// without touching the existing ones.
#[derive(Debug, Clone)]
pub struct SuspicionHeuristic {
    predicates: Vec<Predicate>,
}

impl Default for SuspicionHeuristic {
    fn default() -> Self {
        Self::with_predicates(DEFAULT_PREDICATES.to_vec())
    }
}

impl SuspicionHeuristic {
    pub fn with_predicates(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    pub fn assess(&self, domain: &str) -> DomainSuspicionVerdict {
        let matched: Vec<&'static str> = self
            .predicates
            .iter()
            .filter(|predicate| (predicate.check)(domain))
            .map(|predicate| predicate.name)
            .collect();

        DomainSuspicionVerdict {
            suspicious: !matched.is_empty(),
            matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_digit_run_needs_five_digits() {
        assert!(long_digit_run("user12345.com"));
        assert!(long_digit_run("mail.9876543.net"));
        assert!(!long_digit_run("user1234.com"));
        assert!(!long_digit_run("12.34.56.com"));
    }

    #[test]
    fn placeholder_word_is_case_insensitive() {
        assert!(placeholder_word("mytempbox.com"));
        assert!(placeholder_word("TESTING.org"));
        assert!(placeholder_word("FakeCorp.io"));
        assert!(placeholder_word("nospam.net"));
        assert!(!placeholder_word("legitcompany.com"));
    }

    #[test]
    fn short_alpha_numeric_label_matches_first_label_only() {
        assert!(short_alpha_numeric_label("ab12.co"));
        assert!(short_alpha_numeric_label("x1.com"));
        assert!(short_alpha_numeric_label("abc123.net"));
        assert!(!short_alpha_numeric_label("abcd12.co"));
        assert!(!short_alpha_numeric_label("ab12x.co"));
        assert!(!short_alpha_numeric_label("mail.ab12.co"));
        assert!(!short_alpha_numeric_label("AB12.co"));
        assert!(!short_alpha_numeric_label("12.co"));
    }

    #[test]
    fn assess_is_a_logical_or() {
        let heuristic = SuspicionHeuristic::default();

        let verdict = heuristic.assess("legitcompany.com");
        assert!(!verdict.suspicious);
        assert!(verdict.matched.is_empty());

        let verdict = heuristic.assess("test123.co");
        assert!(verdict.suspicious);
        assert_eq!(verdict.matched, vec!["placeholder_word"]);

        let verdict = heuristic.assess("ab12345.co");
        assert!(verdict.suspicious);
        assert_eq!(
            verdict.matched,
            vec!["long_digit_run", "short_alpha_numeric_label"]
        );
    }

    #[test]
    fn custom_predicates_extend_without_touching_defaults() {
        fn ends_with_xyz(domain: &str) -> bool {
            domain.ends_with(".xyz")
        }

        let mut predicates = DEFAULT_PREDICATES.to_vec();
        predicates.push(Predicate {
            name: "xyz_tld",
            check: ends_with_xyz,
        });
        let heuristic = SuspicionHeuristic::with_predicates(predicates);

        assert_eq!(heuristic.assess("shop.xyz").matched, vec!["xyz_tld"]);
        assert_eq!(heuristic.assess("fake.com").matched, vec!["placeholder_word"]);
    }
}
