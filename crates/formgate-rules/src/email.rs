//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    if email.contains("..") {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}

/// Check if email belongs to one of the given domains
pub fn has_domain(email: &str, domains: &[&str]) -> bool {
    if let Some(domain) = email.split('@').nth(1) {
        domains.iter().any(|d| d.eq_ignore_ascii_case(domain))
    } else {
        false
    }
}
