//! String validation functions

use regex::Regex;

/// Rejects values that are empty or whitespace-only
pub fn is_non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Validates string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = s.chars().count();
    if len >= min && len <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {} characters", min, max))
    }
}

/// String matching validators
pub fn contains(s: &str, substring: &str) -> bool {
    s.contains(substring)
}

pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Check if string matches a regex pattern
///
/// An invalid pattern never matches.
pub fn matches_pattern(value: &str, pattern: &str) -> bool {
    if let Ok(regex) = Regex::new(pattern) {
        regex.is_match(value)
    } else {
        false
    }
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(is_non_empty("hello"));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty("   "));
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 3).is_ok());
        assert!(validate_min_length("hi", 3).is_err());

        assert!(validate_max_length("hello", 10).is_ok());
        assert!(validate_max_length("verylongstring", 5).is_err());

        assert!(validate_length("hello", 3, 10).is_ok());
        assert!(validate_length("hi", 3, 10).is_err());
        assert!(validate_length("verylongstring", 3, 10).is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(validate_max_length("żółć", 4).is_ok());
        assert!(validate_min_length("żółć", 4).is_ok());
    }

    #[test]
    fn test_string_matching() {
        assert!(contains("hello world", "world"));
        assert!(!contains("hello world", "foo"));

        assert!(starts_with("user_john", "user_"));
        assert!(!starts_with("admin_john", "user_"));

        assert!(ends_with("file.txt", ".txt"));
        assert!(!ends_with("file.doc", ".txt"));
    }

    #[test]
    fn test_pattern_matching() {
        assert!(matches_pattern("123-456-7890", r"^\d{3}-\d{3}-\d{4}$"));
        assert!(!matches_pattern("123456789", r"^\d{3}-\d{3}-\d{4}$"));
        // Invalid pattern never matches
        assert!(!matches_pattern("anything", "["));
    }

    #[test]
    fn test_enum_variant() {
        let allowed = &["pickup", "courier", "post"];
        assert!(is_one_of("pickup", allowed));
        assert!(!is_one_of("drone", allowed));
    }
}
