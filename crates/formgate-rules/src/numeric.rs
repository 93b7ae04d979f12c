//! Numeric validation over string-typed form values
//!
//! Form field values arrive as strings, so these validators parse first and
//! treat unparseable input as a failure.

/// Validates that a string parses as a number at all
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Validates minimum value
pub fn validate_min(value: &str, min: f64) -> Result<(), String> {
    let parsed = parse(value)?;
    if parsed >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

/// Validates maximum value
pub fn validate_max(value: &str, max: f64) -> Result<(), String> {
    let parsed = parse(value)?;
    if parsed <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}", max))
    }
}

/// Validates value is within range
pub fn validate_range(value: &str, min: f64, max: f64) -> Result<(), String> {
    let parsed = parse(value)?;
    if parsed >= min && parsed <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {}", min, max))
    }
}

fn parse(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| "Must be a number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("42"));
        assert!(is_numeric("3.14"));
        assert!(is_numeric(" 7 "));
        assert!(!is_numeric("seven"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn test_min_validation() {
        assert!(validate_min("10", 5.0).is_ok());
        assert!(validate_min("5", 5.0).is_ok());
        assert!(validate_min("3", 5.0).is_err());
        assert!(validate_min("abc", 5.0).is_err());
    }

    #[test]
    fn test_max_validation() {
        assert!(validate_max("5", 10.0).is_ok());
        assert!(validate_max("10", 10.0).is_ok());
        assert!(validate_max("15", 10.0).is_err());
    }

    #[test]
    fn test_range_validation() {
        assert!(validate_range("5", 1.0, 10.0).is_ok());
        assert!(validate_range("1", 1.0, 10.0).is_ok());
        assert!(validate_range("10", 1.0, 10.0).is_ok());
        assert!(validate_range("0", 1.0, 10.0).is_err());
        assert!(validate_range("11", 1.0, 10.0).is_err());
        assert!(validate_range("", 1.0, 10.0).is_err());
    }
}
