//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_with_default(var, std::env::var(var).ok().as_deref(), default)
}

/// Same as [`env_parse_with_default`] but over an already-read raw value.
pub fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let result: u32 = parse_with_default("ASIDES_TEST", Some("42"), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_parse_invalid_value() {
        let result: u32 = parse_with_default("ASIDES_TEST", Some("banana"), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_missing_value() {
        let result: u32 = parse_with_default("ASIDES_TEST", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_empty_value() {
        let result: u32 = parse_with_default("ASIDES_TEST", Some(""), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_missing_var() {
        let result: u16 = env_parse_with_default("ASIDES_TEST_MISSING_98273", 4567);
        assert_eq!(result, 4567);
    }
}
