//! Priority vocabulary parsing.

use crate::error::TaskpadError;
use crate::model::Priority;

/// Parse a priority value from the notes sub-language.
///
/// Accepts the long and short forms case-insensitively: `high`/`h`,
/// `medium`/`m`, `low`/`l`.
///
/// # Errors
///
/// Returns [`TaskpadError::UnknownInput`] for anything outside the
/// vocabulary.
pub fn parse_priority(value: &str) -> Result<Priority, TaskpadError> {
    match value.to_ascii_lowercase().as_str() {
        "high" | "h" => Ok(Priority::High),
        "medium" | "m" => Ok(Priority::Medium),
        "low" | "l" => Ok(Priority::Low),
        _ => Err(TaskpadError::UnknownInput(format!(
            "Unknown priority: {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priority_long_forms() {
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
        assert_eq!(parse_priority("medium").unwrap(), Priority::Medium);
        assert_eq!(parse_priority("low").unwrap(), Priority::Low);
    }

    #[test]
    fn test_parse_priority_short_forms() {
        assert_eq!(parse_priority("h").unwrap(), Priority::High);
        assert_eq!(parse_priority("m").unwrap(), Priority::Medium);
        assert_eq!(parse_priority("l").unwrap(), Priority::Low);
    }

    #[test]
    fn test_parse_priority_case_insensitive() {
        assert_eq!(parse_priority("HIGH").unwrap(), Priority::High);
        assert_eq!(parse_priority("High").unwrap(), Priority::High);
        assert_eq!(parse_priority("M").unwrap(), Priority::Medium);
    }

    #[test]
    fn test_parse_priority_unknown() {
        let err = parse_priority("urgent").unwrap_err();
        assert!(matches!(err, TaskpadError::UnknownInput(ref msg) if msg.contains("urgent")));
    }
}
