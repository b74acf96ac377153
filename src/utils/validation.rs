use crate::error::{AppError, AppResult};
use crate::models::Role;

/// Rejects missing or whitespace-only required strings; `field` is the wire
/// name reported back to the caller.
pub fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

/// Evaluation and synergy ratings share the 0..=3 scale. Out-of-range values
/// are rejected, not clamped.
pub fn validate_rating(field: &str, value: i32) -> AppResult<()> {
    if !(0..=3).contains(&value) {
        return Err(AppError::ValidationError(format!(
            "{field} must be between 0 and 3"
        )));
    }
    Ok(())
}

pub fn validate_day_of_week(day: i32) -> AppResult<()> {
    if !(0..=6).contains(&day) {
        return Err(AppError::ValidationError(
            "dayOfWeek must be between 0 and 6".to_string(),
        ));
    }
    Ok(())
}

/// Parses role tokens, rejecting the whole submission when any token is
/// unknown; the error names every invalid token.
pub fn parse_roles(tokens: &[String]) -> AppResult<Vec<Role>> {
    let mut parsed = Vec::with_capacity(tokens.len());
    let mut invalid = Vec::new();

    for token in tokens {
        match Role::parse(token) {
            Some(role) => parsed.push(role),
            None => invalid.push(token.as_str()),
        }
    }

    if !invalid.is_empty() {
        let valid = Role::ALL.map(|r| r.as_str()).join(", ");
        return Err(AppError::ValidationError(format!(
            "Invalid roles: {} (valid roles: {valid})",
            invalid.join(", ")
        )));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("name", "Faker").is_ok());
        assert!(require_non_blank("name", "").is_err());
        assert!(require_non_blank("name", "   ").is_err());
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(validate_rating("engage", 0).is_ok());
        assert!(validate_rating("engage", 3).is_ok());
        assert!(validate_rating("engage", -1).is_err());
        assert!(validate_rating("engage", 4).is_err());
        assert!(validate_rating("rating", 5).is_err());
    }

    #[test]
    fn test_validate_day_of_week_bounds() {
        for day in 0..=6 {
            assert!(validate_day_of_week(day).is_ok());
        }
        assert!(validate_day_of_week(-1).is_err());
        assert!(validate_day_of_week(7).is_err());
    }

    #[test]
    fn test_parse_roles_valid() {
        let roles = parse_roles(&["TOP".to_string(), "SUP".to_string()]).unwrap();
        assert_eq!(roles, vec![Role::Top, Role::Sup]);
    }

    #[test]
    fn test_parse_roles_empty_set() {
        assert_eq!(parse_roles(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_parse_roles_names_invalid_tokens() {
        let err = parse_roles(&["TOP".to_string(), "BOT".to_string()]).unwrap_err();
        match err {
            AppError::ValidationError(msg) => assert!(msg.contains("BOT")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
