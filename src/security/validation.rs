use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Simplified RFC 5322, at least one dot in the domain
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    )
    .expect("email pattern is valid")
});

/// Input checks shared by the request validators
pub struct Validator;

impl Validator {
    /// ```
    /// use movie_catalog::security::Validator;
    ///
    /// assert!(Validator::validate_email("user@example.com"));
    /// assert!(!Validator::validate_email("invalid-email"));
    /// ```
    pub fn validate_email(email: &str) -> bool {
        if email.is_empty() || email.len() > 255 || email.contains("..") {
            return false;
        }

        EMAIL_REGEX.is_match(email)
    }

    /// Length in characters, not bytes, within `min..=max`
    pub fn validate_length(input: &str, min: usize, max: usize) -> bool {
        let len = input.chars().count();
        len >= min && len <= max
    }

    pub fn validate_password(password: &str) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let len = password.chars().count();

        if len < 8 {
            errors.push("Password must be at least 8 characters long".to_string());
        }

        if len > 128 {
            errors.push("Password must not exceed 128 characters".to_string());
        }

        if !password.is_empty() && password.trim().is_empty() {
            errors.push("Password must not be blank".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Required trimmed text within `min..=max` characters
    pub fn validate_text(field: &str, input: &str, min: usize, max: usize) -> Result<(), String> {
        let trimmed = input.trim();

        if min > 0 && trimmed.is_empty() {
            return Err(format!("{field} is required"));
        }

        if !Self::validate_length(trimmed, min, max) {
            return Err(format!("{field} must be between {min} and {max} characters"));
        }

        Ok(())
    }
}
