// Field Validators - Reusable validation components
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator with various constraints
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    not_empty: bool,
    trim: bool,
    message: Option<String>,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { min_length: None, max_length: None, not_empty: false, trim: true, message: None }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Replace the emptiness message
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };
        let len = val.chars().count();

        if self.not_empty && val.is_empty() {
            return Err(self.message.clone().unwrap_or_else(|| "Value cannot be empty".to_string()));
        }

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("Must be at least {} characters", min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("Must not exceed {} characters", max));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

static EMAIL_REGEX: Lazy<Option<regex::Regex>> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok()
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let matches = EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(value.trim()));
        if !matches {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

/// Calendar date validator for `YYYY-MM-DD` input
///
/// Blank input passes; combine with [`StringValidator::not_empty`] when the
/// date is mandatory.
#[derive(Debug, Clone, Default)]
pub struct DateValidator;

impl DateValidator {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new() -> Self {
        Self
    }

    /// Parse trimmed input; blank yields `Ok(None)`
    pub fn parse(value: &str) -> Result<Option<NaiveDate>, String> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(value, Self::FORMAT)
            .map(Some)
            .map_err(|_| "Date must use YYYY-MM-DD".to_string())
    }
}

impl FieldValidator<str> for DateValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        Self::parse(value).map(|_| ())
    }
}

impl FieldValidator<String> for DateValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_validator_trims_before_empty_check() {
        let validator = StringValidator::new().not_empty().required_message("Title is required");
        assert_eq!(validator.validate("   ").unwrap_err(), "Title is required");
        assert!(validator.validate(" x ").is_ok());
    }

    #[test]
    fn test_string_validator_counts_chars() {
        let validator = StringValidator::new().max_length(3);
        assert!(validator.validate("äöü").is_ok());
        assert!(validator.validate("äöüß").is_err());
    }

    #[test]
    fn test_string_validator_min_length() {
        let validator = StringValidator::new().min_length(3);
        assert_eq!(validator.validate("ab").unwrap_err(), "Must be at least 3 characters");
    }

    #[test]
    fn test_email_validator() {
        let validator = EmailValidator::new();
        assert!(validator.validate("ada@example.com").is_ok());
        assert!(validator.validate("ada@example").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_date_validator() {
        assert_eq!(DateValidator::parse(""), Ok(None));
        assert_eq!(DateValidator::parse("2024-02-29"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29)));
        assert!(DateValidator::parse("2023-02-29").is_err());
        assert!(DateValidator::new().validate("31/12/2024").is_err());
    }
}
