//! Login and registration forms

use tasktime_common::validation::{EmailValidator, StringValidator, ValidationResult, Validator};
use tasktime_domain::constants::{MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use tasktime_domain::{Credentials, Registration};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    pub fn credentials(&self) -> ValidationResult<Credentials> {
        let mut validator = Validator::new();
        validator
            .validate_field(
                "username",
                self.username.as_str(),
                &StringValidator::new().not_empty().required_message("Username is required"),
            )
            .validate_field(
                "password",
                self.password.as_str(),
                &StringValidator::new()
                    .trim(false)
                    .not_empty()
                    .required_message("Password is required"),
            );
        validator.finish()?;

        Ok(Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self { username: username.into(), email: email.into(), password: password.into() }
    }

    pub fn registration(&self) -> ValidationResult<Registration> {
        let mut validator = Validator::new();
        validator
            .validate_field(
                "username",
                self.username.as_str(),
                &StringValidator::new()
                    .not_empty()
                    .required_message("Username is required")
                    .min_length(MIN_USERNAME_LENGTH),
            )
            .validate_field("email", self.email.as_str(), &EmailValidator::new())
            .validate_field(
                "password",
                self.password.as_str(),
                &StringValidator::new().trim(false).min_length(MIN_PASSWORD_LENGTH),
            );
        validator.finish()?;

        Ok(Registration {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
