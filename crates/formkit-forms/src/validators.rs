//! String validators used by form fields
//!
//! This module provides the pattern-based validators that plug into the
//! [`CharField`](crate::fields::CharField) and
//! [`EmailField`](crate::fields::EmailField) validation pipeline.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Letters, digits and underscore only. Empty input matches; length is the
// field's concern.
static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9_]*$").expect("USERNAME_REGEX: invalid regex pattern")
});

// Email shape, case-insensitive:
// - local part of letters, digits and `_ ' + - .`, ending in a non-dot
// - one or more dot-terminated domain labels, none starting with a hyphen
// - an alphabetic TLD of at least two letters
// Leading dots and consecutive dots are rejected separately since the regex
// engine has no look-around.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

// Restricted password alphabet with a minimum of 8 characters.
static PASSWORD_ALPHABET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9@$!]{8,}$").expect("PASSWORD_ALPHABET_REGEX: invalid regex pattern")
});

/// A field-level string validator.
pub trait StringValidator: Send + Sync {
	fn validate(&self, value: &str) -> FieldResult<()>;
}

/// Validates a value against an arbitrary regular expression.
///
/// # Examples
///
/// ```
/// use formkit_forms::validators::{RegexValidator, StringValidator};
///
/// let validator = RegexValidator::new(r"^[A-Z]{3}$", "Code must be 3 uppercase letters").unwrap();
/// assert!(validator.validate("ABC").is_ok());
/// assert!(validator.validate("abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegexValidator {
	regex: Regex,
	message: String,
}

impl RegexValidator {
	pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
		Ok(Self {
			regex: Regex::new(pattern)?,
			message: message.into(),
		})
	}

	pub fn from_regex(regex: Regex, message: impl Into<String>) -> Self {
		Self {
			regex,
			message: message.into(),
		}
	}
}

impl StringValidator for RegexValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

/// Restricts a username to letters, digits and underscores.
///
/// # Examples
///
/// ```
/// use formkit_forms::validators::{StringValidator, UsernameValidator};
///
/// let validator = UsernameValidator::new();
/// assert!(validator.validate("ahmed_01").is_ok());
/// assert!(validator.validate("ahmed-01").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UsernameValidator {
	message: Option<String>,
}

impl UsernameValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl Default for UsernameValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl StringValidator for UsernameValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if USERNAME_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid username consisting of letters, numbers, or underscores");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

/// Syntactic email check.
///
/// # Examples
///
/// ```
/// use formkit_forms::validators::{EmailValidator, StringValidator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("test@test.com").is_ok());
/// assert!(validator.validate("test@test").is_err());
/// assert!(validator.validate("").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Returns whether `value` has the shape of an email address.
	pub fn is_valid(value: &str) -> bool {
		!value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl StringValidator for EmailValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if Self::is_valid(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Invalid email");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

/// Strict password rule used by form schemas.
///
/// A valid password has at least one lowercase letter, one uppercase letter,
/// one digit and one of `@ $ !`, and consists of 8 or more characters drawn
/// only from `[A-Za-z0-9@$!]`.
///
/// This is stricter than [`PasswordValidity`](crate::password::PasswordValidity),
/// which places no restriction on the alphabet: `"Abcdef1!#"` satisfies every
/// checklist rule but fails this validator.
///
/// # Examples
///
/// ```
/// use formkit_forms::validators::{PasswordPatternValidator, StringValidator};
///
/// let validator = PasswordPatternValidator::new("Password not Valid");
/// assert!(validator.validate("Abcdef1!").is_ok());
/// assert!(validator.validate("Abcdef1!#").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordPatternValidator {
	message: String,
}

impl PasswordPatternValidator {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn is_valid(value: &str) -> bool {
		PASSWORD_ALPHABET_REGEX.is_match(value)
			&& value.chars().any(|c| c.is_ascii_lowercase())
			&& value.chars().any(|c| c.is_ascii_uppercase())
			&& value.chars().any(|c| c.is_ascii_digit())
			&& value.chars().any(|c| matches!(c, '@' | '$' | '!'))
	}
}

impl StringValidator for PasswordPatternValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if Self::is_valid(value) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}
