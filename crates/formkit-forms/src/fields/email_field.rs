//! Email field

use crate::field::{FieldError, FieldResult, FormField, Widget, present, text_length};
use crate::validators::EmailValidator;

/// Email address field.
///
/// The address shape is checked before the minimum length, so an empty value
/// reports the invalid-address message.
#[derive(Debug, Clone)]
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub min_length: Option<usize>,
	pub required_message: Option<String>,
	pub invalid_message: String,
	pub min_length_message: Option<String>,
}

impl EmailField {
	/// Create a new EmailField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::EmailField;
	/// use formkit_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = EmailField::new("email".to_string());
	/// assert!(field.clean(Some(&json!("test@test.com"))).is_ok());
	/// assert!(field.clean(Some(&json!("test"))).is_err());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::EmailInput,
			min_length: None,
			required_message: None,
			invalid_message: "Invalid email".to_string(),
			min_length_message: None,
		}
	}

	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.invalid_message = message.into();
		self
	}

	pub fn with_min_length_message(mut self, min_length: usize, message: impl Into<String>) -> Self {
		self.min_length = Some(min_length);
		self.min_length_message = Some(message.into());
		self
	}

	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
}

impl FormField for EmailField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let Some(value) = present(value) else {
			if self.required {
				return Err(FieldError::required(self.required_message.as_deref()));
			}
			return Ok(serde_json::Value::String(String::new()));
		};

		let email = value
			.as_str()
			.ok_or_else(|| FieldError::Invalid("Value must be a string".to_string()))?;

		if !EmailValidator::is_valid(email) {
			return Err(FieldError::Validation(self.invalid_message.clone()));
		}

		if let Some(min_length) = self.min_length
			&& text_length(email) < min_length
		{
			return Err(FieldError::Validation(
				self.min_length_message
					.clone()
					.unwrap_or_else(|| format!("Ensure this value has at least {} characters", min_length)),
			));
		}

		Ok(serde_json::Value::String(email.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_email_field_empty_reports_invalid_before_required() {
		// Arrange
		let field = EmailField::new("useremail".to_string())
			.with_invalid_message("Invalid email address")
			.with_min_length_message(1, "Email address is required");

		// Act
		let result = field.clean(Some(&json!("")));

		// Assert
		assert_eq!(
			result,
			Err(FieldError::Validation("Invalid email address".to_string()))
		);
	}

	#[rstest]
	fn test_email_field_missing() {
		let field = EmailField::new("email".to_string());
		assert_eq!(field.clean(None), Err(FieldError::required(None)));
	}

	#[rstest]
	fn test_email_field_keeps_value() {
		let field = EmailField::new("email".to_string());
		assert_eq!(
			field.clean(Some(&json!("Test@Test.com"))).unwrap(),
			json!("Test@Test.com")
		);
	}

	#[rstest]
	fn test_email_field_widget() {
		let field = EmailField::new("email".to_string());
		assert_eq!(field.widget().input_type(), Some("email"));
	}
}
