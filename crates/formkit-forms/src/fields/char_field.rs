//! Character field for text input

use crate::field::{
	FieldError, FieldResult, FormField, Widget, present, text_length, trim_whitespace,
};
use crate::validators::StringValidator;
use std::fmt;
use std::sync::Arc;

/// Character field with length and pattern validation.
///
/// Checks run in declaration order: minimum length, maximum length, then each
/// validator. The first failing check is reported.
#[derive(Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub max_length: Option<usize>,
	pub min_length: Option<usize>,
	pub strip: bool,
	/// Accept blank strings on a required field and let the length checks
	/// decide instead.
	pub allow_blank: bool,
	pub empty_value: Option<String>,
	pub required_message: Option<String>,
	pub min_length_message: Option<String>,
	pub max_length_message: Option<String>,
	validators: Vec<Arc<dyn StringValidator>>,
}

impl CharField {
	/// Create a new CharField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string());
	/// assert_eq!(field.name, "username");
	/// assert!(!field.required);
	/// assert_eq!(field.max_length, None);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			widget: Widget::TextInput,
			max_length: None,
			min_length: None,
			strip: true,
			allow_blank: false,
			empty_value: None,
			required_message: None,
			min_length_message: None,
			max_length_message: None,
			validators: Vec::new(),
		}
	}
	/// Set the field as required
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::CharField;
	///
	/// let field = CharField::new("country".to_string()).required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
	/// Set the message reported when the value is missing
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::CharField;
	/// use formkit_forms::FormField;
	///
	/// let field = CharField::new("country".to_string())
	///     .required()
	///     .with_required_message("Country is required");
	/// assert_eq!(field.clean(None).unwrap_err().to_string(), "Country is required");
	/// ```
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}
	/// Let a required field accept blank input
	pub fn allow_blank(mut self) -> Self {
		self.allow_blank = true;
		self
	}
	/// Set the maximum length for the field
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string()).with_max_length(100);
	/// assert_eq!(field.max_length, Some(100));
	/// ```
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}
	/// Set the maximum length together with its violation message
	pub fn with_max_length_message(mut self, max_length: usize, message: impl Into<String>) -> Self {
		self.max_length = Some(max_length);
		self.max_length_message = Some(message.into());
		self
	}
	/// Set the minimum length for the field
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::CharField;
	///
	/// let field = CharField::new("username".to_string()).with_min_length(5);
	/// assert_eq!(field.min_length, Some(5));
	/// ```
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}
	/// Set the minimum length together with its violation message
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::CharField;
	/// use formkit_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = CharField::new("username".to_string())
	///     .with_min_length_message(2, "Username must be at least 2 characters.");
	/// let err = field.clean(Some(&json!("A"))).unwrap_err();
	/// assert_eq!(err.to_string(), "Username must be at least 2 characters.");
	/// ```
	pub fn with_min_length_message(mut self, min_length: usize, message: impl Into<String>) -> Self {
		self.min_length = Some(min_length);
		self.min_length_message = Some(message.into());
		self
	}
	/// Append a validator run after the length checks
	pub fn with_validator(mut self, validator: impl StringValidator + 'static) -> Self {
		self.validators.push(Arc::new(validator));
		self
	}
	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
	/// Disable whitespace stripping for the field
	pub fn no_strip(mut self) -> Self {
		self.strip = false;
		self
	}
	/// Set the widget for the field
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::CharField;
	/// use formkit_forms::field::Widget;
	///
	/// let field = CharField::new("bio".to_string()).with_widget(Widget::TextArea);
	/// assert_eq!(field.widget, Widget::TextArea);
	/// ```
	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	fn required_error(&self) -> FieldError {
		FieldError::required(self.required_message.as_deref())
	}
}

impl fmt::Debug for CharField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CharField")
			.field("name", &self.name)
			.field("required", &self.required)
			.field("min_length", &self.min_length)
			.field("max_length", &self.max_length)
			.field("validators", &self.validators.len())
			.finish()
	}
}

// Note: Default trait is not implemented because CharField requires a name

impl FormField for CharField {
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
				return Err(self.required_error());
			}
			return Ok(serde_json::Value::String(
				self.empty_value.clone().unwrap_or_default(),
			));
		};

		let raw = value
			.as_str()
			.ok_or_else(|| FieldError::Invalid("Value must be a string".to_string()))?;
		let processed = if self.strip { trim_whitespace(raw) } else { raw };

		if processed.is_empty() && self.required && !self.allow_blank {
			return Err(self.required_error());
		}

		// Length is measured in UTF-16 code units, not chars or bytes
		let char_count = text_length(processed);
		if let Some(min_length) = self.min_length
			&& char_count < min_length
		{
			return Err(FieldError::Validation(
				self.min_length_message.clone().unwrap_or_else(|| {
					format!(
						"Ensure this value has at least {} characters (it has {})",
						min_length, char_count
					)
				}),
			));
		}

		if let Some(max_length) = self.max_length
			&& char_count > max_length
		{
			return Err(FieldError::Validation(
				self.max_length_message.clone().unwrap_or_else(|| {
					format!(
						"Ensure this value has at most {} characters (it has {})",
						max_length, char_count
					)
				}),
			));
		}

		for validator in &self.validators {
			validator.validate(processed)?;
		}

		Ok(serde_json::Value::String(processed.to_string()))
	}
}
