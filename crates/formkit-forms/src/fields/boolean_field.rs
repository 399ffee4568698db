//! Boolean field for checkboxes and switches

use crate::field::{FieldError, FieldResult, FormField, Widget, present};

/// Boolean field.
///
/// Only the type is checked: `false` is a valid value even when the field is
/// required. `required` only rejects a missing value.
#[derive(Debug, Clone)]
pub struct BooleanField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub required_message: Option<String>,
}

impl BooleanField {
	/// Create a new required BooleanField
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::BooleanField;
	/// use formkit_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = BooleanField::new("terms".to_string());
	/// assert_eq!(field.clean(Some(&json!(false))).unwrap(), json!(false));
	/// assert!(field.clean(None).is_err());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::Checkbox,
			required_message: None,
		}
	}

	/// Allow the value to be missing
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}
}

impl FormField for BooleanField {
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
		match present(value) {
			None if self.required => Err(FieldError::required(self.required_message.as_deref())),
			None => Ok(serde_json::Value::Null),
			Some(serde_json::Value::Bool(b)) => Ok(serde_json::Value::Bool(*b)),
			Some(_) => Err(FieldError::Invalid("Expected boolean".to_string())),
		}
	}
}
