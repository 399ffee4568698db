//! Choice field for selects and radio groups

use crate::field::{FieldError, FieldResult, FormField, Widget, present};

/// Field whose value must be one of a fixed set of choices.
///
/// A missing value and an empty string both count as "nothing selected" and
/// report the required message.
#[derive(Debug, Clone)]
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	/// `(value, label)` pairs in display order
	pub choices: Vec<(String, String)>,
	pub required_message: Option<String>,
}

impl ChoiceField {
	/// Create a new required ChoiceField
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::ChoiceField;
	/// use formkit_forms::FormField;
	/// use serde_json::json;
	///
	/// let field = ChoiceField::new("gender".to_string())
	///     .with_choices([("male", "Male"), ("female", "Female")]);
	/// assert!(field.clean(Some(&json!("male"))).is_ok());
	/// assert!(field.clean(Some(&json!("other"))).is_err());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::Select,
			choices: Vec::new(),
			required_message: None,
		}
	}

	pub fn with_choices<I, V, L>(mut self, choices: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		self.choices = choices
			.into_iter()
			.map(|(v, l)| (v.into(), l.into()))
			.collect();
		self
	}

	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
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

	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Whether `value` is one of the declared choices
	pub fn is_choice(&self, value: &str) -> bool {
		self.choices.iter().any(|(v, _)| v == value)
	}

	fn invalid_choice_message(&self, received: &str) -> String {
		let expected = self
			.choices
			.iter()
			.map(|(v, _)| format!("'{}'", v))
			.collect::<Vec<_>>()
			.join(" | ");
		format!(
			"Invalid enum value. Expected {}, received '{}'",
			expected, received
		)
	}
}

impl FormField for ChoiceField {
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
		let selected = match present(value) {
			None => None,
			Some(v) => {
				let s = v
					.as_str()
					.ok_or_else(|| FieldError::Invalid("Expected string".to_string()))?;
				(!s.is_empty()).then_some(s)
			}
		};

		match selected {
			None if self.required => Err(FieldError::required(self.required_message.as_deref())),
			None => Ok(serde_json::Value::Null),
			Some(s) if self.is_choice(s) => Ok(serde_json::Value::String(s.to_string())),
			Some(s) => Err(FieldError::Validation(self.invalid_choice_message(s))),
		}
	}
}
