//! Text, email and textarea inputs

use crate::form::FormValue;
use crate::reactive::Signal;

/// Free text input bound to a form value
#[derive(Debug, Clone)]
pub struct TextInput {
	label: String,
	placeholder: String,
	input_type: &'static str,
	description: Option<String>,
	value: Signal<FormValue>,
}

impl TextInput {
	pub fn new(label: impl Into<String>, value: Signal<FormValue>) -> Self {
		Self {
			label: label.into(),
			placeholder: String::new(),
			input_type: "text",
			description: None,
			value,
		}
	}

	pub fn email(label: impl Into<String>, value: Signal<FormValue>) -> Self {
		Self {
			input_type: "email",
			..Self::new(label, value)
		}
	}

	pub fn textarea(label: impl Into<String>, value: Signal<FormValue>) -> Self {
		Self {
			input_type: "textarea",
			..Self::new(label, value)
		}
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	pub fn input_type(&self) -> &'static str {
		self.input_type
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Text shown in the control; an unset value renders empty
	pub fn text(&self) -> String {
		self.value.with(|v| v.as_text().to_string())
	}

	/// Input event
	pub fn set_text(&self, text: impl Into<String>) {
		self.value.set(FormValue::text(text));
	}
}
