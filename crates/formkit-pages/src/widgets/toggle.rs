//! Checkbox and switch

use super::WidgetError;
use crate::form::FormValue;
use crate::reactive::Signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
	Checkbox,
	Switch,
}

/// Boolean control bound to a form value.
///
/// A disabled or read-only toggle refuses changes and keeps its value.
#[derive(Debug, Clone)]
pub struct Toggle {
	kind: ToggleKind,
	label: String,
	description: Option<String>,
	value: Signal<FormValue>,
	disabled: bool,
	read_only: bool,
}

impl Toggle {
	pub fn checkbox(label: impl Into<String>, value: Signal<FormValue>) -> Self {
		Self::new(ToggleKind::Checkbox, label, value)
	}

	pub fn switch(label: impl Into<String>, value: Signal<FormValue>) -> Self {
		Self::new(ToggleKind::Switch, label, value)
	}

	fn new(kind: ToggleKind, label: impl Into<String>, value: Signal<FormValue>) -> Self {
		Self {
			kind,
			label: label.into(),
			description: None,
			value,
			disabled: false,
			read_only: false,
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn with_read_only(mut self, read_only: bool) -> Self {
		self.read_only = read_only;
		self
	}

	pub fn kind(&self) -> ToggleKind {
		self.kind
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	pub fn is_read_only(&self) -> bool {
		self.read_only
	}

	/// Unset and non-boolean values render unchecked
	pub fn checked(&self) -> bool {
		self.value.with(|v| v.as_bool().unwrap_or(false))
	}

	pub fn set_checked(&self, checked: bool) -> Result<(), WidgetError> {
		if self.disabled {
			return Err(WidgetError::Disabled(self.label.clone()));
		}
		if self.read_only {
			return Err(WidgetError::ReadOnly(self.label.clone()));
		}
		self.value.set(FormValue::Bool(checked));
		Ok(())
	}

	pub fn toggle(&self) -> Result<(), WidgetError> {
		self.set_checked(!self.checked())
	}
}
