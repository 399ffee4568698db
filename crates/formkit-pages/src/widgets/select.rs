//! Select and radio group

use super::WidgetError;
use crate::catalog::SelectOption;
use crate::form::FormValue;
use crate::reactive::Signal;

/// Single choice among options, bound to a form value
#[derive(Debug, Clone)]
pub struct Select {
	label: String,
	placeholder: Option<String>,
	options: Vec<SelectOption>,
	value: Signal<FormValue>,
	disabled: bool,
}

impl Select {
	pub fn new(label: impl Into<String>, value: Signal<FormValue>) -> Self {
		Self {
			label: label.into(),
			placeholder: None,
			options: Vec::new(),
			value,
			disabled: false,
		}
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn with_options<I, O>(mut self, options: I) -> Self
	where
		I: IntoIterator<Item = O>,
		O: Into<SelectOption>,
	{
		self.options = options.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn options(&self) -> &[SelectOption] {
		&self.options
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	/// Current value, which may not be one of the options
	pub fn value(&self) -> String {
		self.value.with(|v| v.as_text().to_string())
	}

	pub fn is_selected(&self, value: &str) -> bool {
		self.value.with(|v| v.as_text() == value)
	}

	pub fn selected(&self) -> Option<&SelectOption> {
		self.value
			.with(|v| self.options.iter().position(|o| o.value == v.as_text()))
			.map(|index| &self.options[index])
	}

	/// Selected label, else the placeholder
	///
	/// # Examples
	///
	/// ```
	/// use formkit_pages::catalog::SelectOption;
	/// use formkit_pages::form::FormValue;
	/// use formkit_pages::reactive::Signal;
	/// use formkit_pages::widgets::Select;
	///
	/// let value = Signal::new(FormValue::text(""));
	/// let select = Select::new("Country", value.clone())
	///     .with_placeholder("Select a Country")
	///     .with_options([SelectOption::new("Egypt", "egypt")]);
	/// assert_eq!(select.display_text(), "Select a Country");
	///
	/// value.set(FormValue::text("egypt"));
	/// assert_eq!(select.display_text(), "Egypt");
	/// ```
	pub fn display_text(&self) -> String {
		match self.selected() {
			Some(option) => option.label.clone(),
			None => self.placeholder.clone().unwrap_or_default(),
		}
	}

	/// Choose `value`; it must be one of the options.
	pub fn select(&self, value: &str) -> Result<(), WidgetError> {
		if self.disabled {
			return Err(WidgetError::Disabled(self.label.clone()));
		}
		if !self.options.iter().any(|o| o.value == value) {
			return Err(WidgetError::UnknownOption(value.to_string()));
		}
		self.value.set(FormValue::text(value));
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{GENDERS, Gender};
	use rstest::{fixture, rstest};

	#[fixture]
	fn gender() -> Select {
		Select::new("Choose Gender", Signal::new(FormValue::text("")))
			.with_options(GENDERS.iter().map(|g: &Gender| SelectOption::from(g)))
	}

	#[rstest]
	fn test_select_known_option(gender: Select) {
		gender.select("female").unwrap();
		assert!(gender.is_selected("female"));
		assert_eq!(gender.display_text(), "Female");
	}

	#[rstest]
	fn test_select_unknown_option(gender: Select) {
		assert_eq!(
			gender.select("robot"),
			Err(WidgetError::UnknownOption("robot".to_string()))
		);
		assert_eq!(gender.value(), "");
	}

	#[rstest]
	fn test_disabled_select_rejects_and_keeps_value() {
		// Arrange
		let value = Signal::new(FormValue::text("old-town"));
		let select = Select::new("Area", value.clone())
			.with_options([SelectOption::new("Old Town", "old-town")])
			.with_disabled(true);

		// Act
		let result = select.select("old-town");

		// Assert
		assert!(matches!(result, Err(WidgetError::Disabled(_))));
		assert_eq!(select.value(), "old-town");
	}

	#[rstest]
	fn test_value_outside_options_shows_placeholder() {
		let select = Select::new("City", Signal::new(FormValue::text("gada")))
			.with_placeholder("Select a City")
			.with_options([SelectOption::new("Alexandria", "alex")]);
		assert_eq!(select.selected(), None);
		assert_eq!(select.display_text(), "Select a City");
	}
}
