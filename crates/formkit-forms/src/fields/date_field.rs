use crate::field::{FieldError, FieldResult, FormField, Widget, present};
use chrono::{Datelike, NaiveDate};

/// DateField for date input
pub struct DateField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub input_formats: Vec<String>,
	pub required_message: Option<String>,
	pub min_date: Option<NaiveDate>,
	pub max_date: Option<NaiveDate>,
}

impl DateField {
	/// Create a new DateField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::DateField;
	///
	/// let field = DateField::new("birthday".to_string());
	/// assert_eq!(field.name, "birthday");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::DateInput,
			input_formats: vec![
				"%Y-%m-%d".to_string(),  // 2025-01-15
				"%m/%d/%Y".to_string(),  // 01/15/2025
				"%B %d, %Y".to_string(), // January 15, 2025
				"%b %d, %Y".to_string(), // Jan 15, 2025
				"%d %B %Y".to_string(),  // 15 January 2025
			],
			required_message: None,
			min_date: None,
			max_date: None,
		}
	}
	/// Set the message reported when no date is given
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::fields::DateField;
	/// use formkit_forms::FormField;
	///
	/// let field = DateField::new("birthday".to_string())
	///     .with_required_message("A date of birth is required.");
	/// assert_eq!(field.clean(None).unwrap_err().to_string(), "A date of birth is required.");
	/// ```
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}
	/// Reject dates outside `[min, max]`
	pub fn with_bounds(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
		self.min_date = min;
		self.max_date = max;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	fn parse_date(&self, s: &str) -> Result<NaiveDate, String> {
		for format in &self.input_formats {
			if let Ok(date) = NaiveDate::parse_from_str(s, format) {
				// 4-digit years only
				if !(1000..=9999).contains(&date.year()) {
					continue;
				}
				return Ok(date);
			}
		}
		Err("Invalid date".to_string())
	}
}

impl FormField for DateField {
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
		let required = || FieldError::required(self.required_message.as_deref());

		let Some(v) = present(value) else {
			return if self.required {
				Err(required())
			} else {
				Ok(serde_json::Value::Null)
			};
		};

		let s = v
			.as_str()
			.ok_or_else(|| FieldError::Invalid("Expected date".to_string()))?
			.trim();

		if s.is_empty() {
			if self.required {
				return Err(required());
			}
			return Ok(serde_json::Value::Null);
		}

		let date = self.parse_date(s).map_err(FieldError::Invalid)?;

		if let Some(min) = self.min_date
			&& date < min
		{
			return Err(FieldError::Validation(format!(
				"Date must be on or after {}",
				min.format("%Y-%m-%d")
			)));
		}
		if let Some(max) = self.max_date
			&& date > max
		{
			return Err(FieldError::Validation(format!(
				"Date must be on or before {}",
				max.format("%Y-%m-%d")
			)));
		}

		// Return in ISO 8601 format
		Ok(serde_json::json!(date.format("%Y-%m-%d").to_string()))
	}
}
