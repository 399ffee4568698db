//! Field trait, widget kinds and field-level errors

use serde::{Deserialize, Serialize};

/// Message used when a required value is missing and the field declares no
/// message of its own.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Required";

/// Error produced while cleaning a single field.
///
/// The display form of every variant is the bare, user-visible message so it
/// can be rendered beneath the control as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// The value is missing (or blank where blanks are not allowed)
	#[error("{0}")]
	Required(String),
	/// The value has the wrong type for the field
	#[error("{0}")]
	Invalid(String),
	/// The value has the right type but breaks a declared rule
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// Build a `Required` error, falling back to [`DEFAULT_REQUIRED_MESSAGE`].
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::FieldError;
	///
	/// assert_eq!(FieldError::required(None).to_string(), "Required");
	/// assert_eq!(
	///     FieldError::required(Some("Country is required")).to_string(),
	///     "Country is required"
	/// );
	/// ```
	pub fn required(message: Option<&str>) -> Self {
		Self::Required(message.unwrap_or(DEFAULT_REQUIRED_MESSAGE).to_string())
	}

	/// The user-visible message carried by this error.
	pub fn message(&self) -> &str {
		match self {
			Self::Required(msg) | Self::Invalid(msg) | Self::Validation(msg) => msg,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// The interactive primitive a field is rendered with.
///
/// Only the input/output contract matters here; the renderer decides markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
	TextInput,
	EmailInput,
	PasswordInput,
	TextArea,
	Select,
	Checkbox,
	RadioGroup,
	Switch,
	Combobox,
	DateInput,
}

impl Widget {
	/// HTML `type` attribute for input-like widgets.
	pub fn input_type(&self) -> Option<&'static str> {
		match self {
			Widget::TextInput => Some("text"),
			Widget::EmailInput => Some("email"),
			Widget::PasswordInput => Some("password"),
			Widget::Checkbox => Some("checkbox"),
			_ => None,
		}
	}
}

/// A single declared form field.
///
/// `clean` receives the raw bound value (`None` when the key is absent) and
/// returns the normalized value or the first rule violation.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str> {
		None
	}

	fn required(&self) -> bool;

	fn widget(&self) -> &Widget;

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;
}

/// Whitespace as browsers define it: Unicode `White_Space` minus U+0085,
/// plus the byte-order mark.
pub(crate) fn is_whitespace(c: char) -> bool {
	(c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// `s` without leading or trailing [`is_whitespace`] characters.
pub(crate) fn trim_whitespace(s: &str) -> &str {
	s.trim_matches(is_whitespace)
}

/// Length in UTF-16 code units, the unit browser-side length limits count in.
pub(crate) fn text_length(s: &str) -> usize {
	s.encode_utf16().count()
}

/// Returns `None` for absent and `null` values, the value otherwise.
pub(crate) fn present(value: Option<&serde_json::Value>) -> Option<&serde_json::Value> {
	match value {
		None | Some(serde_json::Value::Null) => None,
		Some(v) => Some(v),
	}
}
