//! Form values

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Value held by one form control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(untagged)]
pub enum FormValue {
	Text(String),
	Bool(bool),
	Date(NaiveDate),
	/// Nothing entered yet; validates as a missing value
	#[default]
	Unset,
}

impl FormValue {
	pub fn text(value: impl Into<String>) -> Self {
		FormValue::Text(value.into())
	}

	/// Text content, or `""` for non-text values
	pub fn as_text(&self) -> &str {
		match self {
			FormValue::Text(s) => s,
			_ => "",
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			FormValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_date(&self) -> Option<NaiveDate> {
		match self {
			FormValue::Date(d) => Some(*d),
			_ => None,
		}
	}

	pub fn is_unset(&self) -> bool {
		matches!(self, FormValue::Unset)
	}

	/// JSON form consumed by the schema fields
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			FormValue::Text(s) => serde_json::Value::String(s.clone()),
			FormValue::Bool(b) => serde_json::Value::Bool(*b),
			FormValue::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
			FormValue::Unset => serde_json::Value::Null,
		}
	}
}

impl From<&str> for FormValue {
	fn from(value: &str) -> Self {
		FormValue::Text(value.to_string())
	}
}

impl From<String> for FormValue {
	fn from(value: String) -> Self {
		FormValue::Text(value)
	}
}

impl From<bool> for FormValue {
	fn from(value: bool) -> Self {
		FormValue::Bool(value)
	}
}

impl From<NaiveDate> for FormValue {
	fn from(value: NaiveDate) -> Self {
		FormValue::Date(value)
	}
}

impl fmt::Display for FormValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FormValue::Text(s) => f.write_str(s),
			FormValue::Bool(b) => write!(f, "{}", b),
			FormValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
			FormValue::Unset => Ok(()),
		}
	}
}

/// Field name to value, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FormValues(IndexMap<String, FormValue>);

impl FormValues {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert
	///
	/// # Examples
	///
	/// ```
	/// use formkit_pages::form::{FormValue, FormValues};
	///
	/// let values = FormValues::new()
	///     .with("username", "Ahmed")
	///     .with("terms", false);
	/// assert_eq!(values.get("terms"), Some(&FormValue::Bool(false)));
	/// ```
	pub fn with(mut self, name: impl Into<String>, value: impl Into<FormValue>) -> Self {
		self.0.insert(name.into(), value.into());
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FormValue>) {
		self.0.insert(name.into(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&FormValue> {
		self.0.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Values as bound data for [`formkit_forms::Form::bind`]
	pub fn to_form_data(&self) -> HashMap<String, serde_json::Value> {
		self.0
			.iter()
			.map(|(k, v)| (k.clone(), v.to_json()))
			.collect()
	}
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for FormValues {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(FormValue::text("a"), json!("a"))]
	#[case(FormValue::Bool(true), json!(true))]
	#[case(FormValue::Date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()), json!("2025-01-15"))]
	#[case(FormValue::Unset, json!(null))]
	fn test_to_json(#[case] value: FormValue, #[case] expected: serde_json::Value) {
		assert_eq!(value.to_json(), expected);
	}

	#[rstest]
	fn test_serialize_keeps_declaration_order() {
		// Arrange
		let values = FormValues::new()
			.with("username", "Ahmed")
			.with("birthday", FormValue::Unset)
			.with("area", "");

		// Act
		let rendered = serde_json::to_string(&values).unwrap();

		// Assert
		assert_eq!(rendered, r#"{"username":"Ahmed","birthday":null,"area":""}"#);
	}

	#[rstest]
	fn test_equality_is_exact() {
		let a = FormValues::new().with("terms", false);
		let b = FormValues::new().with("terms", FormValue::Unset);
		assert_ne!(a, b);
	}
}
