use crate::field::{FieldError, FormField};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Field error in {field}: {error}")]
	Field { field: String, error: FieldError },
	#[error("Validation error: {0}")]
	Validation(String),
}

pub type FormResult<T> = Result<T, FormError>;

type CleanFunction =
	Box<dyn Fn(&HashMap<String, serde_json::Value>) -> FormResult<()> + Send + Sync>;

/// Special key for form-level (non-field-specific) errors.
pub const ALL_FIELDS_KEY: &str = "_all";

/// A declared set of fields plus the data bound to them.
///
/// Validation runs every field's `clean` in declaration order and collects
/// all messages per field; the first message of a field is the one shown
/// beneath its control (see [`Form::first_errors`]).
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
	is_bound: bool,
	clean_functions: Vec<CleanFunction>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::Form;
	///
	/// let form = Form::new();
	/// assert!(!form.is_bound());
	/// assert!(form.fields().is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			errors: HashMap::new(),
			is_bound: false,
			clean_functions: vec![],
		}
	}
	/// Add a field to the form
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::{Form, CharField};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("username".to_string())));
	/// assert_eq!(form.fields().len(), 1);
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}
	/// Builder-style variant of [`Form::add_field`]
	pub fn field(mut self, field: impl FormField + 'static) -> Self {
		self.fields.push(Box::new(field));
		self
	}
	/// Bind form data for validation
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}
	/// Validate the form and return true if all fields are valid
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::{Form, CharField};
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("username".to_string())));
	///
	/// let mut data = HashMap::new();
	/// data.insert("username".to_string(), json!("john"));
	/// form.bind(data);
	///
	/// assert!(form.is_valid());
	/// assert!(form.errors().is_empty());
	/// assert_eq!(form.cleaned_data().get("username"), Some(&json!("john")));
	/// ```
	pub fn is_valid(&mut self) -> bool {
		if !self.is_bound {
			return false;
		}

		self.errors.clear();

		for field in &self.fields {
			let value = self.data.get(field.name());

			match field.clean(value) {
				Ok(cleaned) => {
					self.data.insert(field.name().to_string(), cleaned);
				}
				Err(e) => {
					self.errors
						.entry(field.name().to_string())
						.or_default()
						.push(e.to_string());
				}
			}
		}

		for clean_fn in &self.clean_functions {
			if let Err(e) = clean_fn(&self.data) {
				match e {
					FormError::Field { field, error } => {
						self.errors
							.entry(field)
							.or_default()
							.push(error.to_string());
					}
					FormError::Validation(msg) => {
						self.errors
							.entry(ALL_FIELDS_KEY.to_string())
							.or_default()
							.push(msg);
					}
				}
			}
		}

		if !self.errors.is_empty() {
			tracing::debug!(fields = ?self.errors.keys().collect::<Vec<_>>(), "form validation failed");
		}

		self.errors.is_empty()
	}
	pub fn cleaned_data(&self) -> &HashMap<String, serde_json::Value> {
		&self.data
	}
	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}
	/// The first error message of every failing field, keyed by field name
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::{Form, CharField};
	/// use std::collections::HashMap;
	///
	/// let mut form = Form::new().field(
	///     CharField::new("city".to_string())
	///         .required()
	///         .with_required_message("City is required"),
	/// );
	/// form.bind(HashMap::new());
	/// assert!(!form.is_valid());
	/// assert_eq!(form.first_errors().get("city").map(String::as_str), Some("City is required"));
	/// ```
	pub fn first_errors(&self) -> BTreeMap<String, String> {
		self.errors
			.iter()
			.filter_map(|(name, msgs)| msgs.first().map(|m| (name.clone(), m.clone())))
			.collect()
	}
	pub fn is_bound(&self) -> bool {
		self.is_bound
	}
	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}
	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}
	/// Add a custom clean function for cross-field validation
	pub fn add_clean_function<F>(&mut self, f: F)
	where
		F: Fn(&HashMap<String, serde_json::Value>) -> FormResult<()> + Send + Sync + 'static,
	{
		self.clean_functions.push(Box::new(f));
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fields::{BooleanField, CharField, ChoiceField};
	use serde_json::json;

	#[test]
	fn test_form_validation() {
		let mut form = Form::new();
		form.add_field(Box::new(CharField::new("name".to_string()).with_max_length(50)));

		let mut data = HashMap::new();
		data.insert("name".to_string(), json!("John Doe"));

		form.bind(data);
		assert!(form.is_valid());
		assert!(form.errors().is_empty());
	}

	#[test]
	fn test_form_validation_error() {
		let mut form = Form::new();
		form.add_field(Box::new(CharField::new("name".to_string()).with_max_length(5)));

		let mut data = HashMap::new();
		data.insert("name".to_string(), json!("Very Long Name"));

		form.bind(data);
		assert!(!form.is_valid());
		assert!(!form.errors().is_empty());
	}

	#[test]
	fn test_form_missing_required_fields() {
		let mut form = Form::new();
		form.add_field(Box::new(CharField::new("username".to_string()).required()));
		form.add_field(Box::new(
			ChoiceField::new("gender".to_string()).with_choices([("male", "Male")]),
		));

		form.bind(HashMap::new());

		assert!(!form.is_valid());
		assert!(form.errors().contains_key("username"));
		assert!(form.errors().contains_key("gender"));
	}

	#[test]
	fn test_form_unbound() {
		let mut form = Form::new();
		form.add_field(Box::new(CharField::new("name".to_string())));

		assert!(!form.is_bound());
		assert!(!form.is_valid());
	}

	#[test]
	fn test_form_extra_data() {
		let mut form = Form::new();
		form.add_field(Box::new(CharField::new("name".to_string())));

		let mut data = HashMap::new();
		data.insert("name".to_string(), json!("John"));
		data.insert("extra_field".to_string(), json!("should be ignored"));

		form.bind(data);

		assert!(form.is_valid());
		let cleaned = form.cleaned_data();
		assert_eq!(cleaned.get("name").unwrap(), &json!("John"));
		assert!(cleaned.contains_key("extra_field"));
	}

	#[test]
	fn test_form_false_boolean_passes() {
		let mut form = Form::new().field(BooleanField::new("terms".to_string()));

		let mut data = HashMap::new();
		data.insert("terms".to_string(), json!(false));
		form.bind(data);

		assert!(form.is_valid());
	}

	#[test]
	fn test_form_multiple_instances() {
		let mut form1 = Form::new().field(CharField::new("name".to_string()));
		let mut form2 = Form::new().field(CharField::new("name".to_string()));

		let mut data1 = HashMap::new();
		data1.insert("name".to_string(), json!("Form1"));
		form1.bind(data1);

		let mut data2 = HashMap::new();
		data2.insert("name".to_string(), json!("Form2"));
		form2.bind(data2);

		assert!(form1.is_valid());
		assert!(form2.is_valid());
		assert_eq!(form1.cleaned_data().get("name").unwrap(), &json!("Form1"));
		assert_eq!(form2.cleaned_data().get("name").unwrap(), &json!("Form2"));
	}

	#[test]
	fn test_form_first_errors_keeps_first_message() {
		let mut form = Form::new().field(
			CharField::new("username".to_string()).with_min_length_message(2, "too short"),
		);
		form.add_clean_function(|_| {
			Err(FormError::Field {
				field: "username".to_string(),
				error: FieldError::Validation("taken".to_string()),
			})
		});

		let mut data = HashMap::new();
		data.insert("username".to_string(), json!("a"));
		form.bind(data);

		assert!(!form.is_valid());
		assert_eq!(form.errors()["username"], vec!["too short", "taken"]);
		assert_eq!(form.first_errors()["username"], "too short");
	}

	#[test]
	fn test_form_cross_field_validation() {
		let mut form = Form::new()
			.field(CharField::new("password".to_string()))
			.field(CharField::new("confirm".to_string()));

		form.add_clean_function(|data| {
			if data.get("password") != data.get("confirm") {
				return Err(FormError::Validation("Passwords do not match".to_string()));
			}
			Ok(())
		});

		let mut data = HashMap::new();
		data.insert("password".to_string(), json!("secret123"));
		data.insert("confirm".to_string(), json!("different"));
		form.bind(data);

		assert!(!form.is_valid());
		assert!(form.errors().contains_key(ALL_FIELDS_KEY));
	}
}
