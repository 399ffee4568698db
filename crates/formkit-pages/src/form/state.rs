//! Form state
//!
//! [`FormState`] keeps one [`Signal`] per field together with the defaults
//! snapshot it was created from. Validation only runs on submit: the current
//! values are bound to a schema [`Form`] and the first message of each failing
//! field is stored in [`FormState::errors`].

use super::values::{FormValue, FormValues};
use crate::reactive::{Signal, Subscription};
use formkit_forms::Form;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormStateError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

/// Builds a fresh schema form for each validation run
pub trait Schema {
	fn form(&self) -> Form;
}

impl<F> Schema for F
where
	F: Fn() -> Form,
{
	fn form(&self) -> Form {
		self()
	}
}

/// Per-field validation messages, in schema declaration order per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// The message shown beneath the control
	pub fn first(&self, field: &str) -> Option<&str> {
		self.0
			.get(field)
			.and_then(|messages| messages.first())
			.map(String::as_str)
	}

	pub fn all(&self, field: &str) -> &[String] {
		self.0.get(field).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn contains(&self, field: &str) -> bool {
		self.0.contains_key(field)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// `field -> first message` for every failing field
	pub fn first_messages(&self) -> BTreeMap<String, String> {
		self.0
			.iter()
			.filter_map(|(field, messages)| {
				messages.first().map(|m| (field.clone(), m.clone()))
			})
			.collect()
	}
}

impl From<&Form> for ValidationErrors {
	fn from(form: &Form) -> Self {
		Self(
			form.errors()
				.iter()
				.map(|(field, messages)| (field.clone(), messages.clone()))
				.collect(),
		)
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (field, message) in self.first_messages() {
			if !first {
				f.write_str("; ")?;
			}
			write!(f, "{}: {}", field, message)?;
			first = false;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationErrors {}

/// Run `schema` against `values`.
///
/// # Examples
///
/// ```
/// use formkit_forms::{CharField, Form};
/// use formkit_pages::form::{FormValues, resolve};
///
/// let schema = || {
///     Form::new().field(
///         CharField::new("country".to_string())
///             .required()
///             .with_required_message("Country is required"),
///     )
/// };
///
/// let errors = resolve(&schema, &FormValues::new().with("country", "")).unwrap_err();
/// assert_eq!(errors.first("country"), Some("Country is required"));
/// assert!(resolve(&schema, &FormValues::new().with("country", "egypt")).is_ok());
/// ```
pub fn resolve<S: Schema + ?Sized>(schema: &S, values: &FormValues) -> Result<(), ValidationErrors> {
	let mut form = schema.form();
	form.bind(values.to_form_data());
	if form.is_valid() {
		Ok(())
	} else {
		Err(ValidationErrors::from(&form))
	}
}

/// Reactive values of one mounted form
pub struct FormState {
	fields: IndexMap<String, Signal<FormValue>>,
	defaults: FormValues,
	errors: Signal<ValidationErrors>,
}

impl FormState {
	/// One field per default, initialised to its default value
	pub fn new(defaults: FormValues) -> Self {
		let fields = defaults
			.iter()
			.map(|(name, value)| (name.to_string(), Signal::new(value.clone())))
			.collect();
		Self {
			fields,
			defaults,
			errors: Signal::new(ValidationErrors::new()),
		}
	}

	pub fn defaults(&self) -> &FormValues {
		&self.defaults
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// The signal behind `name`, for widgets and cascades
	pub fn signal(&self, name: &str) -> Result<&Signal<FormValue>, FormStateError> {
		self.fields
			.get(name)
			.ok_or_else(|| FormStateError::UnknownField(name.to_string()))
	}

	pub fn value(&self, name: &str) -> Option<FormValue> {
		self.fields.get(name).map(Signal::get)
	}

	/// Text value of `name`, `""` when unset or not text
	pub fn text(&self, name: &str) -> String {
		self.fields
			.get(name)
			.map(|s| s.with(|v| v.as_text().to_string()))
			.unwrap_or_default()
	}

	pub fn set_value(&self, name: &str, value: impl Into<FormValue>) -> Result<(), FormStateError> {
		self.signal(name)?.set(value.into());
		Ok(())
	}

	/// Call `f` with the new value after every change of `name`
	pub fn watch(
		&self,
		name: &str,
		f: impl Fn(&FormValue) + 'static,
	) -> Result<Subscription, FormStateError> {
		Ok(self.signal(name)?.watch(f))
	}

	/// Snapshot of every current value
	pub fn values(&self) -> FormValues {
		self.fields
			.iter()
			.map(|(name, signal)| (name.clone(), signal.get()))
			.collect()
	}

	/// Whether any value differs from its default
	pub fn is_dirty(&self) -> bool {
		self.fields.iter().any(|(name, signal)| {
			signal.with(|value| self.defaults.get(name) != Some(value))
		})
	}

	pub fn dirty_fields(&self) -> Vec<String> {
		self.fields
			.iter()
			.filter(|(name, signal)| signal.with(|value| self.defaults.get(name) != Some(value)))
			.map(|(name, _)| name.clone())
			.collect()
	}

	/// Restore every field to its default and clear errors.
	///
	/// Fields are restored in declaration order, so a parent field resets
	/// before the fields that depend on it.
	pub fn reset(&self) {
		for (name, signal) in &self.fields {
			if let Some(default) = self.defaults.get(name) {
				signal.set_if_changed(default.clone());
			}
		}
		self.errors.set_if_changed(ValidationErrors::new());
		tracing::debug!("form reset to defaults");
	}

	pub fn errors(&self) -> &Signal<ValidationErrors> {
		&self.errors
	}

	/// First validation message of `name` from the last submit
	pub fn error(&self, name: &str) -> Option<String> {
		self.errors.with(|errors| errors.first(name).map(str::to_string))
	}

	/// Validate the current values and hand them to `on_submit` if they pass.
	///
	/// On failure the errors are stored and `on_submit` is not called.
	pub fn handle_submit<S, F>(&self, schema: &S, on_submit: F) -> Result<(), ValidationErrors>
	where
		S: Schema + ?Sized,
		F: FnOnce(&FormValues),
	{
		let values = self.values();
		match resolve(schema, &values) {
			Ok(()) => {
				self.errors.set_if_changed(ValidationErrors::new());
				on_submit(&values);
				Ok(())
			}
			Err(errors) => {
				tracing::debug!(fields = %errors, "submit rejected");
				self.errors.set(errors.clone());
				Err(errors)
			}
		}
	}
}

impl fmt::Debug for FormState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormState")
			.field("values", &self.values())
			.field("dirty", &self.is_dirty())
			.finish()
	}
}
