//! Login form

use super::field;
use crate::form::{FormState, FormValues, ValidationErrors};
use crate::widgets::{PasswordInput, TextInput};
use formkit_forms::{CharField, EmailField, Form};

/// Email and password, both empty
pub fn default_values() -> FormValues {
	FormValues::new().with("email", "").with("password", "")
}

pub fn schema() -> Form {
	Form::new()
		.field(
			EmailField::new("email".to_string())
				.with_label("User Email")
				.with_invalid_message("Invalid email address")
				.with_min_length_message(1, "Email address is required"),
		)
		.field(
			CharField::new("password".to_string())
				.with_label("User Password")
				.required()
				.allow_blank()
				.no_strip()
				.with_min_length_message(8, "Password is required"),
		)
}

/// Login form with a plain password input
pub struct LoginView {
	state: FormState,
	email: TextInput,
	password: PasswordInput,
}

impl LoginView {
	pub fn new() -> Self {
		let state = FormState::new(default_values());
		let email = TextInput::email("User Email", field(&state, "email"))
			.with_placeholder("Enter your");
		let password = PasswordInput::new(field(&state, "password")).with_label("User Password");
		Self {
			state,
			email,
			password,
		}
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn email_input(&self) -> &TextInput {
		&self.email
	}

	pub fn password_input(&mut self) -> &mut PasswordInput {
		&mut self.password
	}

	pub fn error(&self, name: &str) -> Option<String> {
		self.state.error(name)
	}

	/// Validate and log the submitted values
	pub fn submit(&self) -> Result<FormValues, ValidationErrors> {
		let mut submitted = FormValues::new();
		self.state.handle_submit(&schema, |values| {
			tracing::info!(values = ?values, "Form Value");
			submitted = values.clone();
		})?;
		Ok(submitted)
	}
}

impl Default for LoginView {
	fn default() -> Self {
		Self::new()
	}
}
