//! Signup-style form exercising every control
//!
//! The country select drives the city options through a [`Cascade`]; the
//! area select is enabled only while the configured sentinel city is
//! selected. The star rating lives outside the form values and is only
//! logged on submit.

use super::field;
use crate::catalog::{Catalog, ReferenceData, SelectOption};
use crate::form::{Cascade, FormState, FormValue, FormValues, ValidationErrors};
use crate::widgets::{Combobox, DatePicker, PasswordInput, Select, StarRating, TextInput, Toggle};
use formkit_conf::Settings;
use formkit_forms::{
	BooleanField, CharField, ChoiceField, DateField, EmailField, Form, PasswordPatternValidator,
	UsernameValidator, Widget,
};

/// Initial values; the country is the first one in the catalog and the
/// city the first city of that country.
///
/// # Examples
///
/// ```
/// use formkit_pages::form::FormValue;
/// use formkit_pages::views::form_controls::default_values;
///
/// let defaults = default_values();
/// assert_eq!(defaults.get("country"), Some(&FormValue::text("egypt")));
/// assert_eq!(defaults.get("city"), Some(&FormValue::text("alex")));
/// assert!(!defaults.contains("bio"));
/// ```
pub fn default_values() -> FormValues {
	let country = Catalog.countries().first().map(|c| c.value).unwrap_or_default();
	let city = Catalog
		.city_options(country)
		.into_iter()
		.next()
		.map(|o| o.value)
		.unwrap_or_default();

	FormValues::new()
		.with("username", "Ahmed")
		.with("useremail", "test@test.com")
		.with("password", "")
		.with("country", country)
		.with("city", city)
		.with("area", "")
		.with("terms", false)
		.with("gender", "")
		.with("marketingEmails", false)
		.with("securityEmails", true)
		.with("language", "en")
}

/// Field names without a default; they start unset.
const UNSET_FIELDS: [&str; 2] = ["bio", "birthday"];

fn required_text(name: &str, min_length: usize, message: &str) -> CharField {
	CharField::new(name.to_string())
		.required()
		.allow_blank()
		.no_strip()
		.with_min_length_message(min_length, message)
}

pub fn schema() -> Form {
	Form::new()
		.field(
			required_text("username", 2, "Username must be at least 2 characters.").with_validator(
				UsernameValidator::new()
					.with_message("Name must contain only letters, numbers, or underscores"),
			),
		)
		.field(
			EmailField::new("useremail".to_string())
				.with_invalid_message("Invalid email address")
				.with_min_length_message(1, "Email address is required"),
		)
		.field(
			CharField::new("password".to_string())
				.required()
				.allow_blank()
				.no_strip()
				.with_widget(Widget::PasswordInput)
				.with_validator(PasswordPatternValidator::new("Password not Valid")),
		)
		.field(required_text("country", 1, "Country is required").with_widget(Widget::Select))
		.field(required_text("city", 1, "City is required").with_widget(Widget::Select))
		.field(required_text("area", 1, "Area is required").with_widget(Widget::Select))
		.field(BooleanField::new("terms".to_string()))
		.field(
			ChoiceField::new("gender".to_string())
				.with_widget(Widget::RadioGroup)
				.with_choices(Catalog.genders().iter().map(|g| (g.value, g.label)))
				.with_required_message("You need to select gender type"),
		)
		.field(
			BooleanField::new("marketingEmails".to_string())
				.optional()
				.with_widget(Widget::Switch),
		)
		.field(BooleanField::new("securityEmails".to_string()).with_widget(Widget::Switch))
		.field(
			required_text("bio", 10, "Bio must be at least 10 characters.")
				.with_widget(Widget::TextArea)
				.with_max_length_message(160, "Bio must not be longer than 30 characters."),
		)
		.field(
			CharField::new("language".to_string())
				.required()
				.with_widget(Widget::Combobox)
				.with_required_message("Please select a language."),
		)
		.field(
			DateField::new("birthday".to_string())
				.with_required_message("A date of birth is required."),
		)
}

/// The mounted form
pub struct FormControlsView {
	settings: Settings,
	state: FormState,
	cities: Cascade,
	password: PasswordInput,
	language: Combobox,
	birthday: DatePicker,
	rating: StarRating,
}

impl FormControlsView {
	pub fn new(settings: Settings) -> Self {
		let mut values = default_values();
		for name in UNSET_FIELDS {
			values.insert(name, FormValue::Unset);
		}
		let state = FormState::new(values);

		let cities = Cascade::country_city(
			Catalog,
			&field(&state, "country"),
			&field(&state, "city"),
		);
		let password = PasswordInput::from_settings(field(&state, "password"), &settings.password)
			.with_label("Password");
		let language = Combobox::new(field(&state, "language"), Catalog.languages());
		let birthday = DatePicker::new(field(&state, "birthday"), &settings.date_picker);
		let rating = StarRating::new(&settings.rating);

		Self {
			settings,
			state,
			cities,
			password,
			language,
			birthday,
			rating,
		}
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn error(&self, name: &str) -> Option<String> {
		self.state.error(name)
	}

	/// Cities of the selected country
	pub fn city_options(&self) -> Vec<SelectOption> {
		self.cities.options()
	}

	pub fn area_enabled(&self) -> bool {
		self.state.text("city") == self.settings.area_sentinel_city
	}

	pub fn username_input(&self) -> TextInput {
		TextInput::new("Username", field(&self.state, "username")).with_placeholder("user name")
	}

	pub fn email_input(&self) -> TextInput {
		TextInput::email("User Email", field(&self.state, "useremail")).with_placeholder("email")
	}

	pub fn password_input(&mut self) -> &mut PasswordInput {
		&mut self.password
	}

	pub fn country_select(&self) -> Select {
		Select::new("Country", field(&self.state, "country"))
			.with_placeholder("Select a Country")
			.with_options(Catalog.countries())
	}

	pub fn city_select(&self) -> Select {
		Select::new("City", field(&self.state, "city"))
			.with_placeholder("Select a City")
			.with_options(self.city_options())
	}

	/// Disabled unless the sentinel city is selected. Disabling does not
	/// clear a value picked earlier.
	pub fn area_select(&self) -> Select {
		Select::new("Area", field(&self.state, "area"))
			.with_placeholder("Select an Area")
			.with_options(Catalog.areas())
			.with_disabled(!self.area_enabled())
	}

	pub fn terms_checkbox(&self) -> Toggle {
		Toggle::checkbox("Accept Terms", field(&self.state, "terms"))
	}

	pub fn gender_radio(&self) -> Select {
		Select::new("Choose Gender", field(&self.state, "gender")).with_options(Catalog.genders())
	}

	pub fn marketing_switch(&self) -> Toggle {
		Toggle::switch("Marketing emails", field(&self.state, "marketingEmails"))
			.with_description("Receive emails about new products, features, and more.")
	}

	pub fn security_switch(&self) -> Toggle {
		Toggle::switch("Security emails", field(&self.state, "securityEmails"))
			.with_description("Receive emails about your account security.")
			.with_disabled(true)
			.with_read_only(true)
	}

	pub fn bio_input(&self) -> TextInput {
		TextInput::textarea("Bio", field(&self.state, "bio"))
			.with_placeholder("Tell us a little bit about yourself")
			.with_description("You can @mention other users and organizations.")
	}

	pub fn language_combobox(&mut self) -> &mut Combobox {
		&mut self.language
	}

	pub fn birthday_picker(&mut self) -> &mut DatePicker {
		&mut self.birthday
	}

	pub fn rating(&self) -> &StarRating {
		&self.rating
	}

	/// Reset is offered only once something differs from the defaults
	pub fn reset_enabled(&self) -> bool {
		self.state.is_dirty()
	}

	pub fn reset(&self) {
		self.state.reset();
	}

	/// Validate, then log the values and the rating
	pub fn submit(&self) -> Result<FormValues, ValidationErrors> {
		let mut submitted = FormValues::new();
		self.state.handle_submit(&schema, |values| {
			tracing::info!(values = ?values, "Form Value");
			tracing::info!(rating = self.rating.rating(), "Star Rating");
			submitted = values.clone();
		})?;
		Ok(submitted)
	}
}

impl Default for FormControlsView {
	fn default() -> Self {
		Self::new(Settings::default())
	}
}
