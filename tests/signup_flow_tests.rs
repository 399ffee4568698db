//! End-to-end signup and login flows through the facade crate

use chrono::NaiveDate;
use formkit::pages::views::{FormControlsView, LoginView};
use formkit::pages::widgets::{PasswordInputEvent, Popover, Visibility};
use formkit::{FormValue, PasswordValidity};
use rstest::{fixture, rstest};

#[fixture]
fn view() -> FormControlsView {
	FormControlsView::default()
}

#[rstest]
fn test_complete_signup(mut view: FormControlsView) -> anyhow::Result<()> {
	// Arrange
	view.username_input().set_text("mona_92");
	view.email_input().set_text("mona@example.com");

	let password = view.password_input();
	password.handle(PasswordInputEvent::Focus);
	password.set_password("Secret12!");
	let checklist: Vec<_> = password.rules().map(|r| r.checklist().collect()).unwrap_or_default();
	password.handle(PasswordInputEvent::PointerDownOutside);

	view.country_select().select("egypt")?;
	view.city_select().select("cairo")?;
	view.area_select().select("old-town")?;
	view.gender_radio().select("female")?;
	view.terms_checkbox().toggle()?;
	view.bio_input().set_text("Backend developer from Cairo.");
	let language = view.language_combobox();
	language.set_open(true);
	language.set_query("jap");
	language.select("ja")?;
	view.birthday_picker()
		.select(NaiveDate::from_ymd_opt(1992, 5, 23).expect("valid date"))?;
	view.rating().set_rating(4.5)?;

	// Act
	let values = view.submit()?;

	// Assert
	assert_eq!(checklist.len(), 6);
	assert!(checklist.iter().all(|(_, passed)| *passed == Some(true)));
	assert_eq!(view.password_input().popover(), Popover::Closed);
	assert_eq!(values.get("language"), Some(&FormValue::text("ja")));
	assert_eq!(values.get("terms"), Some(&FormValue::Bool(true)));
	assert_eq!(values.get("securityEmails"), Some(&FormValue::Bool(true)));
	assert_eq!(values.names().count(), 13);
	Ok(())
}

#[rstest]
fn test_first_error_per_field_after_failed_submit(view: FormControlsView) {
	// Arrange
	view.username_input().set_text("");
	view.state().set_value("country", "").expect("known field");

	// Act
	let errors = view.submit().unwrap_err();

	// Assert
	assert_eq!(errors.first("username"), Some("Username must be at least 2 characters."));
	assert_eq!(errors.first("country"), Some("Country is required"));
	assert_eq!(errors.first("city"), Some("City is required"));
	assert_eq!(view.error("city").as_deref(), Some("City is required"));
}

#[rstest]
fn test_reset_after_edits(mut view: FormControlsView) {
	// Arrange
	view.country_select().select("ksa").expect("known country");
	view.password_input().set_password("abc");
	let _ = view.submit();

	// Act
	view.reset();

	// Assert
	assert!(!view.reset_enabled());
	assert_eq!(view.state().text("city"), "alex");
	assert_eq!(view.state().text("password"), "");
	assert!(view.state().errors().with(|e| e.is_empty()));
}

#[rstest]
fn test_single_digit_satisfies_number_rule() {
	let validity = PasswordValidity::evaluate(Some("Abcdefg1!"));
	assert!(validity.all_passed());
}

#[rstest]
fn test_login_flow() -> anyhow::Result<()> {
	// Arrange
	let mut login = LoginView::new();
	login.email_input().set_text("user@example.com");
	let password = login.password_input();
	password.set_password("longenough");
	password.handle(PasswordInputEvent::TogglePressed);

	// Act
	let values = login.submit()?;

	// Assert
	assert_eq!(login.password_input().visibility(), Visibility::Visible);
	assert_eq!(values.get("password"), Some(&FormValue::text("longenough")));
	Ok(())
}
