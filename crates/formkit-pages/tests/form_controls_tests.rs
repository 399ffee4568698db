//! FormControls view behaviour through its public widgets
//!
//! Covers the cascade, the area gate, password rules and strength, submit-time
//! validation and the reset control.

use chrono::NaiveDate;
use formkit_forms::{PasswordRule, PasswordValidity, StrengthError, StrengthLevel, StrengthScorer};
use formkit_pages::catalog::{Catalog, ReferenceData};
use formkit_pages::form::FormValue;
use formkit_pages::views::FormControlsView;
use formkit_pages::widgets::{PasswordInputEvent, Popover};
use rstest::{fixture, rstest};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

#[fixture]
fn view() -> FormControlsView {
	FormControlsView::default()
}

fn fill_valid(view: &FormControlsView) {
	let state = view.state();
	state.set_value("password", "Abcdef1!").unwrap();
	state.set_value("city", "cairo").unwrap();
	state.set_value("area", "old-town").unwrap();
	state.set_value("gender", "male").unwrap();
	state.set_value("bio", "Ten or more characters").unwrap();
	state
		.set_value("birthday", NaiveDate::from_ymd_opt(2000, 1, 15).unwrap())
		.unwrap();
}

#[rstest]
#[case("egypt", &["alex", "cairo", "mansoura"])]
#[case("ksa", &["lorem", "ipsum"])]
#[case("uae", &["gada"])]
fn test_city_options_follow_country(
	view: FormControlsView,
	#[case] country: &str,
	#[case] expected: &[&str],
) {
	// Act
	view.country_select().select(country).unwrap();

	// Assert
	let options: Vec<String> = view.city_options().into_iter().map(|o| o.value).collect();
	assert_eq!(options, expected);
	assert_eq!(view.state().text("city"), expected[0]);
}

#[rstest]
fn test_city_resets_even_when_still_listed(view: FormControlsView) {
	// Arrange
	view.city_select().select("mansoura").unwrap();

	// Act
	view.country_select().select("ksa").unwrap();
	view.country_select().select("egypt").unwrap();

	// Assert
	assert_eq!(view.state().text("city"), "alex");
}

#[rstest]
fn test_unknown_country_empties_city(view: FormControlsView) {
	view.state().set_value("country", "narnia").unwrap();
	assert!(view.city_options().is_empty());
	assert_eq!(view.state().text("city"), "");
	assert_eq!(view.city_select().display_text(), "Select a City");
}

#[rstest]
fn test_area_enabled_only_for_cairo(view: FormControlsView) {
	for city in Catalog.cities() {
		view.state().set_value("city", city.value).unwrap();
		assert_eq!(view.area_enabled(), city.value == "cairo", "city {}", city.value);
	}
}

#[rstest]
fn test_password_rules_in_popover(mut view: FormControlsView) {
	// Arrange
	let input = view.password_input();
	input.set_password("Ab1!");

	// Act
	input.handle(PasswordInputEvent::Focus);
	let rules = input.rules().unwrap();

	// Assert
	assert_eq!(input.popover(), Popover::Open);
	assert_eq!(rules.get(PasswordRule::MinLength), Some(false));
	assert_eq!(rules, PasswordValidity::evaluate(Some("Ab1!")));

	input.handle(PasswordInputEvent::EscapeKey);
	assert!(input.rules().is_none());
}

struct CountingScorer {
	calls: Rc<Cell<usize>>,
}

impl StrengthScorer for CountingScorer {
	fn score(&self, _password: &str) -> Result<u8, StrengthError> {
		self.calls.set(self.calls.get() + 1);
		Ok(2)
	}
}

#[rstest]
fn test_strength_meter_is_lazy(mut view: FormControlsView) {
	// Arrange
	let built = Rc::new(Cell::new(0));
	let calls = Rc::new(Cell::new(0));
	let (built_in, calls_in) = (built.clone(), calls.clone());
	let input = view.password_input();
	input.set_scorer_factory(move || -> Box<dyn StrengthScorer> {
		built_in.set(built_in.get() + 1);
		Box::new(CountingScorer {
			calls: calls_in.clone(),
		})
	});

	// Act
	let empty = input.strength().unwrap();
	input.set_password("hunter2");
	let first = input.strength().unwrap().unwrap();
	input.set_password("hunter22");
	input.strength().unwrap();

	// Assert
	assert!(empty.is_none());
	assert_eq!(first.meter().level, StrengthLevel::Good);
	assert_eq!(built.get(), 1);
	assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_gender_required_and_terms_not(view: FormControlsView) {
	// Arrange
	fill_valid(&view);
	view.state().set_value("gender", "").unwrap();

	// Act
	let errors = view.submit().unwrap_err();

	// Assert
	assert_eq!(errors.first("gender"), Some("You need to select gender type"));
	assert_eq!(errors.len(), 1);

	view.gender_radio().select("others").unwrap();
	assert!(view.submit().is_ok());
	assert!(!view.terms_checkbox().checked());
}

#[rstest]
#[case("A", "Username must be at least 2 characters.")]
#[case("Ahmed Ali", "Name must contain only letters, numbers, or underscores")]
fn test_username_messages(view: FormControlsView, #[case] username: &str, #[case] message: &str) {
	fill_valid(&view);
	view.username_input().set_text(username);
	let errors = view.submit().unwrap_err();
	assert_eq!(errors.first("username"), Some(message));
}

#[rstest]
#[case("")]
#[case("not-an-email")]
fn test_email_messages(view: FormControlsView, #[case] email: &str) {
	fill_valid(&view);
	view.email_input().set_text(email);
	assert_eq!(view.submit().unwrap_err().first("useremail"), Some("Invalid email address"));
}

#[rstest]
fn test_permissive_rules_strict_schema(mut view: FormControlsView) {
	// Arrange
	fill_valid(&view);
	view.password_input().set_password("Abcdef1!#");

	// Act
	let rules = PasswordValidity::evaluate(Some("Abcdef1!#"));
	let errors = view.submit().unwrap_err();

	// Assert
	assert!(rules.all_passed());
	assert_eq!(errors.first("password"), Some("Password not Valid"));
}

#[rstest]
fn test_errors_clear_after_valid_submit(view: FormControlsView) {
	// Arrange
	assert!(view.submit().is_err());
	assert!(view.error("area").is_some());

	// Act
	fill_valid(&view);
	let values = view.submit().unwrap();

	// Assert
	assert_eq!(view.error("area"), None);
	assert_eq!(
		values.get("birthday"),
		Some(&FormValue::Date(NaiveDate::from_ymd_opt(2000, 1, 15).unwrap()))
	);
}

#[rstest]
fn test_reset_control_follows_dirty_state(view: FormControlsView) {
	// Arrange
	assert!(!view.reset_enabled());

	// Act
	view.marketing_switch().toggle().unwrap();
	let dirty = view.reset_enabled();
	view.marketing_switch().toggle().unwrap();

	// Assert
	assert!(dirty);
	assert!(!view.reset_enabled());
}

#[rstest]
fn test_birthday_picker_writes_date(mut view: FormControlsView) {
	let picker = view.birthday_picker();
	let day = NaiveDate::from_ymd_opt(1995, 8, 11).unwrap();

	picker.select(day).unwrap();

	assert_eq!(picker.display(), "August 11th, 1995");
	assert!(view.reset_enabled());
}

#[rstest]
fn test_submit_logs_values_and_rating(view: FormControlsView) {
	use tracing_subscriber::layer::SubscriberExt as _;
	use tracing_subscriber::util::SubscriberInitExt as _;

	// Arrange
	struct LogCapture {
		logs: Arc<Mutex<Vec<String>>>,
	}

	impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
		fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
			struct MessageVisitor {
				message: String,
			}

			impl tracing::field::Visit for MessageVisitor {
				fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
					if field.name() == "message" {
						self.message = format!("{:?}", value);
					}
				}
			}

			let mut visitor = MessageVisitor {
				message: String::new(),
			};
			event.record(&mut visitor);
			self.logs.lock().unwrap().push(format!("[{}] {}", event.metadata().level(), visitor.message));
		}
	}

	let logs = Arc::new(Mutex::new(Vec::new()));
	let _guard = tracing_subscriber::registry()
		.with(LogCapture { logs: logs.clone() })
		.set_default();
	fill_valid(&view);

	// Act
	view.submit().unwrap();

	// Assert
	let captured = logs.lock().unwrap();
	assert!(captured.iter().any(|l| l == "[INFO] Form Value"));
	assert!(captured.iter().any(|l| l == "[INFO] Star Rating"));
}
