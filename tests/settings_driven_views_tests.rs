//! Views configured through the settings layers
//!
//! Settings come from a TOML file and `FORMKIT_` environment variables and
//! change how the FormControls view gates the area select, renders the
//! password input and seeds the rating.

use formkit::SettingsBuilder;
use formkit::conf::{DefaultSource, EnvSource, TomlFileSource};
use formkit::pages::views::FormControlsView;
use rstest::{fixture, rstest};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[fixture]
fn settings_dir() -> TempDir {
	let dir = TempDir::new().expect("Failed to create temporary directory");
	let content = r##"
area_sentinel_city = "alex"

[password]
show_strength = false

[rating]
initial_value = 3.2
allow_fraction = false
tooltips = ["Terrible", "Bad", "Average", "Great", "Prefect"]

[date_picker]
min_date = "2000-01-01"
"##;
	fs::write(dir.path().join("formkit.toml"), content).expect("Failed to write formkit.toml");
	dir
}

#[rstest]
fn test_file_settings_shape_the_view(settings_dir: TempDir) -> anyhow::Result<()> {
	// Arrange
	let settings = SettingsBuilder::new()
		.add_source(DefaultSource::new())
		.add_source(TomlFileSource::new(settings_dir.path().join("formkit.toml")))
		.build()?;

	// Act
	let mut view = FormControlsView::new(settings);

	// Assert
	assert!(view.area_enabled());
	assert!(!view.area_select().is_disabled());
	assert!(!view.password_input().shows_strength());
	assert!(view.password_input().shows_validation_rules());
	assert_eq!(view.rating().rating(), 4.0);
	assert_eq!(view.rating().tooltip(), "Great");

	let too_early = chrono::NaiveDate::from_ymd_opt(1999, 12, 31).expect("valid date");
	assert!(view.birthday_picker().is_disabled(too_early));
	Ok(())
}

#[rstest]
#[serial(formkit_env)]
fn test_environment_overrides_file(settings_dir: TempDir) -> anyhow::Result<()> {
	// Arrange
	unsafe {
		env::set_var("FORMKIT_AREA_SENTINEL_CITY", "mansoura");
		env::set_var("FORMKIT_PASSWORD__SHOW_VALIDATION_RULES", "false");
	}
	let path = settings_dir.path().join("formkit.toml");

	// Act
	let result = SettingsBuilder::standard(Some(path.as_path())).build();
	unsafe {
		env::remove_var("FORMKIT_AREA_SENTINEL_CITY");
		env::remove_var("FORMKIT_PASSWORD__SHOW_VALIDATION_RULES");
	}
	let mut view = FormControlsView::new(result?);

	// Assert
	assert!(!view.area_enabled());
	view.city_select().select("mansoura")?;
	assert!(view.area_enabled());
	assert!(!view.password_input().shows_validation_rules());
	Ok(())
}

#[rstest]
#[serial(formkit_env)]
fn test_invalid_environment_value_is_rejected() {
	// Arrange
	unsafe {
		env::set_var("FORMKIT_PASSWORD__MIN_LENGTH", "0");
	}

	// Act
	let result = SettingsBuilder::new()
		.add_source(DefaultSource::new())
		.add_source(EnvSource::new())
		.build();
	unsafe {
		env::remove_var("FORMKIT_PASSWORD__MIN_LENGTH");
	}

	// Assert
	assert!(matches!(result, Err(formkit::SettingsError::Invalid(_))));
}
