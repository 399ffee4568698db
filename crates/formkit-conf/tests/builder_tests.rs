//! Integration tests for SettingsBuilder with files and environment variables.

use formkit_conf::{DefaultSource, EnvSource, SettingsBuilder, SettingsError, TomlFileSource};
use rstest::*;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[fixture]
fn temp_dir() -> TempDir {
	TempDir::new().expect("Failed to create temporary directory")
}

#[fixture]
fn config_file(temp_dir: TempDir) -> TempDir {
	let content = r##"
area_sentinel_city = "alex"

[password]
show_strength = false
min_length = 10

[rating]
initial_value = 4.0
fill_colors = ["#000000", "#ffffff"]
"##;
	fs::write(temp_dir.path().join("formkit.toml"), content).expect("Failed to write formkit.toml");
	temp_dir
}

#[rstest]
fn test_toml_overrides_defaults(config_file: TempDir) {
	// Arrange
	let path = config_file.path().join("formkit.toml");

	// Act
	let settings = SettingsBuilder::new()
		.add_source(DefaultSource::new())
		.add_source(TomlFileSource::new(path))
		.build()
		.expect("Failed to build settings");

	// Assert
	assert_eq!(settings.area_sentinel_city, "alex");
	assert!(!settings.password.show_strength);
	assert!(settings.password.show_validation_rules);
	assert_eq!(settings.password.min_length, 10);
	assert_eq!(settings.rating.initial_value, 4.0);
	assert_eq!(settings.rating.fill_colors, ["#000000", "#ffffff"]);
	assert!(settings.rating.allow_fraction);
}

#[rstest]
#[serial(formkit_env)]
fn test_env_overrides_toml(config_file: TempDir) {
	// Arrange
	let path = config_file.path().join("formkit.toml");
	unsafe {
		env::set_var("FORMKIT_PASSWORD__MIN_LENGTH", "14");
		env::set_var("FORMKIT_RATING__ALLOW_FRACTION", "false");
	}

	// Act
	let result = SettingsBuilder::standard(Some(path.as_path())).build();

	unsafe {
		env::remove_var("FORMKIT_PASSWORD__MIN_LENGTH");
		env::remove_var("FORMKIT_RATING__ALLOW_FRACTION");
	}

	// Assert
	let settings = result.expect("Failed to build settings");
	assert_eq!(settings.password.min_length, 14);
	assert!(!settings.rating.allow_fraction);
	assert_eq!(settings.area_sentinel_city, "alex");
}

#[rstest]
#[serial(formkit_env)]
fn test_custom_env_prefix() {
	unsafe {
		env::set_var("MYFORMS_AREA_SENTINEL_CITY", "mansoura");
	}

	let result = SettingsBuilder::new()
		.add_source(DefaultSource::new())
		.add_source(EnvSource::new().with_prefix("MYFORMS_"))
		.build();

	unsafe {
		env::remove_var("MYFORMS_AREA_SENTINEL_CITY");
	}

	assert_eq!(result.unwrap().area_sentinel_city, "mansoura");
}

#[rstest]
fn test_malformed_file_reports_path(temp_dir: TempDir) {
	// Arrange
	let path = temp_dir.path().join("broken.toml");
	fs::write(&path, "[password\n").unwrap();

	// Act
	let err = SettingsBuilder::new()
		.add_source(TomlFileSource::new(&path))
		.build()
		.unwrap_err();

	// Assert
	assert!(matches!(err, SettingsError::Parse(_)));
	assert!(err.to_string().contains("broken.toml"));
}

#[rstest]
fn test_missing_file_falls_back_to_defaults(temp_dir: TempDir) {
	let settings = SettingsBuilder::new()
		.add_source(DefaultSource::new())
		.add_source(TomlFileSource::new(temp_dir.path().join("absent.toml")))
		.build()
		.unwrap();
	assert_eq!(settings.area_sentinel_city, "cairo");
}
