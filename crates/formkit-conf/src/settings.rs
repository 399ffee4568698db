//! Typed settings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Error type for loading and validating settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("Environment error: {key}: {message}")]
	Env { key: String, message: String },

	#[error("Invalid settings: {0}")]
	Invalid(String),
}

/// Password input behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordSettings {
	/// Show the strength meter under signup password inputs
	pub show_strength: bool,
	/// Show the requirements popover on focus
	pub show_validation_rules: bool,
	/// Length threshold of the length rule
	pub min_length: usize,
}

impl Default for PasswordSettings {
	fn default() -> Self {
		Self {
			show_strength: true,
			show_validation_rules: true,
			min_length: 8,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerSettings {
	/// Dates before this are disabled
	pub min_date: NaiveDate,
	/// 0 = Sunday
	pub week_starts_on: u8,
	pub first_week_contains_date: u8,
}

impl Default for DatePickerSettings {
	fn default() -> Self {
		Self {
			min_date: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default(),
			week_starts_on: 0,
			first_week_contains_date: 1,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
	pub initial_value: f64,
	pub allow_fraction: bool,
	/// Fill colour per rating step, lowest first
	pub fill_colors: Vec<String>,
	/// Custom tooltip per star; empty means the numeric value is shown
	pub tooltips: Vec<String>,
}

impl Default for RatingSettings {
	fn default() -> Self {
		Self {
			initial_value: 2.5,
			allow_fraction: true,
			fill_colors: ["#f14f45", "#f16c45", "#f18845", "#f1b345", "#f1d045"]
				.into_iter()
				.map(String::from)
				.collect(),
			tooltips: Vec::new(),
		}
	}
}

/// Root settings value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub password: PasswordSettings,
	pub date_picker: DatePickerSettings,
	pub rating: RatingSettings,
	/// The city whose selection enables the area select
	pub area_sentinel_city: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			password: PasswordSettings::default(),
			date_picker: DatePickerSettings::default(),
			rating: RatingSettings::default(),
			area_sentinel_city: "cairo".to_string(),
		}
	}
}

impl Settings {
	/// Check cross-field constraints serde cannot express.
	///
	/// # Examples
	///
	/// ```
	/// use formkit_conf::Settings;
	///
	/// let mut settings = Settings::default();
	/// assert!(settings.validate().is_ok());
	///
	/// settings.rating.fill_colors.clear();
	/// assert!(settings.validate().is_err());
	/// ```
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.password.min_length == 0 {
			return Err(SettingsError::Invalid(
				"password.min_length must be at least 1".to_string(),
			));
		}
		if self.rating.fill_colors.is_empty() {
			return Err(SettingsError::Invalid(
				"rating.fill_colors must not be empty".to_string(),
			));
		}
		if self.date_picker.week_starts_on > 6 {
			return Err(SettingsError::Invalid(format!(
				"date_picker.week_starts_on must be 0-6, got {}",
				self.date_picker.week_starts_on
			)));
		}
		if !(1..=7).contains(&self.date_picker.first_week_contains_date) {
			return Err(SettingsError::Invalid(format!(
				"date_picker.first_week_contains_date must be 1-7, got {}",
				self.date_picker.first_week_contains_date
			)));
		}
		if !self.rating.initial_value.is_finite() || self.rating.initial_value < 0.0 {
			return Err(SettingsError::Invalid(format!(
				"rating.initial_value must be a non-negative number, got {}",
				self.rating.initial_value
			)));
		}
		Ok(())
	}

	/// Parse settings from TOML text and validate them.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let settings: Settings =
			toml::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		// Act
		let settings = Settings::default();

		// Assert
		assert!(settings.password.show_strength);
		assert!(settings.password.show_validation_rules);
		assert_eq!(
			settings.date_picker.min_date,
			NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
		);
		assert_eq!(settings.date_picker.week_starts_on, 0);
		assert_eq!(settings.date_picker.first_week_contains_date, 1);
		assert_eq!(settings.rating.initial_value, 2.5);
		assert_eq!(settings.rating.fill_colors.len(), 5);
		assert!(settings.rating.tooltips.is_empty());
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		// Arrange
		let content = r#"
area_sentinel_city = "alex"

[password]
show_strength = false
"#;

		// Act
		let settings = Settings::from_toml_str(content).unwrap();

		// Assert
		assert_eq!(settings.area_sentinel_city, "alex");
		assert!(!settings.password.show_strength);
		assert!(settings.password.show_validation_rules);
		assert_eq!(settings.password.min_length, 8);
	}

	#[rstest]
	fn test_min_date_parses_iso() {
		let settings = Settings::from_toml_str("[date_picker]\nmin_date = \"2000-02-29\"").unwrap();
		assert_eq!(
			settings.date_picker.min_date,
			NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()
		);
	}

	#[rstest]
	#[case("[password]\nmin_length = 0", "min_length")]
	#[case("[rating]\nfill_colors = []", "fill_colors")]
	#[case("[date_picker]\nweek_starts_on = 7", "week_starts_on")]
	#[case("[date_picker]\nfirst_week_contains_date = 0", "first_week_contains_date")]
	#[case("[rating]\ninitial_value = -1.0", "initial_value")]
	fn test_invalid_values_rejected(#[case] content: &str, #[case] key: &str) {
		// Act
		let err = Settings::from_toml_str(content).unwrap_err();

		// Assert
		assert!(matches!(err, SettingsError::Invalid(_)));
		assert!(err.to_string().contains(key));
	}

	#[rstest]
	fn test_malformed_toml_is_parse_error() {
		let err = Settings::from_toml_str("[password\nshow_strength = ").unwrap_err();
		assert!(matches!(err, SettingsError::Parse(_)));
	}
}
