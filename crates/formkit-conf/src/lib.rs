//! Settings for formkit
//!
//! Widget and view defaults are kept in a typed [`Settings`] value. A
//! [`SettingsBuilder`] layers built-in defaults, TOML files and
//! `FORMKIT_`-prefixed environment variables, later sources winning.
//!
//! ```
//! use formkit_conf::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.password.min_length, 8);
//! assert_eq!(settings.area_sentinel_city, "cairo");
//! ```

pub mod builder;
pub mod settings;
pub mod sources;

pub use builder::SettingsBuilder;
pub use settings::{
	DatePickerSettings, PasswordSettings, RatingSettings, Settings, SettingsError,
};
pub use sources::{ConfigSource, DefaultSource, EnvSource, TomlFileSource};
