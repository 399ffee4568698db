//! # formkit
//!
//! Validation, reactive state and widget view-models for browser-style forms.
//!
//! formkit models the logic behind a set of form controls without rendering
//! anything: a renderer reads the state each widget exposes and forwards user
//! input back as events or value changes.
//!
//! ## Feature Flags
//!
//! - `forms` - fields, the `Form` engine, password rules and strength scoring
//! - `conf` - layered settings (defaults, TOML file, `FORMKIT_*` environment)
//! - `pages` - signals, form state, widgets and the bundled views
//! - `full` (default) - all of the above
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "pages")]
//! # {
//! use formkit::pages::views::FormControlsView;
//! use formkit::SettingsBuilder;
//!
//! let settings = SettingsBuilder::new()
//!     .add_source(formkit::conf::DefaultSource::new())
//!     .build()
//!     .unwrap();
//! let view = FormControlsView::new(settings);
//!
//! let errors = view.submit().unwrap_err();
//! assert_eq!(errors.first("area"), Some("Area is required"));
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "conf")]
pub use formkit_conf::{Settings, SettingsBuilder, SettingsError};

#[cfg(feature = "forms")]
pub use formkit_forms::{
	FieldError, Form, FormError, FormField, PasswordValidity, StrengthMeter, StrengthScorer,
};

#[cfg(feature = "pages")]
pub use formkit_pages::{FormState, FormValue, FormValues, Signal, ValidationErrors};
