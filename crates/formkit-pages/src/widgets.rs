//! Widget view-models
//!
//! Each widget owns its local UI state and reads or writes the form value it is
//! bound to through a [`Signal`](crate::reactive::Signal). Rendering is left to
//! the caller.

pub mod combobox;
pub mod date_picker;
pub mod password_input;
pub mod select;
pub mod star_rating;
pub mod strength_meter;
pub mod text_input;
pub mod toggle;

pub use combobox::Combobox;
pub use date_picker::{DatePicker, format_ppp};
pub use password_input::{EventOutcome, PasswordInput, PasswordInputEvent, Popover, Visibility};
pub use select::Select;
pub use star_rating::StarRating;
pub use strength_meter::{MeterSegment, StrengthMeterView};
pub use text_input::TextInput;
pub use toggle::{Toggle, ToggleKind};

/// Rejected widget interaction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetError {
	#[error("'{0}' is not one of the options")]
	UnknownOption(String),

	#[error("{0} is disabled")]
	Disabled(String),

	#[error("{0} is read-only")]
	ReadOnly(String),

	#[error("date {0} is not selectable")]
	DateDisabled(chrono::NaiveDate),

	#[error("rating {value} is outside 0..={max}")]
	RatingOutOfRange { value: f64, max: f64 },
}
