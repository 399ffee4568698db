//! Mounted forms
//!
//! A view owns the [`FormState`](crate::form::FormState) of one form, its
//! schema and the widgets bound to it. Submitting runs the schema and passes
//! the values to a logging handler.

pub mod form_controls;
pub mod login;

pub use form_controls::FormControlsView;
pub use login::LoginView;

use crate::form::{FormState, FormValue};
use crate::reactive::Signal;

/// Signal of a field declared in the view's defaults
fn field(state: &FormState, name: &str) -> Signal<FormValue> {
	match state.signal(name) {
		Ok(signal) => signal.clone(),
		Err(err) => {
			tracing::warn!(%err, "widget bound to a field without a default");
			Signal::new(FormValue::Unset)
		}
	}
}
