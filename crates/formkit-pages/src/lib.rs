//! formkit pages - reactive form state and widget view-models
//!
//! The browser-facing half of formkit, without any DOM:
//!
//! - [`reactive`]: `Signal` and `Memo` with explicit subscriptions
//! - [`catalog`]: constant reference tables behind the [`ReferenceData`] trait
//! - [`form`](mod@form): per-field signals, submit-time schema validation, dependent options
//! - [`widgets`]: state of each control (password input, selects, combobox, date picker, rating)
//! - [`views`]: the FormControls and Login forms assembled from the above
//!
//! ## Example
//!
//! ```
//! use formkit_pages::views::FormControlsView;
//!
//! let view = FormControlsView::default();
//! view.country_select().select("ksa").unwrap();
//! assert_eq!(view.state().text("city"), "lorem");
//! assert!(view.reset_enabled());
//!
//! view.reset();
//! assert!(!view.reset_enabled());
//! ```

pub mod catalog;
pub mod form;
pub mod reactive;
pub mod views;
pub mod widgets;

pub use catalog::{Catalog, ReferenceData, SelectOption};
pub use form::{Cascade, FormState, FormValue, FormValues, ValidationErrors};
pub use reactive::{Memo, Signal, Subscription};
pub use views::{FormControlsView, LoginView};
pub use widgets::WidgetError;
