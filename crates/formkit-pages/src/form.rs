//! Form state orchestration
//!
//! - [`FormState`]: one signal per field, defaults, dirty tracking and submit
//! - [`Cascade`]: option lists derived from another field
//! - [`resolve`]: the schema adapter used on submit

pub mod cascade;
pub mod state;
pub mod values;

pub use cascade::Cascade;
pub use state::{FormState, FormStateError, Schema, ValidationErrors, resolve};
pub use values::{FormValue, FormValues};
