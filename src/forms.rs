//! Fields, validation and password helpers

pub use formkit_forms::*;
