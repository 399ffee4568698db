//! Form fields, validation and password helpers for formkit
//!
//! This crate provides the framework-independent half of formkit:
//! - Typed form fields with zod-style ordered checks and custom messages
//! - A [`Form`] that binds raw values, cleans them and collects errors per field
//! - The password requirement checklist and strength meter

pub mod field;
pub mod fields;
pub mod form;
pub mod password;
pub mod strength;
pub mod validators;

pub use field::{DEFAULT_REQUIRED_MESSAGE, FieldError, FieldResult, FormField, Widget};
pub use fields::{BooleanField, CharField, ChoiceField, DateField, EmailField};
pub use form::{ALL_FIELDS_KEY, Form, FormError, FormResult};
pub use password::{MIN_PASSWORD_LENGTH, PasswordRule, PasswordValidity, SPECIAL_CHARACTERS};
pub use strength::{
	StrengthError, StrengthLevel, StrengthMeter, StrengthScorer, ZxcvbnScorer,
};
pub use validators::{
	EmailValidator, PasswordPatternValidator, RegexValidator, StringValidator, UsernameValidator,
};
