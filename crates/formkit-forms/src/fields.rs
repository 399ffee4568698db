pub mod boolean_field;
pub mod char_field;
pub mod choice_field;
pub mod date_field;
pub mod email_field;

pub use boolean_field::BooleanField;
pub use char_field::CharField;
pub use choice_field::ChoiceField;
pub use date_field::DateField;
pub use email_field::EmailField;
