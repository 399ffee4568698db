//! Password requirement checklist
//!
//! [`PasswordValidity`] is the state behind the requirements popover shown next
//! to a password input. Each rule is evaluated independently and the whole
//! record is recomputed on every change; there is no incremental update.
//!
//! The checklist is advisory. Form schemas use the stricter
//! [`PasswordPatternValidator`](crate::validators::PasswordPatternValidator).

use crate::field::{is_whitespace, text_length, trim_whitespace};
use serde::{Deserialize, Serialize};

/// Minimum trimmed length for the length rule.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARACTERS: [char; 3] = ['@', '$', '!'];

/// One requirement of the checklist, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordRule {
	MinLength,
	LowerCase,
	UpperCase,
	SpecialCharacter,
	MinNumbers,
	NoSpaces,
}

impl PasswordRule {
	pub const ALL: [PasswordRule; 6] = [
		PasswordRule::MinLength,
		PasswordRule::LowerCase,
		PasswordRule::UpperCase,
		PasswordRule::SpecialCharacter,
		PasswordRule::MinNumbers,
		PasswordRule::NoSpaces,
	];

	/// Requirement text shown in the checklist.
	///
	/// `MinNumbers` says "3 numbers" while the check only needs one digit.
	pub fn text(self) -> &'static str {
		match self {
			PasswordRule::MinLength => {
				"No less than 8 characters, but preferably to be 14 characters or more."
			}
			PasswordRule::LowerCase => "Must includes at least 1 Lowercase letter.",
			PasswordRule::UpperCase => "Must includes at least 1 Uppercase letter.",
			PasswordRule::SpecialCharacter => "Must includes one special character @$!",
			PasswordRule::MinNumbers => "Must includes at least 3 numbers.",
			PasswordRule::NoSpaces => "Do not include spaces.",
		}
	}
}

/// Result of evaluating every [`PasswordRule`] against a password.
///
/// `None` means the rule has not been evaluated yet. After
/// [`PasswordValidity::evaluate`] every entry is `Some`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordValidity {
	pub min_length: Option<bool>,
	pub lower_case: Option<bool>,
	pub upper_case: Option<bool>,
	pub special_character: Option<bool>,
	pub min_numbers: Option<bool>,
	pub no_spaces: Option<bool>,
}

impl PasswordValidity {
	/// The state before the first evaluation.
	pub fn unevaluated() -> Self {
		Self::default()
	}

	/// Evaluate every rule. A missing password is treated as empty.
	///
	/// The character-class rules only inspect the text before the first line
	/// terminator; the whitespace rule inspects the whole value.
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::password::PasswordValidity;
	///
	/// let v = PasswordValidity::evaluate(Some("Ab1!"));
	/// assert_eq!(v.min_length, Some(false));
	/// assert_eq!(v.lower_case, Some(true));
	/// assert_eq!(v.upper_case, Some(true));
	/// assert_eq!(v.special_character, Some(true));
	/// assert_eq!(v.min_numbers, Some(true));
	/// assert_eq!(v.no_spaces, Some(true));
	/// ```
	pub fn evaluate(password: Option<&str>) -> Self {
		Self::evaluate_with_min_length(password, MIN_PASSWORD_LENGTH)
	}

	/// [`PasswordValidity::evaluate`] with a configurable length threshold.
	pub fn evaluate_with_min_length(password: Option<&str>, min_length: usize) -> Self {
		let password = password.unwrap_or_default();
		let line = first_line(password);

		Self {
			min_length: Some(text_length(trim_whitespace(password)) >= min_length),
			lower_case: Some(line.chars().any(|c| c.is_ascii_lowercase())),
			upper_case: Some(line.chars().any(|c| c.is_ascii_uppercase())),
			special_character: Some(line.chars().any(|c| SPECIAL_CHARACTERS.contains(&c))),
			min_numbers: Some(line.chars().any(|c| c.is_ascii_digit())),
			no_spaces: Some(!password.chars().any(is_whitespace)),
		}
	}

	/// State of a single rule.
	pub fn get(&self, rule: PasswordRule) -> Option<bool> {
		match rule {
			PasswordRule::MinLength => self.min_length,
			PasswordRule::LowerCase => self.lower_case,
			PasswordRule::UpperCase => self.upper_case,
			PasswordRule::SpecialCharacter => self.special_character,
			PasswordRule::MinNumbers => self.min_numbers,
			PasswordRule::NoSpaces => self.no_spaces,
		}
	}

	/// `(rule, state)` pairs in display order.
	pub fn checklist(&self) -> impl Iterator<Item = (PasswordRule, Option<bool>)> + '_ {
		PasswordRule::ALL.into_iter().map(|rule| (rule, self.get(rule)))
	}

	pub fn is_evaluated(&self) -> bool {
		self.checklist().all(|(_, state)| state.is_some())
	}

	/// Whether every rule has been evaluated and passed.
	pub fn all_passed(&self) -> bool {
		self.checklist().all(|(_, state)| state == Some(true))
	}
}

fn first_line(s: &str) -> &str {
	match s.find(['\n', '\r', '\u{2028}', '\u{2029}']) {
		Some(end) => &s[..end],
		None => s,
	}
}
