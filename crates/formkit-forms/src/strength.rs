//! Password strength estimation
//!
//! Scoring is delegated to a [`StrengthScorer`]; this module only maps the
//! score to a level, a label, a colour and the segments of a 4-part meter.

use serde::{Deserialize, Serialize};

/// Colour of meter segments above the score.
pub const NEUTRAL_SEGMENT_COLOR: &str = "#e5e7eb";

/// Number of segments in the meter.
pub const METER_SEGMENTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrengthError {
	#[error("cannot score an empty password")]
	EmptyPassword,
}

/// External password-complexity scorer.
pub trait StrengthScorer {
	/// Score `password`; higher is stronger. Expected range is small (0-4).
	fn score(&self, password: &str) -> Result<u8, StrengthError>;
}

/// Scorer backed by the `zxcvbn` estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnScorer;

impl StrengthScorer for ZxcvbnScorer {
	fn score(&self, password: &str) -> Result<u8, StrengthError> {
		if password.is_empty() {
			return Err(StrengthError::EmptyPassword);
		}
		let entropy = zxcvbn::zxcvbn(password, &[]);
		Ok(entropy.score() as u8)
	}
}

/// Display level derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
	Weak,
	Fair,
	Good,
	Strong,
}

impl StrengthLevel {
	/// Map a score to its level; 3 and anything unmapped is `Strong`.
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::strength::StrengthLevel;
	///
	/// assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
	/// assert_eq!(StrengthLevel::from_score(2), StrengthLevel::Good);
	/// assert_eq!(StrengthLevel::from_score(7), StrengthLevel::Strong);
	/// ```
	pub fn from_score(score: u8) -> Self {
		match score {
			0 => StrengthLevel::Weak,
			1 => StrengthLevel::Fair,
			2 => StrengthLevel::Good,
			_ => StrengthLevel::Strong,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			StrengthLevel::Weak => "weak",
			StrengthLevel::Fair => "fair",
			StrengthLevel::Good => "good",
			StrengthLevel::Strong => "strong",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			StrengthLevel::Weak => "#9a3324",
			StrengthLevel::Fair => "#f6b318",
			StrengthLevel::Good => "#165865",
			StrengthLevel::Strong => "#198754",
		}
	}
}

/// Evaluated strength of one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthMeter {
	pub score: u8,
	pub level: StrengthLevel,
}

impl StrengthMeter {
	pub fn from_score(score: u8) -> Self {
		Self {
			score,
			level: StrengthLevel::from_score(score),
		}
	}

	/// Score `password`. Returns `Ok(None)` for an empty password: the meter
	/// is not shown at all and the scorer is never called.
	pub fn evaluate(
		scorer: &dyn StrengthScorer,
		password: &str,
	) -> Result<Option<Self>, StrengthError> {
		if password.is_empty() {
			return Ok(None);
		}
		let score = scorer.score(password)?;
		tracing::debug!(score, "password scored");
		Ok(Some(Self::from_score(score)))
	}

	pub fn label(&self) -> &'static str {
		self.level.label()
	}

	pub fn color(&self) -> &'static str {
		self.level.color()
	}

	/// Colour of each meter segment: segments `0..=score` use the level
	/// colour, the rest are neutral. Scores above 3 colour every segment.
	///
	/// # Examples
	///
	/// ```
	/// use formkit_forms::strength::StrengthMeter;
	///
	/// let meter = StrengthMeter::from_score(1);
	/// assert_eq!(meter.segments(), ["#f6b318", "#f6b318", "#e5e7eb", "#e5e7eb"]);
	/// ```
	pub fn segments(&self) -> [&'static str; METER_SEGMENTS] {
		let mut segments = [NEUTRAL_SEGMENT_COLOR; METER_SEGMENTS];
		for (index, segment) in segments.iter_mut().enumerate() {
			if index <= usize::from(self.score) {
				*segment = self.color();
			}
		}
		segments
	}
}
