//! Strength meter presentation

use formkit_forms::strength::{METER_SEGMENTS, StrengthError, StrengthMeter, StrengthScorer};

/// One bar of the meter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterSegment {
	pub color: &'static str,
	pub filled: bool,
}

/// What is rendered under a password input with strength display enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthMeterView {
	meter: StrengthMeter,
}

impl StrengthMeterView {
	/// `None` for an empty password; the meter is not shown at all.
	pub fn for_password(
		scorer: &dyn StrengthScorer,
		password: &str,
	) -> Result<Option<Self>, StrengthError> {
		Ok(StrengthMeter::evaluate(scorer, password)?.map(|meter| Self { meter }))
	}

	pub fn from_meter(meter: StrengthMeter) -> Self {
		Self { meter }
	}

	pub fn meter(&self) -> &StrengthMeter {
		&self.meter
	}

	pub fn segments(&self) -> [MeterSegment; METER_SEGMENTS] {
		let level = self.meter.color();
		self.meter.segments().map(|color| MeterSegment {
			color,
			filled: color == level,
		})
	}

	/// Label as displayed, first letter capitalised ("Good")
	pub fn label_text(&self) -> String {
		let label = self.meter.label();
		let mut chars = label.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		}
	}

	pub fn label_color(&self) -> &'static str {
		self.meter.color()
	}
}
