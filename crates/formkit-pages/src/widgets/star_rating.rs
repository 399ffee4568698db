//! Star rating

use super::WidgetError;
use crate::reactive::Signal;
use formkit_conf::RatingSettings;

/// Number of stars shown
pub const STAR_COUNT: usize = 5;

/// Rating kept outside the form values, in `0.0..=5.0`.
///
/// With fractions allowed a pick snaps up to the next half star,
/// otherwise up to the next whole star.
#[derive(Debug, Clone)]
pub struct StarRating {
	rating: Signal<f64>,
	allow_fraction: bool,
	fill_colors: Vec<String>,
	tooltips: Vec<String>,
}

impl StarRating {
	pub fn new(settings: &RatingSettings) -> Self {
		let allow_fraction = settings.allow_fraction;
		Self {
			rating: Signal::new(snap(settings.initial_value, allow_fraction).clamp(0.0, max())),
			allow_fraction,
			fill_colors: settings.fill_colors.clone(),
			tooltips: settings.tooltips.clone(),
		}
	}

	pub fn rating(&self) -> f64 {
		self.rating.get()
	}

	/// Shared handle, for callers that want to watch the rating
	pub fn signal(&self) -> &Signal<f64> {
		&self.rating
	}

	/// Set the rating from a pointer position in stars
	///
	/// # Examples
	///
	/// ```
	/// use formkit_conf::RatingSettings;
	/// use formkit_pages::widgets::StarRating;
	///
	/// let rating = StarRating::new(&RatingSettings::default());
	/// rating.set_rating(3.2).unwrap();
	/// assert_eq!(rating.rating(), 3.5);
	/// ```
	pub fn set_rating(&self, value: f64) -> Result<(), WidgetError> {
		if !value.is_finite() || !(0.0..=max()).contains(&value) {
			return Err(WidgetError::RatingOutOfRange { value, max: max() });
		}
		let snapped = snap(value, self.allow_fraction);
		tracing::debug!(rating = snapped, "rating changed");
		self.rating.set(snapped);
		Ok(())
	}

	/// Index into the palette for the current value; `None` at zero
	fn step(&self) -> Option<usize> {
		let rating = self.rating();
		(rating > 0.0).then(|| rating.ceil() as usize - 1)
	}

	/// Colour of the filled stars
	pub fn fill_color(&self) -> Option<&str> {
		self.step()
			.and_then(|index| self.fill_colors.get(index))
			.map(String::as_str)
	}

	/// Custom label for the current step, else the numeric value ("2.5")
	pub fn tooltip(&self) -> String {
		self.step()
			.and_then(|index| self.tooltips.get(index))
			.cloned()
			.unwrap_or_else(|| self.rating().to_string())
	}

	/// How much of star `star` (0-based) is filled, from 0 to 1
	pub fn filled_fraction(&self, star: usize) -> f64 {
		(self.rating() - star as f64).clamp(0.0, 1.0)
	}
}

fn max() -> f64 {
	STAR_COUNT as f64
}

fn snap(value: f64, allow_fraction: bool) -> f64 {
	if allow_fraction {
		(value * 2.0).ceil() / 2.0
	} else {
		value.ceil()
	}
}
