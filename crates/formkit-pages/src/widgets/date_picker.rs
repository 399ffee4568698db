//! Date picker

use super::WidgetError;
use crate::form::FormValue;
use crate::reactive::Signal;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use formkit_conf::DatePickerSettings;

pub const DATE_PICKER_PLACEHOLDER: &str = "Pick a date";

/// Long localized date, e.g. `January 15th, 2025`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formkit_pages::widgets::format_ppp;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(format_ppp(date), "January 15th, 2025");
/// ```
pub fn format_ppp(date: NaiveDate) -> String {
	format!(
		"{} {}, {}",
		date.format("%B"),
		ordinal(date.day()),
		date.year()
	)
}

fn ordinal(n: u32) -> String {
	let suffix = match (n % 10, n % 100) {
		(_, 11..=13) => "th",
		(1, _) => "st",
		(2, _) => "nd",
		(3, _) => "rd",
		_ => "th",
	};
	format!("{}{}", n, suffix)
}

/// Calendar popover bound to a date form value.
///
/// Dates after today and before the configured minimum are disabled.
#[derive(Debug, Clone)]
pub struct DatePicker {
	value: Signal<FormValue>,
	min_date: NaiveDate,
	today: NaiveDate,
	week_starts_on: Weekday,
	first_week_contains_date: u8,
	open: bool,
}

impl DatePicker {
	pub fn new(value: Signal<FormValue>, settings: &DatePickerSettings) -> Self {
		Self {
			value,
			min_date: settings.min_date,
			today: Local::now().date_naive(),
			week_starts_on: weekday_from_index(settings.week_starts_on),
			first_week_contains_date: settings.first_week_contains_date,
			open: false,
		}
	}

	/// Fix "today" instead of reading the local clock
	pub fn with_today(mut self, today: NaiveDate) -> Self {
		self.today = today;
		self
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn set_open(&mut self, open: bool) {
		self.open = open;
	}

	pub fn week_starts_on(&self) -> Weekday {
		self.week_starts_on
	}

	pub fn first_week_contains_date(&self) -> u8 {
		self.first_week_contains_date
	}

	pub fn is_disabled(&self, date: NaiveDate) -> bool {
		date > self.today || date < self.min_date
	}

	pub fn selected(&self) -> Option<NaiveDate> {
		self.value.with(FormValue::as_date)
	}

	/// Choose `date` and close the popover
	pub fn select(&mut self, date: NaiveDate) -> Result<(), WidgetError> {
		if self.is_disabled(date) {
			return Err(WidgetError::DateDisabled(date));
		}
		self.value.set(FormValue::Date(date));
		self.open = false;
		Ok(())
	}

	/// Trigger text: the formatted date, else the placeholder
	pub fn display(&self) -> String {
		match self.selected() {
			Some(date) => format_ppp(date),
			None => DATE_PICKER_PLACEHOLDER.to_string(),
		}
	}

	/// Rows of the month grid, each starting on the configured weekday.
	///
	/// Cells outside the month are `None`.
	pub fn month_weeks(&self, year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
		let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
			return Vec::new();
		};

		let mut weeks = Vec::new();
		let mut week = [None; 7];
		let mut column = self.days_into_week(first) as usize;
		let mut next = Some(first);
		while let Some(day) = next.filter(|d| d.month() == month) {
			week[column] = Some(day);
			column += 1;
			if column == 7 {
				weeks.push(week);
				week = [None; 7];
				column = 0;
			}
			next = day.succ_opt();
		}
		if column > 0 {
			weeks.push(week);
		}
		weeks
	}

	/// Week of the year `date` falls in, as shown beside each grid row.
	///
	/// Week 1 is the week holding January `first_week_contains_date`, so the
	/// first days of January may belong to the last week of the previous
	/// year. `None` at the edges of the supported date range.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use formkit_conf::DatePickerSettings;
	/// use formkit_pages::form::FormValue;
	/// use formkit_pages::reactive::Signal;
	/// use formkit_pages::widgets::DatePicker;
	///
	/// let picker = DatePicker::new(Signal::new(FormValue::Unset), &DatePickerSettings::default());
	/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
	/// assert_eq!(picker.week_number(date), Some(23));
	/// ```
	pub fn week_number(&self, date: NaiveDate) -> Option<u32> {
		let year = date.year();
		let mut first = self.first_week_start(year)?;
		if let Some(next) = year.checked_add(1).and_then(|y| self.first_week_start(y))
			&& date >= next
		{
			first = next;
		} else if date < first {
			first = self.first_week_start(year.checked_sub(1)?)?;
		}
		let weeks = (self.start_of_week(date)? - first).num_days() / 7;
		u32::try_from(weeks + 1).ok()
	}

	fn days_into_week(&self, date: NaiveDate) -> u32 {
		(date.weekday().num_days_from_sunday() + 7 - self.week_starts_on.num_days_from_sunday()) % 7
	}

	fn start_of_week(&self, date: NaiveDate) -> Option<NaiveDate> {
		date.checked_sub_days(Days::new(self.days_into_week(date).into()))
	}

	fn first_week_start(&self, year: i32) -> Option<NaiveDate> {
		let day = u32::from(self.first_week_contains_date.clamp(1, 7));
		self.start_of_week(NaiveDate::from_ymd_opt(year, 1, day)?)
	}
}

fn weekday_from_index(index: u8) -> Weekday {
	match index % 7 {
		0 => Weekday::Sun,
		1 => Weekday::Mon,
		2 => Weekday::Tue,
		3 => Weekday::Wed,
		4 => Weekday::Thu,
		5 => Weekday::Fri,
		_ => Weekday::Sat,
	}
}
