//! Password input
//!
//! A masked text field with a visibility toggle, an optional requirements
//! popover and an optional strength meter. The two optional parts are
//! independent and can be shown together.
//!
//! ```text
//!            TogglePressed                 Focus / PointerDownInside
//!   Hidden <───────────────> Visible    Closed ─────────────────────> Open
//!                                              <─────────────────────
//!                                   EscapeKey / PointerDownOutside / FocusOutside
//! ```
//!
//! `Blur` and `OpenChange` leave the popover as it is; only the explicit
//! escape and outside-interaction events close it.

use crate::form::FormValue;
use crate::reactive::Signal;
use crate::widgets::strength_meter::StrengthMeterView;
use formkit_conf::PasswordSettings;
use formkit_forms::password::{MIN_PASSWORD_LENGTH, PasswordValidity};
use formkit_forms::strength::{StrengthError, StrengthScorer, ZxcvbnScorer};
use once_cell::unsync::OnceCell;
use std::fmt;

pub const PASSWORD_PLACEHOLDER: &str = "Enter your Password";

/// Masked or plain text display of the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
	#[default]
	Hidden,
	Visible,
}

/// Requirements popover state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Popover {
	#[default]
	Closed,
	Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordInputEvent {
	TogglePressed,
	Focus,
	PointerDownInside,
	EscapeKey,
	PointerDownOutside,
	FocusOutside,
	Blur,
	/// Open-state change requested by the popover primitive itself
	OpenChange(bool),
}

/// What the caller must do with the originating DOM event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
	pub prevent_default: bool,
	pub stop_propagation: bool,
}

impl EventOutcome {
	fn suppressed() -> Self {
		Self {
			prevent_default: true,
			stop_propagation: true,
		}
	}
}

type ScorerFactory = Box<dyn Fn() -> Box<dyn StrengthScorer>>;

/// Password input bound to a form value
pub struct PasswordInput {
	value: Signal<FormValue>,
	label: Option<String>,
	show_validation_rules: bool,
	show_strength: bool,
	min_length: usize,
	visibility: Visibility,
	popover: Popover,
	scorer_factory: ScorerFactory,
	scorer: OnceCell<Box<dyn StrengthScorer>>,
}

impl PasswordInput {
	/// Plain password input: no requirements popover, no strength meter
	pub fn new(value: Signal<FormValue>) -> Self {
		Self {
			value,
			label: None,
			show_validation_rules: false,
			show_strength: false,
			min_length: MIN_PASSWORD_LENGTH,
			visibility: Visibility::Hidden,
			popover: Popover::Closed,
			scorer_factory: Box::new(|| -> Box<dyn StrengthScorer> { Box::new(ZxcvbnScorer) }),
			scorer: OnceCell::new(),
		}
	}

	/// Flags and length threshold taken from `settings`
	pub fn from_settings(value: Signal<FormValue>, settings: &PasswordSettings) -> Self {
		Self::new(value)
			.with_validation_rules(settings.show_validation_rules)
			.with_strength(settings.show_strength)
			.with_min_length(settings.min_length)
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_validation_rules(mut self, enabled: bool) -> Self {
		self.show_validation_rules = enabled;
		self
	}

	pub fn with_strength(mut self, enabled: bool) -> Self {
		self.show_strength = enabled;
		self
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self
	}

	/// Replace how the scorer is built. It is built at most once, on the
	/// first strength evaluation of a non-empty password.
	pub fn with_scorer_factory<F>(mut self, factory: F) -> Self
	where
		F: Fn() -> Box<dyn StrengthScorer> + 'static,
	{
		self.set_scorer_factory(factory);
		self
	}

	/// Same as [`with_scorer_factory`](Self::with_scorer_factory) on a mounted input;
	/// drops any scorer already built.
	pub fn set_scorer_factory<F>(&mut self, factory: F)
	where
		F: Fn() -> Box<dyn StrengthScorer> + 'static,
	{
		self.scorer_factory = Box::new(factory);
		self.scorer = OnceCell::new();
	}

	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	pub fn placeholder(&self) -> &'static str {
		PASSWORD_PLACEHOLDER
	}

	pub fn visibility(&self) -> Visibility {
		self.visibility
	}

	pub fn popover(&self) -> Popover {
		self.popover
	}

	pub fn shows_validation_rules(&self) -> bool {
		self.show_validation_rules
	}

	pub fn shows_strength(&self) -> bool {
		self.show_strength
	}

	/// `type` attribute of the underlying input
	pub fn input_type(&self) -> &'static str {
		match self.visibility {
			Visibility::Hidden => "password",
			Visibility::Visible => "text",
		}
	}

	/// Accessible label of the toggle button
	pub fn toggle_label(&self) -> &'static str {
		"toggle show password"
	}

	pub fn password(&self) -> String {
		self.value.with(|v| v.as_text().to_string())
	}

	pub fn set_password(&self, password: impl Into<String>) {
		self.value.set(FormValue::Text(password.into()));
	}

	/// Apply `event` to the widget state.
	///
	/// # Examples
	///
	/// ```
	/// use formkit_pages::form::FormValue;
	/// use formkit_pages::reactive::Signal;
	/// use formkit_pages::widgets::{PasswordInput, PasswordInputEvent, Popover};
	///
	/// let mut input = PasswordInput::new(Signal::new(FormValue::text("")))
	///     .with_validation_rules(true);
	///
	/// let outcome = input.handle(PasswordInputEvent::TogglePressed);
	/// assert!(outcome.prevent_default && outcome.stop_propagation);
	/// assert_eq!(input.input_type(), "text");
	///
	/// input.handle(PasswordInputEvent::Focus);
	/// input.handle(PasswordInputEvent::Blur);
	/// assert_eq!(input.popover(), Popover::Open);
	/// ```
	pub fn handle(&mut self, event: PasswordInputEvent) -> EventOutcome {
		match event {
			PasswordInputEvent::TogglePressed => {
				self.visibility = match self.visibility {
					Visibility::Hidden => Visibility::Visible,
					Visibility::Visible => Visibility::Hidden,
				};
				return EventOutcome::suppressed();
			}
			PasswordInputEvent::Focus | PasswordInputEvent::PointerDownInside => {
				if self.show_validation_rules {
					self.set_popover(Popover::Open, event);
				}
			}
			PasswordInputEvent::EscapeKey
			| PasswordInputEvent::PointerDownOutside
			| PasswordInputEvent::FocusOutside => {
				self.set_popover(Popover::Closed, event);
			}
			PasswordInputEvent::Blur | PasswordInputEvent::OpenChange(_) => {}
		}
		EventOutcome::default()
	}

	fn set_popover(&mut self, next: Popover, event: PasswordInputEvent) {
		if self.popover != next {
			tracing::debug!(from = ?self.popover, to = ?next, ?event, "password popover transition");
			self.popover = next;
		}
	}

	/// Requirement checklist, while the popover is shown
	pub fn rules(&self) -> Option<PasswordValidity> {
		if !self.show_validation_rules || self.popover == Popover::Closed {
			return None;
		}
		Some(self.value.with(|v| {
			PasswordValidity::evaluate_with_min_length(Some(v.as_text()), self.min_length)
		}))
	}

	/// Strength meter for the current password.
	///
	/// `None` when strength display is off or the password is empty; the
	/// scorer is not built in either case.
	pub fn strength(&self) -> Result<Option<StrengthMeterView>, StrengthError> {
		if !self.show_strength {
			return Ok(None);
		}
		let password = self.password();
		if password.is_empty() {
			return Ok(None);
		}
		let scorer = self.scorer.get_or_init(|| {
			tracing::debug!("building password strength scorer");
			(self.scorer_factory)()
		});
		StrengthMeterView::for_password(scorer.as_ref(), &password)
	}

	pub fn scorer_loaded(&self) -> bool {
		self.scorer.get().is_some()
	}
}

impl fmt::Debug for PasswordInput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PasswordInput")
			.field("label", &self.label)
			.field("show_validation_rules", &self.show_validation_rules)
			.field("show_strength", &self.show_strength)
			.field("visibility", &self.visibility)
			.field("popover", &self.popover)
			.field("scorer_loaded", &self.scorer_loaded())
			.finish()
	}
}
