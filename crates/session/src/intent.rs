use noteform_primitives::FocusTarget;
use serde::Serialize;

/// Close/redirect/focus flags carried from a user action to its outcome.
///
/// # Invariants
///
/// - `is_closed` only ever goes from false to true.
/// - `redirect` describes the most recent outcome only: true for an explicit
///   save or cancel, false for an auto-save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
	/// The session has been told to close.
	pub is_closed: bool,
	/// The container should navigate away after handling the outcome.
	pub redirect: bool,
	/// Element that held focus when the session was cancelled.
	pub focus: Option<FocusTarget>,
}

impl Intent {
	/// Marks the session closed with a navigating outcome.
	pub(crate) fn close(&mut self) {
		self.is_closed = true;
		self.redirect = true;
	}

	/// Records a save that must not navigate.
	///
	/// Returns false, leaving the intent untouched, once the session is closed.
	pub(crate) fn auto_save(&mut self) -> bool {
		if self.is_closed {
			return false;
		}
		self.redirect = false;
		true
	}
}
