/// Outcome of routing a user interaction to a handler.
///
/// `Handled` means the handler consumed the interaction and its default
/// browser/host action must not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Dispatch {
	/// The interaction was consumed and its default action suppressed.
	Handled,
	/// The interaction was not for this handler; default behavior applies.
	Ignored,
}

impl Dispatch {
	/// Returns true if the interaction was consumed.
	pub fn is_handled(self) -> bool {
		self == Self::Handled
	}
}
