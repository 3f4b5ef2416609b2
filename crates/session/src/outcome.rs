use tokio::sync::mpsc;

use crate::intent::Intent;

/// Outcome reported to the container that owns a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
	/// Persist the note; navigate away if `redirect` is set.
	Save(Intent),
	/// Discard changes and close; restore focus from `intent.focus`.
	Cancel(Intent),
}

impl SessionEvent {
	pub fn intent(&self) -> Intent {
		match self {
			Self::Save(intent) | Self::Cancel(intent) => *intent,
		}
	}
}

/// Lifecycle signals the container sends to its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalSignal {
	/// The form surface finished rendering.
	Rendered,
	/// The host lost its shortcut registrations; bind them again.
	BindKeys,
}

/// Sending half held by the session.
pub type OutcomeSender = mpsc::UnboundedSender<SessionEvent>;

/// Receiving half drained by the container.
pub type OutcomeReceiver = mpsc::UnboundedReceiver<SessionEvent>;

/// Creates a new outcome channel pair.
pub fn outcome_channel() -> (OutcomeSender, OutcomeReceiver) {
	mpsc::unbounded_channel()
}
