use serde::{Deserialize, Serialize};

/// Form element that held input focus when the session was cancelled.
///
/// Containers read it back after a cancel to restore focus to the same place.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
	strum_macros::Display,
	strum_macros::EnumString,
	strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FocusTarget {
	/// The note title input.
	Title,
	/// The editor region (body text or whatever sub-view is shown there).
	Editor,
}
