use thiserror::Error;

/// Kind of contract registered on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum HandlerKind {
	Reply,
	Command,
	Event,
}

/// Errors reported to callers of [`crate::Channel`] requests and commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
	/// Nothing is registered under the requested name.
	#[error("no {kind} handler for '{name}' on channel '{channel}'")]
	NoHandler {
		channel: String,
		name: String,
		kind: HandlerKind,
	},

	/// A handler exists but the payload or reply has a different type.
	#[error("{kind} '{name}' on channel '{channel}' expected {expected}")]
	PayloadType {
		channel: String,
		name: String,
		kind: HandlerKind,
		/// Type name the handler or caller expected.
		expected: &'static str,
	},
}

/// Result type for bus operations.
pub type Result<T> = std::result::Result<T, BusError>;
