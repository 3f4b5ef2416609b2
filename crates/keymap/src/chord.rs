use std::fmt;

use noteform_primitives::Modifiers;

/// Non-character keys that can be bound.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum NamedKey {
	#[strum(to_string = "esc")]
	Esc,
	Enter,
	Tab,
	Space,
	Backspace,
	#[strum(to_string = "del")]
	Del,
	Insert,
	Home,
	End,
	PageUp,
	PageDown,
	Up,
	Down,
	Left,
	Right,
}

/// The non-modifier part of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	/// A printable ASCII character, stored lowercase.
	Char(char),
	/// A named key such as `esc`.
	Named(NamedKey),
	/// A function key, `f1` to `f19`.
	F(u8),
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Char(ch) => write!(f, "{ch}"),
			Self::Named(named) => write!(f, "{named}"),
			Self::F(n) => write!(f, "f{n}"),
		}
	}
}

/// A key plus the modifiers held with it, e.g. `ctrl+s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
	pub modifiers: Modifiers,
	pub key: Key,
}

impl KeyChord {
	pub fn new(modifiers: Modifiers, key: Key) -> Self {
		let key = match key {
			Key::Char(ch) => Key::Char(ch.to_ascii_lowercase()),
			other => other,
		};
		Self { modifiers, key }
	}

	/// A chord with no modifiers.
	pub fn plain(key: Key) -> Self {
		Self::new(Modifiers::NONE, key)
	}

	/// `ctrl+<ch>`.
	pub fn ctrl(ch: char) -> Self {
		Self::new(Modifiers::CTRL, Key::Char(ch))
	}

	/// `command+<ch>`.
	pub fn command(ch: char) -> Self {
		Self::new(Modifiers::META, Key::Char(ch))
	}
}

impl From<NamedKey> for KeyChord {
	fn from(key: NamedKey) -> Self {
		Self::plain(Key::Named(key))
	}
}

impl fmt::Display for KeyChord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.modifiers, self.key)
	}
}
