//! Key modifier types (Ctrl, Alt, Shift, Command).

/// Key modifiers held while a shortcut is pressed.
///
/// `meta` is the platform command key (`command` on macOS, the super key elsewhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt (Option) is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
	/// Whether Command (Meta) is held.
	pub meta: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
		meta: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self {
		ctrl: true,
		..Self::NONE
	};

	/// Only Alt pressed.
	pub const ALT: Self = Self {
		alt: true,
		..Self::NONE
	};

	/// Only Shift pressed.
	pub const SHIFT: Self = Self {
		shift: true,
		..Self::NONE
	};

	/// Only Command pressed.
	pub const META: Self = Self {
		meta: true,
		..Self::NONE
	};

	/// Returns a copy with Ctrl added.
	pub fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	/// Returns a copy with Alt added.
	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns a copy with Command added.
	pub fn meta(self) -> Self {
		Self { meta: true, ..self }
	}

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift && !self.meta
	}
}

impl std::fmt::Display for Modifiers {
	/// Writes the modifiers in chord order, each followed by `+`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.ctrl {
			f.write_str("ctrl+")?;
		}
		if self.alt {
			f.write_str("alt+")?;
		}
		if self.shift {
			f.write_str("shift+")?;
		}
		if self.meta {
			f.write_str("command+")?;
		}
		Ok(())
	}
}
