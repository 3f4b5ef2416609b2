//! Global keyboard shortcuts for note forms.
//!
//! Provides:
//! - [`KeyChord`]: single keys (`esc`) and combinations (`ctrl+s`, `command+s`)
//! - [`GlobalShortcuts`], the host capability for binding chords system-wide
//! - [`Keymap`], an in-memory [`GlobalShortcuts`] that dispatches key presses
//! - [`ShortcutGuard`], which keeps bindings alive and unbinds them exactly once

pub use chord::{Key, KeyChord, NamedKey};
pub use guard::{Binding, ShortcutGuard};
pub use shortcuts::{GlobalShortcuts, Keymap, ShortcutHandler};

mod chord;
mod guard;
mod shortcuts;
