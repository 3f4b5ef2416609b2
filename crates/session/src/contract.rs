//! Names used on the shared bus and the shortcuts a session binds.

use noteform_keymap::{KeyChord, NamedKey};

/// Channel every note form session registers on.
pub const CHANNEL: &str = "notesForm";

/// Emitted once after the first render, before the title is focused.
pub const VIEW_READY: &str = "view:ready";
/// Emitted at teardown while the session's contracts are still registered.
pub const VIEW_DESTROY: &str = "view:destroy";
/// Emitted with the new [`crate::EditMode`] after every mode transition.
pub const SET_MODE: &str = "set:mode";

/// Reply returning the session's note model.
pub const MODEL: &str = "model";
/// Command showing a [`crate::RegionView`] in the editor region.
pub const SHOW_EDITOR: &str = "show:editor";
/// Broadcast asking the active session to save without closing.
pub const SAVE_AUTO: &str = "save:auto";

/// Application configuration channel.
pub const CONFIGS_CHANNEL: &str = "configs";
/// Reply on [`CONFIGS_CHANNEL`] returning the configuration as a `toml::Table`.
pub const CONFIGS_OBJECT: &str = "get:object";

/// Shortcuts bound to save: `ctrl+s` and `command+s`.
pub fn save_chords() -> Vec<KeyChord> {
	vec![KeyChord::ctrl('s'), KeyChord::command('s')]
}

/// Shortcuts bound to cancel: `esc`.
pub fn cancel_chords() -> Vec<KeyChord> {
	vec![KeyChord::from(NamedKey::Esc)]
}
