use std::sync::Arc;

use noteform_primitives::Dispatch;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::chord::KeyChord;

/// Callback invoked when a bound chord is pressed.
///
/// The handler's allocation is its identity: unbinding only removes a chord
/// that still points at the same handler.
pub type ShortcutHandler = Arc<dyn Fn(&KeyChord) -> Dispatch + Send + Sync>;

/// Returns true if `a` and `b` are the same registered handler.
fn same_handler(a: &ShortcutHandler, b: &ShortcutHandler) -> bool {
	std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Host capability for registering shortcuts that fire regardless of input focus.
///
/// Binding a chord that is already bound replaces its handler. Unbinding
/// leaves a chord alone unless it is still bound to the given handler, so an
/// owner that was replaced cannot remove its successor's binding. Both
/// operations are safe to repeat.
pub trait GlobalShortcuts: Send + Sync {
	/// Binds every chord in `chords` to `handler`.
	fn bind_global(&self, chords: &[KeyChord], handler: ShortcutHandler);

	/// Removes the bindings of `chords` that still point at `handler`.
	fn unbind(&self, chords: &[KeyChord], handler: &ShortcutHandler);
}

/// In-memory shortcut table.
///
/// Hosts forward raw key presses to [`Keymap::press`]; handlers run without the
/// table lock held, so a handler may bind or unbind shortcuts itself.
#[derive(Default)]
pub struct Keymap {
	bindings: Mutex<FxHashMap<KeyChord, ShortcutHandler>>,
}

impl Keymap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Dispatches a key press to the handler bound to `chord`, if any.
	pub fn press(&self, chord: &KeyChord) -> Dispatch {
		let handler = self.bindings.lock().get(chord).cloned();
		match handler {
			Some(handler) => {
				tracing::trace!(%chord, "keymap.dispatch");
				handler(chord)
			}
			None => Dispatch::Ignored,
		}
	}

	pub fn is_bound(&self, chord: &KeyChord) -> bool {
		self.bindings.lock().contains_key(chord)
	}

	/// Returns the number of bound chords.
	pub fn len(&self) -> usize {
		self.bindings.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.lock().is_empty()
	}

	/// Drops every binding, as when the host rebuilds its key handling.
	pub fn clear(&self) {
		let removed = std::mem::take(&mut *self.bindings.lock());
		tracing::debug!(count = removed.len(), "keymap.clear");
	}
}

impl GlobalShortcuts for Keymap {
	fn bind_global(&self, chords: &[KeyChord], handler: ShortcutHandler) {
		let mut bindings = self.bindings.lock();
		for chord in chords {
			bindings.insert(*chord, handler.clone());
		}
		tracing::debug!(count = chords.len(), "keymap.bind");
	}

	fn unbind(&self, chords: &[KeyChord], handler: &ShortcutHandler) {
		let mut removed = Vec::new();
		let mut bindings = self.bindings.lock();
		for chord in chords {
			if bindings.get(chord).is_some_and(|bound| same_handler(bound, handler)) {
				removed.extend(bindings.remove(chord));
			}
		}
		drop(bindings);
		tracing::debug!(requested = chords.len(), removed = removed.len(), "keymap.unbind");
	}
}
