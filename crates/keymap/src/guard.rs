use std::sync::Arc;

use crate::chord::KeyChord;
use crate::shortcuts::{GlobalShortcuts, ShortcutHandler};

/// A set of chords bound to one handler.
#[derive(Clone)]
pub struct Binding {
	pub chords: Vec<KeyChord>,
	pub handler: ShortcutHandler,
}

impl Binding {
	pub fn new(chords: impl Into<Vec<KeyChord>>, handler: ShortcutHandler) -> Self {
		Self {
			chords: chords.into(),
			handler,
		}
	}
}

/// Scoped ownership of a group of global shortcuts.
///
/// Creating the guard binds every [`Binding`]; releasing or dropping it unbinds
/// exactly those chords, once. A chord another owner has bound since is left
/// to that owner. [`ShortcutGuard::rebind`] re-registers the same
/// handlers and may be called any number of times while the guard is alive.
pub struct ShortcutGuard {
	shortcuts: Arc<dyn GlobalShortcuts>,
	bindings: Vec<Binding>,
	released: bool,
}

impl ShortcutGuard {
	/// Binds `bindings` on `shortcuts` and returns the guard owning them.
	pub fn bind(shortcuts: Arc<dyn GlobalShortcuts>, bindings: Vec<Binding>) -> Self {
		let guard = Self {
			shortcuts,
			bindings,
			released: false,
		};
		guard.rebind();
		guard
	}

	/// Registers every binding again.
	///
	/// Used after the host rebuilt its key handling and lost the registrations.
	pub fn rebind(&self) {
		for binding in &self.bindings {
			self.shortcuts
				.bind_global(&binding.chords, binding.handler.clone());
		}
	}

	/// Returns every chord owned by this guard.
	pub fn chords(&self) -> impl Iterator<Item = &KeyChord> {
		self.bindings.iter().flat_map(|b| b.chords.iter())
	}

	/// Unbinds all owned chords.
	pub fn release(mut self) {
		self.unbind_all();
	}

	fn unbind_all(&mut self) {
		if self.released {
			return;
		}
		self.released = true;
		for binding in &self.bindings {
			self.shortcuts.unbind(&binding.chords, &binding.handler);
		}
	}
}

impl Drop for ShortcutGuard {
	fn drop(&mut self) {
		self.unbind_all();
	}
}
