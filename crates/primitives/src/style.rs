bitflags::bitflags! {
	/// Mode styling applied to the form surface.
	///
	/// Fullscreen and preview share [`StyleFlags::FULLSCREEN`]; preview adds
	/// [`StyleFlags::PREVIEW`] on top of it.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct StyleFlags: u8 {
		/// The editor fills the viewport.
		const FULLSCREEN = 1 << 0;
		/// The rendered preview pane is shown next to the editor.
		const PREVIEW = 1 << 1;
	}
}

impl StyleFlags {
	/// Returns the stylesheet class toggled by a single flag.
	///
	/// Returns `None` for empty or composite sets.
	pub fn class_name(self) -> Option<&'static str> {
		if self == Self::FULLSCREEN {
			Some("editor--fullscreen")
		} else if self == Self::PREVIEW {
			Some("-preview")
		} else {
			None
		}
	}

	/// Returns the class names of every flag in the set.
	pub fn class_names(self) -> impl Iterator<Item = &'static str> {
		self.iter().filter_map(Self::class_name)
	}
}
