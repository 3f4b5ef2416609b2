use serde::{Deserialize, Serialize};

use crate::style::StyleFlags;

/// Display mode of a note form.
///
/// Exactly one mode is active at a time. Each mode maps to the complete set
/// of [`StyleFlags`] it implies, so applying a mode also undoes whatever the
/// previous mode had set.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Default,
	Serialize,
	Deserialize,
	strum_macros::Display,
	strum_macros::EnumString,
	strum_macros::IntoStaticStr,
	strum_macros::VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EditMode {
	/// Regular layout with no mode styling.
	#[default]
	Normal,
	/// Editor fills the viewport.
	Fullscreen,
	/// Fullscreen with the rendered preview pane.
	Preview,
}

impl EditMode {
	/// Parses a mode name, returning `None` for empty or unknown names.
	///
	/// Names are matched exactly: `normal`, `fullscreen`, `preview`.
	pub fn parse(name: &str) -> Option<Self> {
		name.parse().ok()
	}

	/// Returns the canonical mode name.
	pub fn as_str(self) -> &'static str {
		self.into()
	}

	/// Returns the full style set this mode implies.
	pub const fn style(self) -> StyleFlags {
		match self {
			Self::Normal => StyleFlags::empty(),
			Self::Fullscreen => StyleFlags::FULLSCREEN,
			Self::Preview => StyleFlags::FULLSCREEN.union(StyleFlags::PREVIEW),
		}
	}
}
