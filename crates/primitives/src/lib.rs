//! Core types shared by the note form crates: display modes, style flags, focus targets and keys.

/// Interaction routing outcomes.
pub mod dispatch;
/// Which form field holds input focus.
pub mod focus;
/// Key modifier types.
pub mod key;
/// Display mode definitions.
pub mod mode;
/// Visual style flags applied to the form surface.
pub mod style;

pub use dispatch::Dispatch;
pub use focus::FocusTarget;
pub use key::Modifiers;
pub use mode::EditMode;
pub use style::StyleFlags;
