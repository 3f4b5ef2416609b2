use noteform_primitives::StyleFlags;

/// A renderable sub-view shown inside the editor region.
pub trait RegionView: Send {
	/// Short identifier used in logs.
	fn name(&self) -> &str;
}

/// Host capability for the rendered form.
///
/// The session owns which [`StyleFlags`] are active; the surface only mirrors
/// them. Style calls are idempotent: applying a flag that is already applied,
/// or clearing one that is not, has no effect.
///
/// The session holds no lock while calling into the surface, so an
/// implementation may re-enter it, for example by broadcasting `save:auto`
/// from a freshly shown editor. Implementations keep their own interior state.
pub trait ViewSurface: Send + Sync {
	/// Closes dropdowns and other auxiliary UI, as a click on the form root would.
	fn dismiss_popups(&self);

	/// Turns on every flag in `style`.
	fn apply_style(&self, style: StyleFlags);

	/// Turns off every flag in `style`.
	fn clear_style(&self, style: StyleFlags);

	/// Moves input focus to the title field.
	fn focus_title(&self);

	/// Returns true if the title field holds input focus.
	fn title_focused(&self) -> bool;

	/// Shows `view` in the editor region, replacing the current one.
	fn show_editor(&self, view: Box<dyn RegionView>);
}
