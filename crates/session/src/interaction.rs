use noteform_keymap::KeyChord;

/// Source of a user interaction routed to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionKind {
	/// The form was submitted; by default the host would navigate.
	Submit,
	/// A button or link was clicked; by default the host would follow it.
	Click,
	/// A global shortcut was pressed.
	Shortcut(KeyChord),
	/// Called from code, with no host default behavior.
	Programmatic,
}

/// A user interaction together with its cancellable default action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
	kind: InteractionKind,
	data_mode: Option<String>,
	default_prevented: bool,
}

impl Interaction {
	pub fn new(kind: InteractionKind) -> Self {
		Self {
			kind,
			data_mode: None,
			default_prevented: false,
		}
	}

	pub fn submit() -> Self {
		Self::new(InteractionKind::Submit)
	}

	pub fn click() -> Self {
		Self::new(InteractionKind::Click)
	}

	pub fn shortcut(chord: KeyChord) -> Self {
		Self::new(InteractionKind::Shortcut(chord))
	}

	pub fn programmatic() -> Self {
		Self::new(InteractionKind::Programmatic)
	}

	/// Attaches the `data-mode` attribute of the clicked element.
	pub fn with_data_mode(mut self, mode: impl Into<String>) -> Self {
		self.data_mode = Some(mode.into());
		self
	}

	pub fn kind(&self) -> &InteractionKind {
		&self.kind
	}

	/// The `data-mode` attribute of the element, if it had one.
	pub fn data_mode(&self) -> Option<&str> {
		self.data_mode.as_deref()
	}

	/// Returns true if the host would run a default action for this interaction.
	pub fn has_default_action(&self) -> bool {
		matches!(self.kind, InteractionKind::Submit | InteractionKind::Click)
	}

	/// Suppresses the default action, if there is one.
	pub fn prevent_default(&mut self) {
		if self.has_default_action() {
			self.default_prevented = true;
		}
	}

	pub fn is_default_prevented(&self) -> bool {
		self.default_prevented
	}
}
