use std::sync::{Arc, Weak};

use noteform_bus::{Bus, Channel, Subscription};
use noteform_keymap::{Binding, GlobalShortcuts, KeyChord, ShortcutGuard, ShortcutHandler};
use noteform_primitives::{Dispatch, EditMode, FocusTarget, StyleFlags};
use parking_lot::Mutex;

use crate::contract::{
	CHANNEL, MODEL, SAVE_AUTO, SET_MODE, SHOW_EDITOR, VIEW_DESTROY, VIEW_READY, cancel_chords,
	save_chords,
};
use crate::intent::Intent;
use crate::interaction::Interaction;
use crate::options::SessionOptions;
use crate::outcome::{LocalSignal, OutcomeSender, SessionEvent};
use crate::surface::{RegionView, ViewSurface};


/// Capabilities the owning container lends to a session.
pub struct SessionHost {
	/// The rendered form.
	pub surface: Box<dyn ViewSurface>,
	/// Global shortcut registry.
	pub shortcuts: Arc<dyn GlobalShortcuts>,
	/// Where save and cancel outcomes are delivered.
	pub outcomes: OutcomeSender,
}

/// Lifecycle stage of a [`FormSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Lifecycle {
	/// Contracts registered, waiting for the first render.
	Building,
	/// Rendered and interactive.
	Ready,
	/// Torn down; every operation is ignored.
	Destroyed,
}

struct Core {
	mode: EditMode,
	style: StyleFlags,
	intent: Intent,
	lifecycle: Lifecycle,
}

impl Core {
	/// Makes `mode` current and returns the style it implies.
	fn set_mode(&mut self, mode: EditMode) -> StyleFlags {
		self.mode = mode;
		self.style = mode.style();
		self.style
	}
}

/// Shows exactly `target` on the surface, clearing every other flag in one call.
fn mirror_style(surface: &dyn ViewSurface, target: StyleFlags) {
	let stale = StyleFlags::all().difference(target);
	if !stale.is_empty() {
		surface.clear_style(stale);
	}
	if !target.is_empty() {
		surface.apply_style(target);
	}
}

/// State reachable from bus and shortcut handlers.
///
/// Handlers hold a [`Weak`] reference so a registration never keeps the
/// session alive. The core lock is never held while the surface runs, the
/// channel dispatches or an outcome is sent, so each of them may re-enter
/// the session.
struct Shared {
	core: Mutex<Core>,
	surface: Box<dyn ViewSurface>,
	channel: Arc<Channel>,
	outcomes: OutcomeSender,
}

impl Shared {
	fn is_destroyed(&self) -> bool {
		self.core.lock().lifecycle == Lifecycle::Destroyed
	}

	fn switch_to(&self, mode: EditMode) -> Dispatch {
		let style = {
			let mut core = self.core.lock();
			if core.lifecycle == Lifecycle::Destroyed {
				return Dispatch::Ignored;
			}
			core.set_mode(mode)
		};
		self.surface.dismiss_popups();
		mirror_style(&*self.surface, style);

		tracing::debug!(%mode, "session.mode");
		self.channel.trigger(SET_MODE, &mode);
		Dispatch::Handled
	}

	fn save(&self, interaction: &mut Interaction) -> Dispatch {
		let intent = {
			let mut core = self.core.lock();
			if core.lifecycle == Lifecycle::Destroyed {
				return Dispatch::Ignored;
			}
			core.intent.close();
			core.intent
		};
		interaction.prevent_default();
		tracing::debug!(kind = ?interaction.kind(), "session.save");
		self.emit(SessionEvent::Save(intent));
		Dispatch::Handled
	}

	fn cancel(&self) -> Dispatch {
		if self.is_destroyed() {
			return Dispatch::Ignored;
		}
		let focus = if self.surface.title_focused() {
			FocusTarget::Title
		} else {
			FocusTarget::Editor
		};
		let intent = {
			let mut core = self.core.lock();
			if core.lifecycle == Lifecycle::Destroyed {
				return Dispatch::Ignored;
			}
			core.intent.focus = Some(focus);
			core.intent.close();
			core.intent
		};
		tracing::debug!(%focus, "session.cancel");
		self.emit(SessionEvent::Cancel(intent));
		Dispatch::Handled
	}

	fn auto_save(&self) {
		let intent = {
			let mut core = self.core.lock();
			if core.lifecycle == Lifecycle::Destroyed || !core.intent.auto_save() {
				tracing::debug!("session.autosave.ignored");
				return;
			}
			core.intent
		};
		tracing::debug!("session.autosave");
		self.emit(SessionEvent::Save(intent));
	}

	fn show_editor(&self, view: Box<dyn RegionView>) {
		if self.is_destroyed() {
			tracing::debug!(view = view.name(), "session.show_editor.ignored");
			return;
		}
		tracing::debug!(view = view.name(), "session.show_editor");
		self.surface.show_editor(view);
	}

	fn emit(&self, event: SessionEvent) {
		if self.outcomes.send(event).is_err() {
			tracing::trace!(?event, "session.outcome.dropped");
		}
	}
}

/// Editing session for one note.
///
/// Construction registers the `model` reply, the `show:editor` command and
/// the `save:auto` listener on the `notesForm` channel and binds the save and
/// cancel shortcuts. [`FormSession::destroy`] releases all of them; dropping
/// a session that was never destroyed does the same.
pub struct FormSession<M> {
	shared: Arc<Shared>,
	model: Arc<M>,
	options: SessionOptions,
	subscriptions: Vec<Subscription>,
	shortcuts: Option<ShortcutGuard>,
}

impl<M: Send + Sync + 'static> FormSession<M> {
	/// Creates a session for `model` and registers its contracts on `bus`.
	pub fn new(bus: &Bus, host: SessionHost, model: Arc<M>, options: SessionOptions) -> Self {
		let channel = bus.channel(CHANNEL);
		let shared = Arc::new(Shared {
			core: Mutex::new(Core {
				mode: EditMode::Normal,
				style: StyleFlags::empty(),
				intent: Intent::default(),
				lifecycle: Lifecycle::Building,
			}),
			surface: host.surface,
			channel: channel.clone(),
			outcomes: host.outcomes,
		});

		let served = model.clone();
		let subscriptions = vec![
			channel.reply(MODEL, move || served.clone()),
			channel.comply(SHOW_EDITOR, {
				let weak = Arc::downgrade(&shared);
				move |view: Box<dyn RegionView>| {
					if let Some(shared) = weak.upgrade() {
						shared.show_editor(view);
					}
				}
			}),
			channel.on(SAVE_AUTO, {
				let weak = Arc::downgrade(&shared);
				move |_| {
					if let Some(shared) = weak.upgrade() {
						shared.auto_save();
					}
				}
			}),
		];

		let shortcuts = ShortcutGuard::bind(
			host.shortcuts,
			vec![
				Binding::new(save_chords(), shortcut(&shared, |shared, chord| {
					shared.save(&mut Interaction::shortcut(*chord))
				})),
				Binding::new(cancel_chords(), shortcut(&shared, |shared, _| shared.cancel())),
			],
		);

		tracing::debug!(edit_mode = %options.edit_mode, "session.created");
		Self {
			shared,
			model,
			options,
			subscriptions,
			shortcuts: Some(shortcuts),
		}
	}
}

fn shortcut(
	shared: &Arc<Shared>,
	action: fn(&Shared, &KeyChord) -> Dispatch,
) -> ShortcutHandler {
	let weak: Weak<Shared> = Arc::downgrade(shared);
	Arc::new(move |chord| match weak.upgrade() {
		Some(shared) => action(&shared, chord),
		None => Dispatch::Ignored,
	})
}

impl<M> FormSession<M> {
	/// Routes a local lifecycle signal from the container.
	pub fn handle(&self, signal: LocalSignal) {
		match signal {
			LocalSignal::Rendered => self.on_rendered(),
			LocalSignal::BindKeys => self.bind_keys(),
		}
	}

	/// Marks the session ready after its first render.
	///
	/// Emits `view:ready`, focuses the title and then enters the configured
	/// initial mode. Later calls are ignored.
	pub fn on_rendered(&self) {
		{
			let mut core = self.shared.core.lock();
			if core.lifecycle != Lifecycle::Building {
				tracing::debug!(lifecycle = %core.lifecycle, "session.rendered.ignored");
				return;
			}
			core.lifecycle = Lifecycle::Ready;
		}

		self.shared.channel.trigger(VIEW_READY, &());
		self.shared.surface.focus_title();

		let initial = self.options.edit_mode;
		if initial != EditMode::Normal && !self.shared.switch_to(initial).is_handled() {
			tracing::debug!(mode = %initial, "session.initial_mode.ignored");
		}
	}

	/// Registers the save and cancel shortcuts again.
	pub fn bind_keys(&self) {
		if let Some(guard) = &self.shortcuts {
			guard.rebind();
		}
	}

	/// Switches to the mode called `name`.
	///
	/// Empty or unknown names are ignored.
	pub fn switch_mode(&self, name: &str) -> Dispatch {
		match EditMode::parse(name) {
			Some(mode) => self.shared.switch_to(mode),
			None => {
				tracing::debug!(name, "session.mode.unknown");
				Dispatch::Ignored
			}
		}
	}

	/// Switches to `mode`, emitting `set:mode` even if it is already current.
	pub fn switch_to(&self, mode: EditMode) -> Dispatch {
		self.shared.switch_to(mode)
	}

	/// Handles a click on a mode link carrying a `data-mode` attribute.
	///
	/// The link's own navigation is suppressed only when the click switches
	/// modes.
	pub fn on_mode_click(&self, interaction: &mut Interaction) -> Dispatch {
		let Some(mode) = interaction.data_mode().and_then(EditMode::parse) else {
			tracing::debug!(data_mode = ?interaction.data_mode(), "session.mode.unknown");
			return Dispatch::Ignored;
		};
		let dispatch = self.shared.switch_to(mode);
		if dispatch.is_handled() {
			interaction.prevent_default();
		}
		dispatch
	}

	/// Closes the session with a save outcome.
	///
	/// Suppresses `interaction`'s default action and reports
	/// [`SessionEvent::Save`] with `is_closed` and `redirect` set.
	pub fn save(&self, interaction: &mut Interaction) -> Dispatch {
		self.shared.save(interaction)
	}

	/// Closes the session with a cancel outcome, remembering which field had focus.
	pub fn cancel(&self) -> Dispatch {
		self.shared.cancel()
	}

	/// Saves without closing, unless the session is already closed.
	///
	/// Normally reached through a `save:auto` broadcast.
	pub fn auto_save(&self) {
		self.shared.auto_save();
	}

	/// Shows `view` in the editor region.
	pub fn show_editor(&self, view: Box<dyn RegionView>) {
		self.shared.show_editor(view);
	}

	/// Current display mode.
	pub fn mode(&self) -> EditMode {
		self.shared.core.lock().mode
	}

	/// Style flags implied by the current mode.
	pub fn style(&self) -> StyleFlags {
		self.shared.core.lock().style
	}

	/// Snapshot of the close/redirect/focus flags.
	pub fn intent(&self) -> Intent {
		self.shared.core.lock().intent
	}

	/// Current lifecycle stage.
	pub fn lifecycle(&self) -> Lifecycle {
		self.shared.core.lock().lifecycle
	}

	/// Returns true once rendered and until torn down.
	pub fn is_ready(&self) -> bool {
		self.lifecycle() == Lifecycle::Ready
	}

	/// Returns true after teardown.
	pub fn is_destroyed(&self) -> bool {
		self.shared.is_destroyed()
	}

	/// The note model served through the `model` reply.
	pub fn model(&self) -> &Arc<M> {
		&self.model
	}

	/// Options the session was created with.
	pub fn options(&self) -> SessionOptions {
		self.options
	}

	/// Tears the session down.
	///
	/// In order: forces normal mode without a `set:mode` broadcast, emits
	/// `view:destroy`, revokes every channel contract, unbinds the shortcuts
	/// and marks the session destroyed. Calling it again does nothing.
	pub fn destroy(&mut self) {
		if self.is_destroyed() {
			tracing::debug!("session.destroy.repeated");
			return;
		}
		self.teardown();
	}

	fn teardown(&mut self) {
		let style = self.shared.core.lock().set_mode(EditMode::Normal);
		mirror_style(&*self.shared.surface, style);

		self.shared.channel.trigger(VIEW_DESTROY, &());

		for subscription in self.subscriptions.drain(..) {
			subscription.revoke();
		}
		if let Some(guard) = self.shortcuts.take() {
			guard.release();
		}

		self.shared.core.lock().lifecycle = Lifecycle::Destroyed;
		tracing::debug!("session.destroyed");
	}
}

impl<M> Drop for FormSession<M> {
	fn drop(&mut self) {
		if !self.is_destroyed() {
			tracing::warn!("session.dropped_without_destroy");
			self.teardown();
		}
	}
}
