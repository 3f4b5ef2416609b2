use noteform_keymap::{GlobalShortcuts, KeyChord, NamedKey};
use noteform_session::contract::{CHANNEL, SAVE_AUTO, SHOW_EDITOR};
use noteform_session::{
	Dispatch, EditMode, FocusTarget, Intent, Interaction, LocalSignal, RegionView, SessionEvent,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{Harness, NamedView};

const CLOSED: Intent = Intent {
	is_closed: true,
	redirect: true,
	focus: None,
};

#[test]
fn submit_saves_and_suppresses_navigation() {
	let mut h = Harness::rendered(EditMode::Normal);
	let mut submit = Interaction::submit();

	assert_eq!(h.session.save(&mut submit), Dispatch::Handled);
	assert!(submit.is_default_prevented());
	assert_eq!(h.session.intent(), CLOSED);
	assert_eq!(h.outcomes(), [SessionEvent::Save(CLOSED)]);
}

#[rstest]
#[case(KeyChord::ctrl('s'))]
#[case(KeyChord::command('s'))]
#[case(KeyChord::ctrl('S'))]
fn save_shortcut_saves(#[case] chord: KeyChord) {
	let mut h = Harness::rendered(EditMode::Normal);

	assert!(h.keymap.press(&chord).is_handled());
	assert_eq!(h.outcomes(), [SessionEvent::Save(CLOSED)]);
}

#[test]
fn cancel_shortcut_remembers_title_focus() {
	let mut h = Harness::rendered(EditMode::Normal);

	assert!(h.keymap.press(&KeyChord::from(NamedKey::Esc)).is_handled());
	let expected = Intent {
		focus: Some(FocusTarget::Title),
		..CLOSED
	};
	assert_eq!(h.session.intent(), expected);
	assert_eq!(h.outcomes(), [SessionEvent::Cancel(expected)]);
}

#[test]
fn cancel_elsewhere_reports_editor_focus() {
	let mut h = Harness::rendered(EditMode::Normal);
	h.observed.lock().title_focused = false;

	assert_eq!(h.session.cancel(), Dispatch::Handled);
	assert_eq!(h.session.intent().focus, Some(FocusTarget::Editor));
	assert!(matches!(h.outcomes()[..], [SessionEvent::Cancel(_)]));
}

#[test]
fn auto_save_keeps_session_open() {
	let mut h = Harness::rendered(EditMode::Normal);

	assert_eq!(h.bus.trigger(CHANNEL, SAVE_AUTO, &()), 1);
	let expected = Intent::default();
	assert_eq!(h.session.intent(), expected);
	assert_eq!(h.outcomes(), [SessionEvent::Save(expected)]);
}

#[test]
fn auto_save_after_cancel_is_ignored() {
	let mut h = Harness::rendered(EditMode::Normal);
	let _ = h.session.cancel();
	let closed = h.session.intent();
	h.outcomes();

	h.bus.trigger(CHANNEL, SAVE_AUTO, &());
	h.session.auto_save();
	assert_eq!(h.session.intent(), closed);
	assert!(h.outcomes().is_empty());
}

#[test]
fn redirect_follows_latest_outcome() {
	let mut h = Harness::rendered(EditMode::Normal);

	h.session.auto_save();
	assert!(!h.session.intent().redirect);

	let _ = h.session.save(&mut Interaction::click());
	assert!(h.session.intent().redirect);
	assert_eq!(
		h.outcomes(),
		[SessionEvent::Save(Intent::default()), SessionEvent::Save(CLOSED)]
	);
}

#[test]
fn programmatic_save_has_nothing_to_suppress() {
	let mut h = Harness::rendered(EditMode::Normal);
	let mut call = Interaction::programmatic();

	assert_eq!(h.session.save(&mut call), Dispatch::Handled);
	assert!(!call.is_default_prevented());
	assert_eq!(h.outcomes().len(), 1);
}

#[test]
fn bind_keys_restores_lost_shortcuts() {
	let mut h = Harness::rendered(EditMode::Normal);
	h.keymap.clear();
	assert_eq!(h.keymap.press(&KeyChord::ctrl('s')), Dispatch::Ignored);

	h.session.handle(LocalSignal::BindKeys);
	h.session.handle(LocalSignal::BindKeys);
	assert_eq!(h.keymap.len(), 3);
	assert!(h.keymap.press(&KeyChord::ctrl('s')).is_handled());
	assert_eq!(h.outcomes().len(), 1);
}

#[test]
fn foreign_handler_unbind_leaves_session_shortcuts() {
	let mut h = Harness::rendered(EditMode::Normal);
	let stranger: noteform_keymap::ShortcutHandler = std::sync::Arc::new(|_| Dispatch::Handled);

	h.keymap.unbind(&[KeyChord::ctrl('s'), KeyChord::from(NamedKey::Esc)], &stranger);
	assert_eq!(h.keymap.len(), 3);
	assert!(h.keymap.press(&KeyChord::ctrl('s')).is_handled());
	assert_eq!(h.outcomes().len(), 1);
}

#[test]
fn show_editor_command_replaces_region() {
	let h = Harness::rendered(EditMode::Normal);
	let channel = h.bus.channel(CHANNEL);

	channel
		.command(SHOW_EDITOR, Box::new(NamedView("codemirror")) as Box<dyn RegionView>)
		.unwrap();
	h.session.show_editor(Box::new(NamedView("markdown")));

	assert_eq!(h.observed.lock().editor.as_deref(), Some("markdown"));
	let log = h.take_log();
	assert_eq!(&log[2..], ["show codemirror", "show markdown"]);
}

#[test]
fn outcomes_after_receiver_dropped_are_discarded() {
	let mut h = Harness::rendered(EditMode::Normal);
	h.close_outcomes();

	assert_eq!(h.session.cancel(), Dispatch::Handled);
	assert!(h.session.intent().is_closed);
	assert!(h.outcomes().is_empty());
}
