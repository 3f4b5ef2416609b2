use std::sync::Arc;

use noteform_bus::Bus;
use noteform_keymap::KeyChord;
use noteform_session::contract::{
	CHANNEL, CONFIGS_CHANNEL, CONFIGS_OBJECT, MODEL, SAVE_AUTO, SHOW_EDITOR, VIEW_DESTROY,
};
use noteform_session::{
	Dispatch, EditMode, FormSession, Interaction, Lifecycle, SessionEvent, SessionHost,
	SessionOptions, outcome_channel,
};
use pretty_assertions::assert_eq;

use crate::common::{Harness, Note, RecordingSurface};

#[test]
fn destroy_notifies_while_contracts_are_live() {
	let mut h = Harness::rendered(EditMode::Preview);
	h.take_log();

	h.session.destroy();
	assert_eq!(
		h.take_log(),
		["clear editor--fullscreen -preview", "view:destroy model=Groceries"]
	);
	assert_eq!(h.session.mode(), EditMode::Normal);
	assert_eq!(h.session.lifecycle(), Lifecycle::Destroyed);
}

#[test]
fn destroy_revokes_every_contract() {
	let mut h = Harness::rendered(EditMode::Normal);
	let channel = h.bus.channel(CHANNEL);
	assert!(channel.has_reply(MODEL));
	assert!(channel.has_command(SHOW_EDITOR));
	assert_eq!(channel.listener_count(SAVE_AUTO), 1);
	assert_eq!(h.keymap.len(), 3);

	h.session.destroy();
	assert!(!channel.has_reply(MODEL));
	assert!(!channel.has_command(SHOW_EDITOR));
	assert_eq!(channel.listener_count(SAVE_AUTO), 0);
	assert!(h.keymap.is_empty());
	assert!(channel.request::<Arc<Note>>(MODEL).is_err());
}

#[test]
fn destroy_runs_once() {
	let mut h = Harness::rendered(EditMode::Fullscreen);
	h.session.destroy();
	h.take_log();
	let observed = h.observed.clone();

	h.session.destroy();
	drop(h.session);
	assert!(observed.lock().log.is_empty());
}

#[test]
fn drop_without_destroy_tears_down() {
	let h = Harness::rendered(EditMode::Normal);
	let channel = h.bus.channel(CHANNEL);
	let keymap = h.keymap.clone();
	let observed = h.observed.clone();

	drop(h.session);
	assert!(!channel.has_reply(MODEL));
	assert!(keymap.is_empty());
	let destroys = observed
		.lock()
		.log
		.iter()
		.filter(|line| line.starts_with(VIEW_DESTROY))
		.count();
	assert_eq!(destroys, 1);
}

#[test]
fn operations_after_destroy_are_ignored() {
	let mut h = Harness::rendered(EditMode::Normal);
	h.session.destroy();
	h.take_log();

	let mut submit = Interaction::submit();
	assert_eq!(h.session.save(&mut submit), Dispatch::Ignored);
	assert!(!submit.is_default_prevented());
	assert_eq!(h.session.cancel(), Dispatch::Ignored);
	assert_eq!(h.session.switch_mode("preview"), Dispatch::Ignored);
	h.session.auto_save();
	h.session.on_rendered();

	assert_eq!(h.bus.trigger(CHANNEL, SAVE_AUTO, &()), 0);
	assert_eq!(h.keymap.press(&KeyChord::ctrl('s')), Dispatch::Ignored);
	assert!(h.outcomes().is_empty());
	assert!(h.take_log().is_empty());
	assert_eq!(h.session.mode(), EditMode::Normal);
}

#[test]
fn destroy_before_render_skips_ready() {
	let mut h = Harness::new(EditMode::Fullscreen);
	h.session.destroy();
	assert_eq!(h.take_log(), ["clear editor--fullscreen -preview", "view:destroy model=Groceries"]);
	assert!(!h.session.is_ready());
}

#[test]
fn replaced_session_leaves_new_contracts_in_place() {
	let mut old = Harness::rendered(EditMode::Normal);
	let (outcomes, mut rx) = outcome_channel();
	let new = FormSession::new(
		&old.bus,
		SessionHost {
			surface: Box::new(RecordingSurface::new(old.observed.clone())),
			shortcuts: old.keymap.clone(),
			outcomes,
		},
		Arc::new(Note {
			title: "Reading list".into(),
		}),
		SessionOptions::default(),
	);
	let channel = old.bus.channel(CHANNEL);
	assert_eq!(channel.listener_count(SAVE_AUTO), 2);

	old.session.destroy();
	assert_eq!(channel.request::<Arc<Note>>(MODEL).unwrap().title, "Reading list");
	assert!(channel.has_command(SHOW_EDITOR));
	assert_eq!(channel.listener_count(SAVE_AUTO), 1);
	assert_eq!(new.lifecycle(), Lifecycle::Building);

	assert_eq!(old.keymap.len(), 3);
	assert!(old.keymap.press(&KeyChord::ctrl('s')).is_handled());
	assert!(matches!(rx.try_recv(), Ok(SessionEvent::Save(_))));
	assert!(old.outcomes().is_empty());
}

#[test]
fn options_come_from_config_service() {
	let bus = Bus::new();
	let _configs = bus.channel(CONFIGS_CHANNEL).reply(CONFIGS_OBJECT, || {
		toml::from_str::<toml::Table>("editMode = \"fullscreen\"\nencrypt = false").unwrap_or_default()
	});

	let options = SessionOptions::request(&bus).unwrap();
	assert_eq!(options.edit_mode, EditMode::Fullscreen);
}
