use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::channel::Channel;

/// Registry of named channels shared by every component of an application.
///
/// Channels are created on first use and live as long as the bus.
#[derive(Default)]
pub struct Bus {
	channels: Mutex<FxHashMap<String, Arc<Channel>>>,
}

impl Bus {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the channel called `name`, creating it if needed.
	pub fn channel(&self, name: &str) -> Arc<Channel> {
		self.channels
			.lock()
			.entry(name.to_string())
			.or_insert_with(|| Arc::new(Channel::new(name)))
			.clone()
	}

	/// Broadcasts `event` on channel `channel`.
	///
	/// Shorthand for `bus.channel(channel).trigger(event, payload)`.
	pub fn trigger<T: Any>(&self, channel: &str, event: &str, payload: &T) -> usize {
		self.channel(channel).trigger(event, payload)
	}
}
