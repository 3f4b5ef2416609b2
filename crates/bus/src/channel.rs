use std::any::{Any, type_name};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::error::{BusError, HandlerKind, Result};
use crate::subscription::Subscription;

/// Identifies one registration on a channel.
pub(crate) type HandlerId = u64;

type Payload = Box<dyn Any + Send>;
type ReplyFn = Arc<dyn Fn() -> Payload + Send + Sync>;
type CommandFn = Arc<dyn Fn(Payload) -> std::result::Result<(), &'static str> + Send + Sync>;
type EventFn = Arc<dyn Fn(&dyn Any) + Send + Sync>;

struct Listener {
	id: HandlerId,
	event: String,
	handler: EventFn,
}

#[derive(Default)]
struct Handlers {
	replies: FxHashMap<String, (HandlerId, ReplyFn)>,
	commands: FxHashMap<String, (HandlerId, CommandFn)>,
	listeners: Vec<Listener>,
}

/// A named set of replies, commands and event listeners.
///
/// Obtained from [`crate::Bus::channel`]; all holders of the same name share
/// one channel.
pub struct Channel {
	name: String,
	next_id: AtomicU64,
	handlers: Mutex<Handlers>,
}

impl Channel {
	pub(crate) fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			next_id: AtomicU64::new(1),
			handlers: Mutex::new(Handlers::default()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	fn next_id(&self) -> HandlerId {
		self.next_id.fetch_add(1, Ordering::Relaxed)
	}

	/// Answers `name` requests with the value produced by `handler`.
	///
	/// Replaces any existing reply for `name`; the replaced registration's
	/// token becomes inert.
	pub fn reply<T, F>(self: &Arc<Self>, name: &str, handler: F) -> Subscription
	where
		T: Any + Send,
		F: Fn() -> T + Send + Sync + 'static,
	{
		let id = self.next_id();
		let handler: ReplyFn = Arc::new(move || Box::new(handler()) as Payload);
		let replaced = self
			.handlers
			.lock()
			.replies
			.insert(name.to_string(), (id, handler))
			.is_some();
		if replaced {
			tracing::debug!(channel = %self.name, name, "bus.reply.replaced");
		}
		Subscription::new(self, HandlerKind::Reply, name, id)
	}

	/// Handles `name` commands carrying an `A` payload.
	///
	/// Replaces any existing command handler for `name`.
	pub fn comply<A, F>(self: &Arc<Self>, name: &str, handler: F) -> Subscription
	where
		A: Any + Send,
		F: Fn(A) + Send + Sync + 'static,
	{
		let id = self.next_id();
		let handler: CommandFn = Arc::new(move |payload: Payload| match payload.downcast::<A>() {
			Ok(arg) => {
				handler(*arg);
				Ok(())
			}
			Err(_) => Err(type_name::<A>()),
		});
		let replaced = self
			.handlers
			.lock()
			.commands
			.insert(name.to_string(), (id, handler))
			.is_some();
		if replaced {
			tracing::debug!(channel = %self.name, name, "bus.command.replaced");
		}
		Subscription::new(self, HandlerKind::Command, name, id)
	}

	/// Listens for `event` broadcasts with any payload.
	pub fn on<F>(self: &Arc<Self>, event: &str, handler: F) -> Subscription
	where
		F: Fn(&dyn Any) + Send + Sync + 'static,
	{
		let id = self.next_id();
		self.handlers.lock().listeners.push(Listener {
			id,
			event: event.to_string(),
			handler: Arc::new(handler),
		});
		Subscription::new(self, HandlerKind::Event, event, id)
	}

	/// Listens for `event` broadcasts whose payload is a `T`.
	///
	/// Broadcasts with a different payload type are skipped.
	pub fn on_payload<T, F>(self: &Arc<Self>, event: &str, handler: F) -> Subscription
	where
		T: Any,
		F: Fn(&T) + Send + Sync + 'static,
	{
		let channel = self.name.clone();
		let name = event.to_string();
		self.on(event, move |payload| match payload.downcast_ref::<T>() {
			Some(value) => handler(value),
			None => tracing::trace!(
				channel = %channel,
				event = %name,
				expected = type_name::<T>(),
				"bus.event.payload_skipped"
			),
		})
	}

	/// Sends a request and returns the reply.
	pub fn request<T: Any>(&self, name: &str) -> Result<T> {
		let handler = self
			.handlers
			.lock()
			.replies
			.get(name)
			.map(|(_, handler)| handler.clone());
		let Some(handler) = handler else {
			return Err(self.no_handler(HandlerKind::Reply, name));
		};

		handler()
			.downcast::<T>()
			.map(|value| *value)
			.map_err(|_| self.payload_type(HandlerKind::Reply, name, type_name::<T>()))
	}

	/// Sends a command with payload `arg`.
	pub fn command<A: Any + Send>(&self, name: &str, arg: A) -> Result<()> {
		let handler = self
			.handlers
			.lock()
			.commands
			.get(name)
			.map(|(_, handler)| handler.clone());
		let Some(handler) = handler else {
			return Err(self.no_handler(HandlerKind::Command, name));
		};

		handler(Box::new(arg)).map_err(|expected| self.payload_type(HandlerKind::Command, name, expected))
	}

	/// Broadcasts `event` to every listener, returning how many were notified.
	///
	/// Listeners registered or revoked during dispatch take effect for the
	/// next broadcast.
	pub fn trigger<T: Any>(&self, event: &str, payload: &T) -> usize {
		let listeners: Vec<EventFn> = self
			.handlers
			.lock()
			.listeners
			.iter()
			.filter(|l| l.event == event)
			.map(|l| l.handler.clone())
			.collect();

		tracing::trace!(channel = %self.name, event, listeners = listeners.len(), "bus.trigger");
		for listener in &listeners {
			listener(payload as &dyn Any);
		}
		listeners.len()
	}

	/// Returns true if a reply is registered for `name`.
	pub fn has_reply(&self, name: &str) -> bool {
		self.handlers.lock().replies.contains_key(name)
	}

	/// Returns true if a command handler is registered for `name`.
	pub fn has_command(&self, name: &str) -> bool {
		self.handlers.lock().commands.contains_key(name)
	}

	/// Returns the number of listeners registered for `event`.
	pub fn listener_count(&self, event: &str) -> usize {
		self.handlers
			.lock()
			.listeners
			.iter()
			.filter(|l| l.event == event)
			.count()
	}

	/// Removes the registration `id`, returning false if it was already gone or replaced.
	///
	/// The removed handler is dropped after the channel lock is released.
	pub(crate) fn remove(&self, kind: HandlerKind, name: &str, id: HandlerId) -> bool {
		let mut handlers = self.handlers.lock();
		let removed: Option<Box<dyn Any>> = match kind {
			HandlerKind::Reply => take_keyed(&mut handlers.replies, name, id).map(|h| Box::new(h) as _),
			HandlerKind::Command => {
				take_keyed(&mut handlers.commands, name, id).map(|h| Box::new(h) as _)
			}
			HandlerKind::Event => handlers
				.listeners
				.iter()
				.position(|l| l.id == id)
				.map(|index| Box::new(handlers.listeners.remove(index).handler) as _),
		};
		drop(handlers);
		removed.is_some()
	}

	fn no_handler(&self, kind: HandlerKind, name: &str) -> BusError {
		BusError::NoHandler {
			channel: self.name.clone(),
			name: name.to_string(),
			kind,
		}
	}

	fn payload_type(&self, kind: HandlerKind, name: &str, expected: &'static str) -> BusError {
		BusError::PayloadType {
			channel: self.name.clone(),
			name: name.to_string(),
			kind,
			expected,
		}
	}
}

fn take_keyed<H>(map: &mut FxHashMap<String, (HandlerId, H)>, name: &str, id: HandlerId) -> Option<H> {
	if map.get(name).is_some_and(|(current, _)| *current == id) {
		map.remove(name).map(|(_, handler)| handler)
	} else {
		None
	}
}
