use std::sync::{Arc, Weak};

use crate::channel::{Channel, HandlerId};
use crate::error::HandlerKind;

/// Token for one registration on a [`Channel`].
///
/// Revoking the token removes the registration. Dropping an unrevoked token
/// revokes it as well, so handlers cannot leak past their owner. Revoking a
/// registration that was already replaced by a newer one leaves the newer
/// registration in place.
#[must_use = "dropping a subscription revokes it immediately"]
pub struct Subscription {
	channel: Weak<Channel>,
	kind: HandlerKind,
	name: String,
	id: HandlerId,
	revoked: bool,
}

impl Subscription {
	pub(crate) fn new(channel: &Arc<Channel>, kind: HandlerKind, name: &str, id: HandlerId) -> Self {
		Self {
			channel: Arc::downgrade(channel),
			kind,
			name: name.to_string(),
			id,
			revoked: false,
		}
	}

	pub fn kind(&self) -> HandlerKind {
		self.kind
	}

	/// The reply, command or event name this token was registered under.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Removes the registration from its channel.
	pub fn revoke(mut self) {
		self.revoke_inner();
	}

	fn revoke_inner(&mut self) {
		if self.revoked {
			return;
		}
		self.revoked = true;

		let Some(channel) = self.channel.upgrade() else {
			return;
		};
		let removed = channel.remove(self.kind, &self.name, self.id);
		tracing::trace!(
			channel = channel.name(),
			kind = %self.kind,
			name = %self.name,
			removed,
			"bus.revoke"
		);
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.revoke_inner();
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("kind", &self.kind)
			.field("name", &self.name)
			.field("revoked", &self.revoked)
			.finish()
	}
}
