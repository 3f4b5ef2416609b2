//! Named-channel message bus.
//!
//! Components talk to each other through [`Channel`]s looked up by name on a
//! shared [`Bus`], never through direct references. A channel carries three
//! kinds of contract:
//!
//! * replies: synchronous queries answered by at most one handler per name
//! * commands: fire-and-forget instructions handled by at most one handler per name
//! * events: broadcasts delivered to every listener in registration order
//!
//! Every registration returns a [`Subscription`] token. Revoking or dropping
//! the token removes exactly that registration, so a handler never outlives
//! the component that owns its token.
//!
//! # Reentrancy
//!
//! Handlers run with no channel lock held. A handler may register, revoke,
//! request or trigger on any channel, including the one currently dispatching.

mod bus;
mod channel;
mod error;
mod subscription;

pub use bus::Bus;
pub use channel::Channel;
pub use error::{BusError, HandlerKind, Result};
pub use subscription::Subscription;
