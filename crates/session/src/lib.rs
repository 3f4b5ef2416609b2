//! Editing-session controller for a single note form.
//!
//! A [`FormSession`] owns the form's display mode, its save/cancel intent and
//! the contracts it registers on the shared `notesForm` channel. It never
//! persists or navigates itself: it reports [`SessionEvent`]s to the owning
//! container, which does the actual work.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──► Building ──Rendered──► Ready ──destroy()/drop──► Destroyed
//!   │                     │                        │
//!   │ register model,     │ view:ready, focus      │ force Normal, view:destroy,
//!   │ show:editor,        │ title, initial mode    │ revoke contracts, unbind keys
//!   │ save:auto, keys     │                        │
//! ```

pub mod contract;
mod intent;
mod interaction;
mod options;
mod outcome;
mod session;
mod surface;

pub use intent::Intent;
pub use interaction::{Interaction, InteractionKind};
pub use noteform_primitives::{Dispatch, EditMode, FocusTarget, StyleFlags};
pub use options::{OptionsError, SessionOptions};
pub use outcome::{LocalSignal, OutcomeReceiver, OutcomeSender, SessionEvent, outcome_channel};
pub use session::{FormSession, Lifecycle, SessionHost};
pub use surface::{RegionView, ViewSurface};
