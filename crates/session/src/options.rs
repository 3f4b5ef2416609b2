use noteform_bus::{Bus, BusError};
use noteform_primitives::EditMode;
use serde::Deserialize;
use thiserror::Error;

use crate::contract::{CONFIGS_CHANNEL, CONFIGS_OBJECT};

/// Errors produced while loading [`SessionOptions`].
#[derive(Debug, Error)]
pub enum OptionsError {
	/// The configuration was not valid TOML, or a value had the wrong shape,
	/// such as an unknown `editMode`.
	#[error("invalid session options: {0}")]
	Toml(#[from] toml::de::Error),

	/// The configuration service answered with something other than a table.
	#[error("configuration request failed: {0}")]
	Bus(#[from] BusError),
}

/// Per-session configuration.
///
/// Keys use the application's camel-case spelling. Unknown keys are ignored
/// so the whole application configuration can be passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionOptions {
	/// Mode entered after the first render.
	pub edit_mode: EditMode,
}

impl SessionOptions {
	pub fn new(edit_mode: EditMode) -> Self {
		Self { edit_mode }
	}

	/// Parses options from a TOML document.
	///
	/// # Errors
	///
	/// Returns [`OptionsError::Toml`] for malformed TOML or invalid values.
	pub fn from_toml(source: &str) -> Result<Self, OptionsError> {
		Ok(toml::from_str(source)?)
	}

	/// Reads options from the application configuration service.
	///
	/// Queries the `get:object` reply on the `configs` channel, which answers
	/// with a `toml::Table`. When nothing answers, the defaults are used.
	///
	/// # Errors
	///
	/// Returns [`OptionsError::Bus`] if the reply has the wrong payload type,
	/// or [`OptionsError::Toml`] if the table holds invalid values.
	pub fn request(bus: &Bus) -> Result<Self, OptionsError> {
		let table = match bus.channel(CONFIGS_CHANNEL).request::<toml::Table>(CONFIGS_OBJECT) {
			Ok(table) => table,
			Err(BusError::NoHandler { .. }) => {
				tracing::debug!("session.options.defaults");
				return Ok(Self::default());
			}
			Err(err) => return Err(err.into()),
		};
		Ok(toml::Value::Table(table).try_into()?)
	}
}
