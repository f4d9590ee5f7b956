//! Declarative keymap configuration.
//!
//! Bindings are declared per action name:
//!
//! ```toml
//! [bindings]
//! open_palette = { keys = "CmdOrCtrl+K", description = "Open palette" }
//! save = { keys = ["CmdOrCtrl+S", "F2"] }
//! ```
//!
//! Action names are resolved by the embedder when the config is bound; see
//! [`ShortcutRegistry::bind_config`](crate::ShortcutRegistry::bind_config).

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

mod error;

pub use error::{ConfigError, Result};

/// A keymap document: action name to binding item, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeymapConfig {
	/// Declared bindings keyed by action name.
	#[serde(default)]
	pub bindings: IndexMap<String, Item>,
}

impl KeymapConfig {
	/// Parses a TOML document.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] if the document is malformed.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a TOML file.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Io`] if the file cannot be read, or
	/// [`ConfigError::Toml`] if it is malformed.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}
}

/// Keys and description declared for one action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
	/// Shortcut descriptors; a single string is accepted for one key.
	#[serde(deserialize_with = "one_or_many")]
	pub keys: Vec<String>,
	/// Human-readable label.
	#[serde(default)]
	pub description: String,
}

impl Item {
	/// Creates a new item.
	pub fn new(keys: Vec<String>, description: String) -> Self {
		Self { keys, description }
	}
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Keys {
		One(String),
		Many(Vec<String>),
	}

	Ok(match Keys::deserialize(deserializer)? {
		Keys::One(keys) => vec![keys],
		Keys::Many(keys) => keys,
	})
}
