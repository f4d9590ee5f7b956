//! Canonical modifier-set-plus-key representation.

use std::fmt;

use keybind_primitives::{KeyEvent, Modifiers, canonical_key, is_modifier_key};

/// Separator between tokens in descriptors and identifiers.
pub const KEY_SEP: char = '+';

/// A modifier set followed by zero or more key tokens.
///
/// Well-formed shortcuts carry exactly one key. Descriptors with several
/// non-modifier tokens are kept as written so they normalize to something,
/// even though no key event can ever produce them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Combination {
	/// Held modifiers.
	pub modifiers: Modifiers,
	/// Canonical key tokens in descriptor order.
	pub keys: Vec<String>,
}

impl Combination {
	/// Builds the combination for a pressed `key` with `modifiers` held.
	///
	/// A modifier key pressed on its own contributes only its modifier flag,
	/// never a second key token.
	pub fn from_key(modifiers: Modifiers, key: &str) -> Self {
		let keys = if key.is_empty() || is_modifier_key(key) {
			Vec::new()
		} else {
			vec![canonical_key(key)]
		};
		Self { modifiers, keys }
	}

	/// Builds the combination a key event represents.
	pub fn from_event(event: &KeyEvent) -> Self {
		Self::from_key(event.modifiers, &event.key)
	}

	/// Canonical identifier, e.g. `"meta+shift+k"`.
	pub fn identifier(&self) -> String {
		self.to_string()
	}

	/// Whether the combination has neither modifiers nor a key.
	pub fn is_empty(&self) -> bool {
		self.modifiers.is_empty() && self.keys.is_empty()
	}
}

impl fmt::Display for Combination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		let mut push = |f: &mut fmt::Formatter<'_>, token: &str| -> fmt::Result {
			if !first {
				write!(f, "{KEY_SEP}")?;
			}
			first = false;
			f.write_str(token)
		};

		for modifier in self.modifiers.canonical() {
			push(f, modifier)?;
		}
		for key in &self.keys {
			push(f, key)?;
		}
		Ok(())
	}
}

impl From<&KeyEvent> for Combination {
	fn from(event: &KeyEvent) -> Self {
		Self::from_event(event)
	}
}
