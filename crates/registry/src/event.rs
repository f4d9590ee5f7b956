//! Event abstraction consumed by the registry.

use keybind_primitives::{KeyEvent, Modifiers};

/// A key event the registry can match and suppress.
pub trait ShortcutEvent {
	/// Primary key identifier, e.g. `"k"`, `"Enter"` or `"Shift"`.
	fn key(&self) -> &str;

	/// Modifiers held while the key was pressed.
	fn modifiers(&self) -> Modifiers;

	/// Suppresses the host's default handling of this event.
	fn prevent_default(&mut self);
}

impl ShortcutEvent for KeyEvent {
	fn key(&self) -> &str {
		&self.key
	}

	fn modifiers(&self) -> Modifiers {
		self.modifiers
	}

	fn prevent_default(&mut self) {
		self.default_prevented = true;
	}
}
