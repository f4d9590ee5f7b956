//! Key events as delivered by a host input source.

#[cfg(feature = "crossterm")]
mod terminal;
mod modifiers;

pub use modifiers::Modifiers;

/// Primary key names that denote a modifier key pressed on its own.
const MODIFIER_KEYS: [&str; 7] = ["meta", "control", "alt", "shift", "os", "super", "altgraph"];

/// A keyboard event: a primary key identifier plus held modifiers.
///
/// Key identifiers follow the DOM `KeyboardEvent.key` naming (`"k"`, `"K"`,
/// `"Enter"`, `"ArrowUp"`, `"Shift"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
	/// Primary key identifier as reported by the host.
	pub key: String,
	/// Modifiers held while the key was pressed.
	pub modifiers: Modifiers,
	/// Set once a handler has suppressed the host's default handling.
	pub default_prevented: bool,
}

impl KeyEvent {
	/// Creates an event for `key` with no modifiers.
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			modifiers: Modifiers::NONE,
			default_prevented: false,
		}
	}

	/// Creates an event for `key` with the given modifiers.
	pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
		Self {
			modifiers,
			..Self::new(key)
		}
	}

	/// Returns a copy with Meta held.
	pub fn with_meta(self) -> Self {
		Self {
			modifiers: self.modifiers.meta(),
			..self
		}
	}

	/// Returns a copy with Ctrl held.
	pub fn with_ctrl(self) -> Self {
		Self {
			modifiers: self.modifiers.ctrl(),
			..self
		}
	}

	/// Returns a copy with Alt held.
	pub fn with_alt(self) -> Self {
		Self {
			modifiers: self.modifiers.alt(),
			..self
		}
	}

	/// Returns a copy with Shift held.
	pub fn with_shift(self) -> Self {
		Self {
			modifiers: self.modifiers.shift(),
			..self
		}
	}

	/// Whether the primary key is itself a modifier key.
	pub fn is_modifier_only(&self) -> bool {
		is_modifier_key(&self.key)
	}
}

/// Returns true when `key` names a modifier key (`Shift`, `Control`, ...).
pub fn is_modifier_key(key: &str) -> bool {
	let lower = key.to_lowercase();
	MODIFIER_KEYS.contains(&lower.as_str())
}

/// Lower-cases a primary key name and folds common aliases.
///
/// Applied to both registered descriptors and incoming events so that
/// `"Esc"` and `"Escape"`, or `" "` and `"Space"`, meet in one spelling.
pub fn canonical_key(key: &str) -> String {
	if key == " " {
		return "space".to_string();
	}

	let lower = key.to_lowercase();
	let folded = match lower.as_str() {
		"spacebar" => "space",
		"esc" => "escape",
		"del" => "delete",
		"return" => "enter",
		"up" => "arrowup",
		"down" => "arrowdown",
		"left" => "arrowleft",
		"right" => "arrowright",
		_ => return lower,
	};
	folded.to_string()
}
