//! Key modifier set (Meta, Ctrl, Alt, Shift).

use bitflags::bitflags;

bitflags! {
	/// Modifier keys held during a key event.
	///
	/// Iterating a set with [`Modifiers::canonical`] always yields the
	/// canonical order `meta`, `ctrl`, `alt`, `shift`.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Modifiers: u8 {
		/// Meta / Command / Super.
		const META = 1 << 0;
		/// Control.
		const CTRL = 1 << 1;
		/// Alt / Option.
		const ALT = 1 << 2;
		/// Shift.
		const SHIFT = 1 << 3;
	}
}

/// Canonical modifier order with the identifier token for each flag.
const CANONICAL: [(Modifiers, &str); 4] = [
	(Modifiers::META, "meta"),
	(Modifiers::CTRL, "ctrl"),
	(Modifiers::ALT, "alt"),
	(Modifiers::SHIFT, "shift"),
];

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self::empty();

	/// Returns a copy with Meta added.
	pub fn meta(self) -> Self {
		self | Self::META
	}

	/// Returns a copy with Ctrl added.
	pub fn ctrl(self) -> Self {
		self | Self::CTRL
	}

	/// Returns a copy with Alt added.
	pub fn alt(self) -> Self {
		self | Self::ALT
	}

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		self | Self::SHIFT
	}

	/// Identifier tokens of the set, in canonical order.
	pub fn canonical(self) -> impl Iterator<Item = &'static str> {
		CANONICAL
			.into_iter()
			.filter(move |(flag, _)| self.contains(*flag))
			.map(|(_, name)| name)
	}

	/// Parses a single lower-case modifier token, accepting common aliases.
	///
	/// The `CmdOrCtrl` placeholder is not a modifier here; it is resolved
	/// against the platform before this lookup.
	pub fn from_token(token: &str) -> Option<Self> {
		match token {
			"meta" | "cmd" | "command" | "super" => Some(Self::META),
			"ctrl" | "control" => Some(Self::CTRL),
			"alt" | "option" => Some(Self::ALT),
			"shift" => Some(Self::SHIFT),
			_ => None,
		}
	}
}
