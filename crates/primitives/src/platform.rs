//! Host platform family, used to resolve the `CmdOrCtrl` placeholder.

/// Platform family that decides which concrete modifier `CmdOrCtrl` means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
	/// macOS and iOS: `CmdOrCtrl` is Meta (Command).
	Mac,
	/// Everything else: `CmdOrCtrl` is Ctrl.
	Other,
}

impl Platform {
	/// Classifies a platform identifier string such as `"MacIntel"`,
	/// `"macos"`, `"Win32"` or `"linux"`.
	pub fn from_identifier(identifier: &str) -> Self {
		let lower = identifier.to_lowercase();
		let mac_family = lower.contains("mac")
			|| matches!(lower.as_str(), "darwin" | "ios" | "iphone" | "ipad" | "ipod");
		if mac_family { Self::Mac } else { Self::Other }
	}

	/// Classifies the platform this binary was compiled for.
	pub fn current() -> Self {
		Self::from_identifier(std::env::consts::OS)
	}

	/// Whether this is the Mac family.
	pub fn is_mac(self) -> bool {
		self == Self::Mac
	}
}

impl From<bool> for Platform {
	fn from(is_mac: bool) -> Self {
		if is_mac { Self::Mac } else { Self::Other }
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("MacIntel", Platform::Mac)]
	#[case("macos", Platform::Mac)]
	#[case("iPhone", Platform::Mac)]
	#[case("darwin", Platform::Mac)]
	#[case("Win32", Platform::Other)]
	#[case("linux", Platform::Other)]
	#[case("", Platform::Other)]
	fn classifies_identifiers(#[case] identifier: &str, #[case] expected: Platform) {
		assert_eq!(Platform::from_identifier(identifier), expected);
	}

	#[test]
	fn bool_conversion() {
		assert!(Platform::from(true).is_mac());
		assert!(!Platform::from(false).is_mac());
	}

	#[test]
	fn current_matches_target() {
		assert_eq!(Platform::current().is_mac(), cfg!(any(target_os = "macos", target_os = "ios")));
	}
}
