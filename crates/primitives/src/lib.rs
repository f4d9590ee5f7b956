//! Shared types for shortcut dispatch: modifier sets, key events and the
//! platform family used to resolve `CmdOrCtrl`.

/// Key event and modifier types.
pub mod key;
/// Host platform classification.
pub mod platform;

pub use key::{KeyEvent, Modifiers, canonical_key, is_modifier_key};
pub use platform::Platform;
