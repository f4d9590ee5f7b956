//! Shortcut descriptor normalization.
//!
//! Turns descriptors such as `"CmdOrCtrl+Shift+K"` or `"shift + ctrl + k"`
//! into a canonical [`Combination`] whose string form (`"ctrl+shift+k"`) is
//! the lookup key shared by registrations and incoming key events.

pub use combination::{Combination, KEY_SEP};
pub use parser::{normalize, parse};

mod combination;
mod parser;
