//! Keyboard shortcut registry.
//!
//! Maps normalized key-combination identifiers to actions and dispatches
//! incoming key events to them:
//! - Descriptors such as `"CmdOrCtrl+Shift+P"` resolve per platform family
//! - Modifiers may be written in any order and are matched canonically
//! - Event sources are injected, so dispatch is testable without a terminal
//! - Bindings can be declared in TOML and resolved against named actions

pub use binding::{Action, Binding, BindingInfo};
pub use config::{ConfigError, Item, KeymapConfig};
pub use event::ShortcutEvent;
pub use keybind_parser::{Combination, normalize, parse};
pub use keybind_primitives::{KeyEvent, Modifiers, Platform};
pub use registry::ShortcutRegistry;
#[cfg(feature = "crossterm")]
pub use source::CrosstermSource;
pub use source::{EventSource, Listener, ManualSource};

mod binding;
pub mod config;
mod event;
mod registry;
pub mod source;
