//! Terminal key events via crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use keybind_primitives::KeyEvent;
use tracing::trace;

use super::{EventSource, Listener, dispatch};

/// Reads key presses from the terminal and forwards them to listeners.
///
/// The caller owns the loop and raw-mode setup; each `pump` call consumes
/// exactly one terminal event.
#[derive(Default)]
pub struct CrosstermSource {
	listeners: Vec<Listener<KeyEvent>>,
}

impl CrosstermSource {
	/// Creates a source with no listeners.
	pub fn new() -> Self {
		Self::default()
	}

	/// Blocks for the next terminal event and dispatches it.
	///
	/// Returns `Some(handled)` for key presses and repeats, `None` for
	/// releases and non-key events.
	///
	/// # Errors
	///
	/// Propagates terminal read failures.
	pub fn pump(&mut self) -> io::Result<Option<bool>> {
		let event = event::read()?;
		Ok(self.deliver(event))
	}

	/// Like [`pump`](Self::pump), but gives up after `timeout` with `None`.
	///
	/// # Errors
	///
	/// Propagates terminal poll and read failures.
	pub fn pump_timeout(&mut self, timeout: Duration) -> io::Result<Option<bool>> {
		if !event::poll(timeout)? {
			return Ok(None);
		}
		self.pump()
	}

	/// Dispatches an already-read terminal event.
	pub fn deliver(&mut self, event: Event) -> Option<bool> {
		let Event::Key(key) = event else {
			return None;
		};
		if key.kind == KeyEventKind::Release {
			return None;
		}

		let mut event = KeyEvent::from(&key);
		trace!(key = %event.key, modifiers = ?event.modifiers, "terminal key event");
		Some(dispatch(&mut self.listeners, &mut event))
	}
}

impl EventSource<KeyEvent> for CrosstermSource {
	fn attach(&mut self, listener: Listener<KeyEvent>) {
		self.listeners.push(listener);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use crossterm::event::{KeyCode, KeyEvent as TermKey, KeyEventKind, KeyModifiers};

	use super::*;
	use crate::ShortcutRegistry;

	fn bound_source(keys: &str) -> (Rc<ShortcutRegistry>, CrosstermSource, Rc<Cell<usize>>) {
		let registry = Rc::new(ShortcutRegistry::<KeyEvent>::new(false));
		let mut source = CrosstermSource::new();
		registry.listen_for_events(&mut source);

		let hits = Rc::new(Cell::new(0));
		let counter = Rc::clone(&hits);
		registry.register(keys, move |_| counter.set(counter.get() + 1));
		(registry, source, hits)
	}

	fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
		Event::Key(TermKey::new_with_kind(code, modifiers, kind))
	}

	#[test]
	fn press_and_repeat_dispatch() {
		let (_registry, mut source, hits) = bound_source("Ctrl+K");

		let press = key(KeyCode::Char('k'), KeyModifiers::CONTROL, KeyEventKind::Press);
		let repeat = key(KeyCode::Char('k'), KeyModifiers::CONTROL, KeyEventKind::Repeat);
		assert_eq!(source.deliver(press), Some(true));
		assert_eq!(source.deliver(repeat), Some(true));
		assert_eq!(hits.get(), 2);
	}

	#[test]
	fn unbound_press_is_not_handled() {
		let (_registry, mut source, hits) = bound_source("Ctrl+K");

		let press = key(KeyCode::Char('j'), KeyModifiers::CONTROL, KeyEventKind::Press);
		assert_eq!(source.deliver(press), Some(false));
		assert_eq!(hits.get(), 0);
	}

	#[test]
	fn release_is_ignored() {
		let (_registry, mut source, hits) = bound_source("Ctrl+K");

		let release = key(KeyCode::Char('k'), KeyModifiers::CONTROL, KeyEventKind::Release);
		assert_eq!(source.deliver(release), None);
		assert_eq!(hits.get(), 0);
	}

	#[test]
	fn non_key_events_are_ignored() {
		let (_registry, mut source, hits) = bound_source("Ctrl+K");

		assert_eq!(source.deliver(Event::Resize(80, 24)), None);
		assert_eq!(source.deliver(Event::FocusGained), None);
		assert_eq!(hits.get(), 0);
	}

	#[test]
	fn named_terminal_keys_match_descriptors() {
		let (_registry, mut source, hits) = bound_source("PrintScreen");

		let press = key(KeyCode::PrintScreen, KeyModifiers::NONE, KeyEventKind::Press);
		let pause = key(KeyCode::Pause, KeyModifiers::NONE, KeyEventKind::Press);
		assert_eq!(source.deliver(press), Some(true));
		assert_eq!(source.deliver(pause), Some(false));
		assert_eq!(hits.get(), 1);
	}
}
