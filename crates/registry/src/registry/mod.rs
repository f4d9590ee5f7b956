//! The shortcut registry.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use keybind_parser::{Combination, normalize};
use keybind_primitives::{KeyEvent, Platform};
use tracing::{debug, trace};

use crate::binding::{Action, Binding, BindingInfo};
use crate::config::{ConfigError, KeymapConfig};
use crate::event::ShortcutEvent;
use crate::source::EventSource;


/// Maps combination identifiers to actions and dispatches key events.
///
/// The registry is single-threaded: every method takes `&self` and mutates
/// through a `RefCell`, so an `Rc<ShortcutRegistry>` can be shared between
/// the caller and an event-source listener. Actions may re-enter the
/// registry; no borrow is held while an action runs.
pub struct ShortcutRegistry<E = KeyEvent> {
	platform: Platform,
	bindings: RefCell<IndexMap<String, Binding<E>>>,
}

impl<E: ShortcutEvent> ShortcutRegistry<E> {
	/// Creates an empty registry; `is_mac` selects how `CmdOrCtrl` resolves.
	pub fn new(is_mac: bool) -> Self {
		Self::for_platform(Platform::from(is_mac))
	}

	/// Creates an empty registry for an explicit platform family.
	pub fn for_platform(platform: Platform) -> Self {
		Self {
			platform,
			bindings: RefCell::new(IndexMap::new()),
		}
	}

	/// Platform family this registry resolves `CmdOrCtrl` against.
	pub fn platform(&self) -> Platform {
		self.platform
	}

	/// Normalizes a descriptor into the identifier bindings are stored under.
	pub fn normalize(&self, keys: &str) -> String {
		normalize(keys, self.platform)
	}

	/// Binds `keys` to `action` with an empty description.
	///
	/// An existing binding for the same combination is replaced.
	pub fn register<F>(&self, keys: &str, action: F)
	where
		F: Fn(&mut E) + 'static,
	{
		self.register_with_description(keys, action, "");
	}

	/// Binds `keys` to `action`, labelled with `description`.
	pub fn register_with_description<F>(&self, keys: &str, action: F, description: impl Into<String>)
	where
		F: Fn(&mut E) + 'static,
	{
		self.insert(keys, Rc::new(action), description.into());
	}

	fn insert(&self, keys: &str, action: Action<E>, description: String) {
		let combination = self.normalize(keys);
		let binding = Binding {
			combination: combination.clone(),
			action,
			description,
		};

		let previous = self.bindings.borrow_mut().insert(combination, binding);
		match previous {
			Some(old) => debug!(
				combination = %old.combination,
				previous = %old.description,
				"replaced shortcut binding"
			),
			None => debug!(keys, "registered shortcut"),
		}
	}

	/// Removes the binding for `keys`, returning whether one existed.
	pub fn unregister(&self, keys: &str) -> bool {
		let combination = self.normalize(keys);
		// Dropped after the borrow ends; an action's captures may touch the registry.
		let removed = self.bindings.borrow_mut().shift_remove(&combination);
		if removed.is_some() {
			debug!(%combination, "unregistered shortcut");
		}
		removed.is_some()
	}

	/// Removes every binding.
	pub fn clear(&self) {
		let removed = std::mem::take(&mut *self.bindings.borrow_mut());
		debug!(count = removed.len(), "cleared shortcuts");
		drop(removed);
	}

	/// Snapshot of every binding in insertion order.
	pub fn list_all(&self) -> Vec<BindingInfo> {
		self.bindings.borrow().values().map(Binding::info).collect()
	}

	/// Number of bindings.
	pub fn len(&self) -> usize {
		self.bindings.borrow().len()
	}

	/// Whether the registry has no bindings.
	pub fn is_empty(&self) -> bool {
		self.bindings.borrow().is_empty()
	}

	/// Whether a binding exists for `keys`.
	pub fn contains(&self, keys: &str) -> bool {
		self.bindings.borrow().contains_key(&self.normalize(keys))
	}

	/// Description of the binding for `keys`, if any.
	pub fn description(&self, keys: &str) -> Option<String> {
		self.bindings
			.borrow()
			.get(&self.normalize(keys))
			.map(|binding| binding.description.clone())
	}

	/// Dispatches `event` to the binding its combination names.
	///
	/// On a match the event's default handling is suppressed, the action
	/// runs once, and `true` is returned. Otherwise nothing happens and
	/// `false` is returned.
	pub fn handle_input_event(&self, event: &mut E) -> bool {
		let combination = Combination::from_key(event.modifiers(), event.key()).identifier();
		let action = self
			.bindings
			.borrow()
			.get(&combination)
			.map(|binding| Rc::clone(&binding.action));

		let Some(action) = action else {
			trace!(%combination, "no shortcut bound");
			return false;
		};

		trace!(%combination, "dispatching shortcut");
		event.prevent_default();
		action(event);
		true
	}

	/// Registers every binding declared in `config`.
	///
	/// Each action name is resolved through `resolve` first; if any name is
	/// unknown the registry is left untouched. Returns the number of
	/// descriptors bound.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::UnknownAction`] for the first unresolved name.
	pub fn bind_config<F, A>(&self, config: &KeymapConfig, mut resolve: F) -> Result<usize, ConfigError>
	where
		F: FnMut(&str) -> Option<A>,
		A: Fn(&mut E) + 'static,
	{
		let mut resolved = Vec::with_capacity(config.bindings.len());
		for (name, item) in &config.bindings {
			let Some(action) = resolve(name) else {
				return Err(ConfigError::UnknownAction(name.clone()));
			};
			let action: Action<E> = Rc::new(action);
			resolved.push((action, item));
		}

		let mut count = 0;
		for (action, item) in resolved {
			for keys in &item.keys {
				self.insert(keys, Rc::clone(&action), item.description.clone());
				count += 1;
			}
		}

		debug!(count, "bound shortcuts from config");
		Ok(count)
	}
}

impl<E: ShortcutEvent + 'static> ShortcutRegistry<E> {
	/// Attaches a listener forwarding every event from `source` to
	/// [`handle_input_event`](Self::handle_input_event).
	///
	/// Each call attaches another listener; call it once per source. The
	/// listener only holds a weak reference and reports "not handled" once
	/// the registry is dropped.
	pub fn listen_for_events<S>(self: &Rc<Self>, source: &mut S)
	where
		S: EventSource<E> + ?Sized,
	{
		let registry = Rc::downgrade(self);
		source.attach(Box::new(move |event: &mut E| {
			registry
				.upgrade()
				.is_some_and(|registry| registry.handle_input_event(event))
		}));
		debug!("attached shortcut listener");
	}
}

impl<E: ShortcutEvent> Default for ShortcutRegistry<E> {
	fn default() -> Self {
		Self::for_platform(Platform::current())
	}
}
