//! Input event sources the registry can subscribe to.
//!
//! The registry never reaches for a global event stream; a host hands it an
//! [`EventSource`] instead. [`ManualSource`] is the in-memory source used by
//! embedders that already own an event loop, and by tests.

#[cfg(feature = "crossterm")]
mod terminal;

#[cfg(feature = "crossterm")]
pub use terminal::CrosstermSource;

/// A subscribed event handler; returns whether it handled the event.
pub type Listener<E> = Box<dyn FnMut(&mut E) -> bool>;

/// Something that delivers input events to attached listeners.
pub trait EventSource<E> {
	/// Attaches `listener` for the lifetime of the source.
	///
	/// Attaching never replaces an earlier listener.
	fn attach(&mut self, listener: Listener<E>);
}

/// Runs every listener in attachment order.
///
/// All listeners see the event even after one has handled it.
pub(crate) fn dispatch<E>(listeners: &mut [Listener<E>], event: &mut E) -> bool {
	let mut handled = false;
	for listener in listeners.iter_mut() {
		handled |= listener(event);
	}
	handled
}

/// An event source driven by explicit [`emit`](ManualSource::emit) calls.
pub struct ManualSource<E> {
	listeners: Vec<Listener<E>>,
}

impl<E> ManualSource<E> {
	/// Creates a source with no listeners.
	pub fn new() -> Self {
		Self { listeners: Vec::new() }
	}

	/// Delivers `event` to every listener; returns whether any handled it.
	pub fn emit(&mut self, event: &mut E) -> bool {
		dispatch(&mut self.listeners, event)
	}

	/// Number of attached listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}
}

impl<E> Default for ManualSource<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> EventSource<E> for ManualSource<E> {
	fn attach(&mut self, listener: Listener<E>) {
		self.listeners.push(listener);
	}
}
