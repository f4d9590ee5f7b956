//! Stored bindings and their public snapshot form.

use std::fmt;
use std::rc::Rc;

/// Callback invoked with the triggering event.
pub type Action<E> = Rc<dyn Fn(&mut E)>;

/// A combination identifier paired with its action and description.
pub struct Binding<E> {
	/// Canonical combination identifier.
	pub combination: String,
	/// Action invoked on match.
	pub action: Action<E>,
	/// Human-readable label, empty when not given.
	pub description: String,
}

impl<E> Binding<E> {
	/// Snapshot without the action.
	pub fn info(&self) -> BindingInfo {
		BindingInfo {
			combination: self.combination.clone(),
			description: self.description.clone(),
		}
	}
}

impl<E> Clone for Binding<E> {
	fn clone(&self) -> Self {
		Self {
			combination: self.combination.clone(),
			action: Rc::clone(&self.action),
			description: self.description.clone(),
		}
	}
}

impl<E> fmt::Debug for Binding<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Binding")
			.field("combination", &self.combination)
			.field("description", &self.description)
			.finish_non_exhaustive()
	}
}

/// A binding as listed by [`ShortcutRegistry::list_all`](crate::ShortcutRegistry::list_all).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingInfo {
	/// Canonical combination identifier.
	pub combination: String,
	/// Human-readable label.
	pub description: String,
}

impl BindingInfo {
	/// Creates a listing entry.
	pub fn new(combination: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			combination: combination.into(),
			description: description.into(),
		}
	}
}
