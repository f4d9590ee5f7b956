//! # Parser
//!
//! Parses human-authored shortcut descriptors into [`Combination`]s. Parsing
//! is purely textual and total: every input yields some combination, and
//! malformed input simply yields one no key event will ever produce.
//!
//! ## Supported Syntax
//!
//! ```text
//! descriptor = token ("+" token)*
//! token      = modifier | placeholder | key
//! modifier   = "meta" | "cmd" | "command" | "super" | "ctrl" | "control"
//!            | "alt" | "option" | "shift"
//! placeholder = "cmdorctrl" | "commandorcontrol"
//! key        = any other text, a bare "+", or trailing blanks (space)
//! ```
//!
//! Matching is case-insensitive and modifiers may appear in any order;
//! they are re-emitted in the canonical `meta`, `ctrl`, `alt`, `shift` order.

use keybind_primitives::{Modifiers, Platform, canonical_key};

use crate::combination::{Combination, KEY_SEP};

#[cfg(test)]
mod tests;

/// Key token for a blank trailing segment.
const SPACE: &str = "space";

/// Descriptor tokens that resolve to the platform's primary modifier.
const PLACEHOLDERS: [&str; 2] = ["cmdorctrl", "commandorcontrol"];

/// Maintains the parser's state while scanning a descriptor.
struct Parser<'a> {
	/// The remaining, lower-cased input.
	input: &'a str,
}

impl<'a> Parser<'a> {
	/// Creates a new `Parser` from the given input string.
	fn new(input: &'a str) -> Self {
		Self { input }
	}

	/// Peeks at the next character without consuming it.
	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	/// Peeks at the character `n` positions ahead without consuming it.
	fn peek_at(&self, n: usize) -> Option<char> {
		self.input.chars().nth(n)
	}

	/// Consumes and returns the next character, advancing the parser.
	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.input = &self.input[ch.len_utf8()..];
		Some(ch)
	}

	/// Returns `true` if the parser has consumed all input.
	fn is_end(&self) -> bool {
		self.input.is_empty()
	}

	/// Consumes the next character if it equals `expected`.
	fn eat(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.next();
			true
		} else {
			false
		}
	}

	/// Consumes and returns the characters that satisfy a predicate.
	fn take_while<F>(&mut self, predicate: F) -> &'a str
	where
		F: Fn(char) -> bool,
	{
		let end = self
			.input
			.char_indices()
			.find(|&(_, ch)| !predicate(ch))
			.map_or(self.input.len(), |(idx, _)| idx);
		let (taken, rest) = self.input.split_at(end);
		self.input = rest;
		taken
	}

	/// Returns the next non-empty token, consuming its trailing separator.
	///
	/// A separator standing where a token is expected, and followed by
	/// another separator or the end of input, is the literal `+` key.
	fn next_token(&mut self) -> Option<&'a str> {
		while !self.is_end() {
			let raw = self.take_while(|ch| ch != KEY_SEP);
			let token = raw.trim();
			if !token.is_empty() {
				self.eat(KEY_SEP);
				return Some(token);
			}

			if self.is_end() {
				// A trailing blank segment is the space bar: `ctrl+ `.
				return (!raw.is_empty()).then_some(SPACE);
			}

			if matches!(self.peek_at(1), None | Some(KEY_SEP)) {
				let input = self.input;
				let literal = &input[..KEY_SEP.len_utf8()];
				self.next();
				self.eat(KEY_SEP);
				return Some(literal);
			}

			// Stray separator.
			self.next();
		}

		None
	}
}

/// A classified descriptor token.
enum Token<'a> {
	Modifier(Modifiers),
	Key(&'a str),
}

/// Classifies a lower-cased token, resolving the `CmdOrCtrl` placeholder.
fn classify(token: &str, platform: Platform) -> Token<'_> {
	if PLACEHOLDERS.contains(&token) {
		return Token::Modifier(if platform.is_mac() { Modifiers::META } else { Modifiers::CTRL });
	}

	match Modifiers::from_token(token) {
		Some(modifier) => Token::Modifier(modifier),
		None => Token::Key(token),
	}
}

/// Parses a descriptor into a [`Combination`].
///
/// Accepts strings like `"Ctrl+K"`, `"shift+ctrl+k"` or `"CmdOrCtrl+Shift+P"`;
/// never fails.
///
/// # Examples
///
/// ```
/// use keybind_parser::parse;
/// use keybind_primitives::{Modifiers, Platform};
///
/// let combo = parse("Shift+CmdOrCtrl+K", Platform::Mac);
/// assert_eq!(combo.modifiers, Modifiers::META | Modifiers::SHIFT);
/// assert_eq!(combo.to_string(), "meta+shift+k");
/// ```
pub fn parse(descriptor: &str, platform: Platform) -> Combination {
	let lower = descriptor.to_lowercase();
	let mut parser = Parser::new(&lower);
	let mut combination = Combination::default();

	while let Some(token) = parser.next_token() {
		match classify(token, platform) {
			Token::Modifier(modifier) => combination.modifiers |= modifier,
			Token::Key(key) => combination.keys.push(canonical_key(key)),
		}
	}

	combination
}

/// Normalizes a descriptor into its canonical combination identifier.
///
/// Pure and deterministic for a fixed platform: two descriptors naming the
/// same modifiers (in any order and spelling) and the same key normalize to
/// the same identifier.
pub fn normalize(descriptor: &str, platform: Platform) -> String {
	parse(descriptor, platform).identifier()
}
