//! Conversion from crossterm key events.

use crossterm::event::{KeyCode, KeyModifiers, MediaKeyCode, ModifierKeyCode};

use super::{KeyEvent, Modifiers};

impl From<&crossterm::event::KeyEvent> for KeyEvent {
	fn from(event: &crossterm::event::KeyEvent) -> Self {
		let mut modifiers = modifiers_from_crossterm(event.modifiers);
		if event.code == KeyCode::BackTab {
			modifiers |= Modifiers::SHIFT;
		}
		Self::with_modifiers(key_name(event.code), modifiers)
	}
}

/// Maps crossterm modifier flags; Super and Meta both become Meta.
fn modifiers_from_crossterm(mods: KeyModifiers) -> Modifiers {
	let mut result = Modifiers::NONE;
	if mods.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
		result |= Modifiers::META;
	}
	if mods.contains(KeyModifiers::CONTROL) {
		result |= Modifiers::CTRL;
	}
	if mods.contains(KeyModifiers::ALT) {
		result |= Modifiers::ALT;
	}
	if mods.contains(KeyModifiers::SHIFT) {
		result |= Modifiers::SHIFT;
	}
	result
}

/// DOM-style key name for a crossterm key code.
fn key_name(code: KeyCode) -> String {
	let name = match code {
		KeyCode::Char(c) => return c.to_string(),
		KeyCode::F(n) => return format!("F{n}"),
		KeyCode::Backspace => "Backspace",
		KeyCode::Enter => "Enter",
		KeyCode::Left => "ArrowLeft",
		KeyCode::Right => "ArrowRight",
		KeyCode::Up => "ArrowUp",
		KeyCode::Down => "ArrowDown",
		KeyCode::Home => "Home",
		KeyCode::End => "End",
		KeyCode::PageUp => "PageUp",
		KeyCode::PageDown => "PageDown",
		KeyCode::Tab | KeyCode::BackTab => "Tab",
		KeyCode::Delete => "Delete",
		KeyCode::Insert => "Insert",
		KeyCode::Esc => "Escape",
		KeyCode::CapsLock => "CapsLock",
		KeyCode::ScrollLock => "ScrollLock",
		KeyCode::NumLock => "NumLock",
		KeyCode::PrintScreen => "PrintScreen",
		KeyCode::Pause => "Pause",
		KeyCode::Menu => "ContextMenu",
		KeyCode::KeypadBegin => "Clear",
		KeyCode::Media(media) => media_key_name(media),
		KeyCode::Modifier(modifier) => modifier_key_name(modifier),
		_ => "Unidentified",
	};
	name.to_string()
}

fn media_key_name(code: MediaKeyCode) -> &'static str {
	match code {
		MediaKeyCode::Play => "MediaPlay",
		MediaKeyCode::Pause => "MediaPause",
		MediaKeyCode::PlayPause => "MediaPlayPause",
		MediaKeyCode::Reverse => "MediaReverse",
		MediaKeyCode::Stop => "MediaStop",
		MediaKeyCode::FastForward => "MediaFastForward",
		MediaKeyCode::Rewind => "MediaRewind",
		MediaKeyCode::TrackNext => "MediaTrackNext",
		MediaKeyCode::TrackPrevious => "MediaTrackPrevious",
		MediaKeyCode::Record => "MediaRecord",
		MediaKeyCode::LowerVolume => "AudioVolumeDown",
		MediaKeyCode::RaiseVolume => "AudioVolumeUp",
		MediaKeyCode::MuteVolume => "AudioVolumeMute",
	}
}

fn modifier_key_name(code: ModifierKeyCode) -> &'static str {
	match code {
		ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
		ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
		ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
		ModifierKeyCode::IsoLevel3Shift => "AltGraph",
		_ => "Meta",
	}
}
