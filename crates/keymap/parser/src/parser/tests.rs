use keybind_primitives::{KeyEvent, Modifiers, Platform};
use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("Ctrl+K", "ctrl+k")]
#[case("ctrl+k", "ctrl+k")]
#[case("Shift+Ctrl+K", "ctrl+shift+k")]
#[case("shift + alt + meta + ctrl + x", "meta+ctrl+alt+shift+x")]
#[case("Control+Option+Enter", "ctrl+alt+enter")]
#[case("Cmd+Shift+P", "meta+shift+p")]
#[case("Esc", "escape")]
#[case("Ctrl+Space", "ctrl+space")]
#[case("F5", "f5")]
fn normalizes_descriptors(#[case] descriptor: &str, #[case] expected: &str) {
	assert_eq!(normalize(descriptor, Platform::Other), expected);
}

#[rstest]
#[case(Platform::Mac, "meta+k")]
#[case(Platform::Other, "ctrl+k")]
fn resolves_placeholder_per_platform(#[case] platform: Platform, #[case] expected: &str) {
	assert_eq!(normalize("CmdOrCtrl+K", platform), expected);
	assert_eq!(normalize("commandorcontrol+k", platform), expected);
}

#[test]
fn placeholder_merges_with_explicit_modifier() {
	assert_eq!(normalize("CmdOrCtrl+Ctrl+K", Platform::Other), "ctrl+k");
	assert_eq!(normalize("CmdOrCtrl+Ctrl+K", Platform::Mac), "meta+ctrl+k");
}

#[rstest]
#[case("Ctrl++", "ctrl++")]
#[case("+", "+")]
#[case("ctrl + +", "ctrl++")]
#[case("Ctrl+", "ctrl")]
#[case("Ctrl+++", "ctrl++")]
fn literal_plus_key(#[case] descriptor: &str, #[case] expected: &str) {
	assert_eq!(normalize(descriptor, Platform::Other), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("++++")]
#[case("Ctrl+A+B")]
#[case("ctrl+ü")]
fn malformed_descriptors_never_fail(#[case] descriptor: &str) {
	let _ = parse(descriptor, Platform::Other);
}

#[rstest]
#[case("Ctrl+ ", "ctrl+space")]
#[case(" ", "space")]
#[case("shift+  ", "shift+space")]
fn trailing_blank_is_space(#[case] descriptor: &str, #[case] expected: &str) {
	assert_eq!(normalize(descriptor, Platform::Other), expected);
}

#[test]
fn blank_descriptor_matches_space_event() {
	let event = KeyEvent::with_modifiers(" ", Modifiers::CTRL);
	assert_eq!(Combination::from_event(&event), parse("Ctrl+ ", Platform::Other));
}

#[test]
fn empty_descriptor_is_empty_combination() {
	let combo = parse("", Platform::Other);
	assert!(combo.is_empty());
	assert_eq!(combo.identifier(), "");
}

#[test]
fn extra_key_tokens_are_kept_in_order() {
	assert_eq!(normalize("Ctrl+A+B", Platform::Other), "ctrl+a+b");
}

#[test]
fn event_combination_matches_descriptor() {
	let event = KeyEvent::new("K").with_shift().with_ctrl();
	assert_eq!(Combination::from_event(&event), parse("Shift+Ctrl+K", Platform::Other));
}

#[test]
fn modifier_only_event_has_no_key_token() {
	let event = KeyEvent::new("Shift").with_shift();
	assert_eq!(Combination::from_event(&event).identifier(), "shift");

	let event = KeyEvent::new("Control").with_ctrl().with_shift();
	assert_eq!(Combination::from_event(&event).identifier(), "ctrl+shift");
}

#[test]
fn event_keys_are_canonicalized() {
	let event = KeyEvent::with_modifiers(" ", Modifiers::CTRL);
	assert_eq!(Combination::from_event(&event).identifier(), "ctrl+space");
}

fn modifier_names() -> impl Strategy<Value = Vec<&'static str>> {
	prop::sample::subsequence(vec!["Meta", "Ctrl", "Alt", "Shift", "CmdOrCtrl"], 0..=5)
		.prop_shuffle()
}

proptest! {
	#[test]
	fn modifier_order_does_not_matter(
		mods in modifier_names(),
		key in "[a-z0-9]",
		mac in any::<bool>(),
	) {
		let platform = Platform::from(mac);
		let mut forward: Vec<&str> = mods.clone();
		forward.push(&key);
		let mut reversed: Vec<&str> = mods.iter().rev().copied().collect();
		reversed.push(&key);

		prop_assert_eq!(
			normalize(&forward.join("+"), platform),
			normalize(&reversed.join("+"), platform)
		);
	}

	#[test]
	fn normalize_is_idempotent(descriptor in "[a-zA-Z+ ]{0,16}", mac in any::<bool>()) {
		let platform = Platform::from(mac);
		let once = normalize(&descriptor, platform);
		prop_assert_eq!(normalize(&once, platform), once);
	}
}
