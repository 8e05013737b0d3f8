//! Tests for the clipboard copy control
//!
//! The control is timer-based: activation with a value writes once and
//! disables the control until the copied flag reverts. Activation with
//! no value is a complete no-op. The actual clipboard write is an
//! external command; these tests cover the decision layer that returns
//! what (if anything) should be written.

use mediatui::logic::ui::{should_reset_copied, COPIED_LIFETIME_MS};
use mediatui::model::CopyControl;

#[test]
fn test_activation_without_value_is_a_noop() {
    let mut copy = CopyControl::default();
    assert_eq!(copy.activate(None), None);
    assert!(!copy.is_copied());

    // Still enabled: a later activation with a value fires normally
    assert!(copy.activate(Some("asset-1")).is_some());
}

#[test]
fn test_activation_writes_exactly_the_given_value() {
    let mut copy = CopyControl::default();
    assert_eq!(
        copy.activate(Some("events/2024/gala/stage-01")),
        Some("events/2024/gala/stage-01".to_string())
    );
    assert!(copy.is_copied());
}

#[test]
fn test_no_duplicate_write_while_copied() {
    let mut copy = CopyControl::default();
    assert!(copy.activate(Some("first")).is_some());

    // Rapid re-activation before the timer elapses: disabled, no write
    assert_eq!(copy.activate(Some("second")), None);
    assert_eq!(copy.activate(Some("third")), None);
    assert!(copy.is_copied());
}

#[test]
fn test_reset_reverts_and_reenables() {
    let mut copy = CopyControl::default();
    assert!(copy.activate(Some("a")).is_some());

    copy.reset();
    assert!(!copy.is_copied());
    assert_eq!(copy.activate(Some("b")), Some("b".to_string()));
}

#[test]
fn test_copied_flag_lifetime_boundary() {
    // The render loop polls this with the flag's elapsed time
    assert!(!should_reset_copied(COPIED_LIFETIME_MS - 1));
    assert!(should_reset_copied(COPIED_LIFETIME_MS));
}

#[test]
fn test_fresh_flag_is_not_reset() {
    let mut copy = CopyControl::default();
    copy.activate(Some("x"));
    // Immediately after activation the timer has not elapsed
    assert!(!copy.should_reset());
}
