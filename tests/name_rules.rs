//! Integration tests for the name-validation rules.

use smol_forms::{check_name, check_name_with, NameError, NameStatus};

// =============================================================================
// RULE ORDER
// =============================================================================

#[test]
fn hex_prefix_rejected_regardless_of_anything_else() {
    for (input, touched) in [
        ("0x", false),
        ("0xdeadbeef", true),
        ("0x.with.dots", false),
        (&format!("0x{}", "f".repeat(60)) as &str, true),
    ] {
        let check = check_name(input, touched);
        assert_eq!(check.status, NameStatus::Invalid, "input: {input:?}");
        assert_eq!(check.error, Some(NameError::HexPrefix), "input: {input:?}");
    }
}

#[test]
fn too_long_rejected_before_dot_check() {
    let input = "a".repeat(20) + ".ab";
    let check = check_name(&input, false);
    assert_eq!(check.error, Some(NameError::TooLong));
}

#[test]
fn dot_rejected_for_short_names() {
    let check = check_name("vitalik.eth", true);
    assert_eq!(check.status, NameStatus::Invalid);
    assert_eq!(check.error, Some(NameError::ContainsDot));
    assert_eq!(check.message().as_deref(), Some("The name must not contain `.`"));
}

// =============================================================================
// EMPTY FIELD / TOUCHED GATE
// =============================================================================

#[test]
fn empty_touched_is_an_error() {
    let check = check_name("", true);
    assert_eq!(check.status, NameStatus::Invalid);
    assert_eq!(check.error, Some(NameError::Empty));
    assert_eq!(check.message().as_deref(), Some("The name cannot be empty"));
}

#[test]
fn empty_untouched_is_undetermined() {
    let check = check_name("", false);
    assert_eq!(check.status, NameStatus::Undetermined);
    assert_eq!(check.error, None);
    assert_eq!(check.message(), None);
}

// =============================================================================
// HAPPY PATH + SINK
// =============================================================================

#[test]
fn plain_name_is_valid() {
    let check = check_name("alice", false);
    assert!(check.is_valid());
    assert_eq!(check.error, None);
}

#[test]
fn sink_fires_once_with_each_status() {
    let mut statuses = Vec::new();
    check_name_with("alice", false, |s| statuses.push(s));
    check_name_with("", false, |s| statuses.push(s));
    check_name_with("0xabc", false, |s| statuses.push(s));

    assert_eq!(
        statuses,
        [
            NameStatus::Valid,
            NameStatus::Undetermined,
            NameStatus::Invalid,
        ]
    );
}

#[test]
fn validation_is_pure() {
    // Same inputs, same outcome, no hidden state between calls.
    let first = check_name("bob", true);
    let second = check_name("bob", true);
    assert_eq!(first, second);
}
