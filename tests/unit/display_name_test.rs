//! Unit tests for display name derivation.

use logslice::auth::{display_name, Identity, DEFAULT_DISPLAY_NAME};
use uuid::Uuid;

#[test]
fn test_local_part_before_at() {
    assert_eq!(display_name(&Identity::new("ada@example.com")), "ada");
    assert_eq!(display_name(&Identity::new("log.jack@forest.io")), "log.jack");
}

#[test]
fn test_account_without_at_is_used_whole() {
    assert_eq!(display_name(&Identity::new("woodsman")), "woodsman");
}

#[test]
fn test_fallback_for_missing_account() {
    let identity = Identity {
        user_id: Uuid::new_v4(),
        account: None,
    };
    assert_eq!(display_name(&identity), DEFAULT_DISPLAY_NAME);
}

#[test]
fn test_fallback_for_empty_local_part() {
    assert_eq!(
        display_name(&Identity::new("@example.com")),
        DEFAULT_DISPLAY_NAME
    );
    assert_eq!(display_name(&Identity::new("")), DEFAULT_DISPLAY_NAME);
}

#[test]
fn test_independent_of_field_shape() {
    // Anything before the first separator is taken verbatim; no email
    // validation is applied.
    assert_eq!(display_name(&Identity::new("not an email")), "not an email");
}
