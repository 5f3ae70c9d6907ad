use super::*;

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("bob.silva+tag@example.com.br"));
}

#[test]
fn trims_surrounding_whitespace() {
    assert!(is_valid_email("  a@b.co  "));
}

#[test]
fn rejects_missing_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("semarroba.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("a@"));
    assert!(!is_valid_email("a@semponto"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@host."));
}

#[test]
fn rejects_inner_whitespace_and_double_at() {
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email("a@b@example.com"));
}
