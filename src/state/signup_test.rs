use super::*;

use crate::net::error::ApiError;

fn complete_draft() -> SignupDraft {
    SignupDraft {
        profile: Some(AccountProfile::Influencer),
        username: "bob_criador".to_owned(),
        first_name: "Bob".to_owned(),
        last_name: "Silva".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "secret123".to_owned(),
    }
}

// =============================================================
// step ordering
// =============================================================

#[test]
fn steps_are_numbered_in_order() {
    let numbers: Vec<u8> = SignupStep::ALL.iter().map(|step| step.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn next_and_previous_walk_the_wizard() {
    assert_eq!(SignupStep::AccountType.next(), Some(SignupStep::Username));
    assert_eq!(SignupStep::Password.next(), None);
    assert_eq!(SignupStep::AccountType.previous(), None);
    assert_eq!(SignupStep::Password.previous(), Some(SignupStep::Contact));
    assert!(SignupStep::Password.is_last());
}

// =============================================================
// step validation
// =============================================================

#[test]
fn step_one_requires_an_account_type() {
    let draft = SignupDraft::default();
    let errors = validate_step(SignupStep::AccountType, &draft, "");

    assert_eq!(errors.account_type.as_deref(), Some(MSG_ACCOUNT_TYPE_REQUIRED));
    assert!(!errors.is_empty());
}

#[test]
fn step_one_passes_with_a_profile_chosen() {
    let errors = validate_step(SignupStep::AccountType, &complete_draft(), "");
    assert!(errors.is_empty());
}

#[test]
fn step_two_requires_a_username() {
    let draft = SignupDraft {
        username: "   ".to_owned(),
        ..complete_draft()
    };
    let errors = validate_step(SignupStep::Username, &draft, "");

    assert_eq!(errors.username.as_deref(), Some(MSG_USERNAME_REQUIRED));
}

#[test]
fn step_two_enforces_the_minimum_username_length() {
    let draft = SignupDraft {
        username: "bob".to_owned(),
        ..complete_draft()
    };
    let errors = validate_step(SignupStep::Username, &draft, "");

    assert_eq!(errors.username.as_deref(), Some(MSG_USERNAME_TOO_SHORT));
}

#[test]
fn step_three_requires_names_and_email() {
    let draft = SignupDraft {
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        ..complete_draft()
    };
    let errors = validate_step(SignupStep::Contact, &draft, "");

    assert_eq!(errors.first_name.as_deref(), Some(MSG_FIRST_NAME_REQUIRED));
    assert_eq!(errors.last_name.as_deref(), Some(MSG_LAST_NAME_REQUIRED));
    assert_eq!(errors.email.as_deref(), Some(MSG_EMAIL_REQUIRED));
}

#[test]
fn step_three_rejects_a_malformed_email() {
    let draft = SignupDraft {
        email: "bob@invalid".to_owned(),
        ..complete_draft()
    };
    let errors = validate_step(SignupStep::Contact, &draft, "");

    assert_eq!(errors.email.as_deref(), Some(MSG_EMAIL_INVALID));
}

#[test]
fn step_four_requires_a_password_of_minimum_length() {
    let draft = SignupDraft {
        password: "curta".to_owned(),
        ..complete_draft()
    };
    let errors = validate_step(SignupStep::Password, &draft, "curta");

    assert_eq!(errors.password.as_deref(), Some(MSG_PASSWORD_TOO_SHORT));
    assert!(errors.confirm_password.is_none());
}

#[test]
fn step_four_requires_matching_confirmation() {
    let errors = validate_step(SignupStep::Password, &complete_draft(), "different");
    assert_eq!(errors.confirm_password.as_deref(), Some(MSG_PASSWORD_MISMATCH));
}

#[test]
fn complete_draft_passes_every_step() {
    let draft = complete_draft();
    for step in SignupStep::ALL {
        let errors = validate_step(step, &draft, "secret123");
        assert!(errors.is_empty(), "step {:?} should validate", step);
    }
}

// =============================================================
// availability outcomes
// =============================================================

#[test]
fn taken_username_blocks_advancement() {
    let mut errors = SignupErrors::default();
    let may_advance = apply_username_check(&mut errors, &Ok(UserCheck { exists: true }));

    assert!(!may_advance);
    assert_eq!(errors.username.as_deref(), Some(MSG_USERNAME_TAKEN));
}

#[test]
fn free_username_advances() {
    let mut errors = SignupErrors::default();
    let may_advance = apply_username_check(&mut errors, &Ok(UserCheck { exists: false }));

    assert!(may_advance);
    assert!(errors.is_empty());
}

#[test]
fn failed_username_probe_counts_as_unverified() {
    let mut errors = SignupErrors::default();
    let may_advance =
        apply_username_check(&mut errors, &Err(ApiError::transport("refused")));

    assert!(!may_advance);
    assert_eq!(errors.username.as_deref(), Some(MSG_USERNAME_CHECK_FAILED));
}

#[test]
fn taken_email_blocks_advancement() {
    let mut errors = SignupErrors::default();
    let may_advance = apply_email_check(&mut errors, &Ok(UserCheck { exists: true }));

    assert!(!may_advance);
    assert_eq!(errors.email.as_deref(), Some(MSG_EMAIL_TAKEN));
}

#[test]
fn failed_email_probe_counts_as_unverified() {
    let mut errors = SignupErrors::default();
    let may_advance = apply_email_check(&mut errors, &Err(ApiError::transport("refused")));

    assert!(!may_advance);
    assert_eq!(errors.email.as_deref(), Some(MSG_EMAIL_CHECK_FAILED));
}

// =============================================================
// draft payload
// =============================================================

#[test]
fn draft_without_a_profile_has_no_payload() {
    let draft = SignupDraft {
        profile: None,
        ..complete_draft()
    };
    assert!(draft.to_signup_data().is_none());
}

#[test]
fn draft_payload_trims_text_fields() {
    let draft = SignupDraft {
        username: "  bob_criador  ".to_owned(),
        email: " bob@example.com ".to_owned(),
        ..complete_draft()
    };
    let data = draft.to_signup_data().expect("payload");

    assert_eq!(data.username, "bob_criador");
    assert_eq!(data.email, "bob@example.com");
    assert_eq!(data.profile, AccountProfile::Influencer);
}

// =============================================================
// probe sequencing
// =============================================================

#[test]
fn only_the_latest_issued_tag_is_current() {
    let checks = CheckSequence::new();

    let first = checks.issue();
    assert!(checks.is_current(first));

    let second = checks.issue();
    assert!(!checks.is_current(first));
    assert!(checks.is_current(second));
}

#[test]
fn stale_probe_results_are_discarded() {
    let checks = CheckSequence::new();
    let stale = checks.issue();
    let fresh = checks.issue();

    // Simulate out-of-order completion: the stale probe resolves last but
    // must not be applied.
    assert!(checks.is_current(fresh));
    assert!(!checks.is_current(stale));
}
