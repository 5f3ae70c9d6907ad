//! Multi-step signup wizard state.
//!
//! Four steps: account type, username, contact details, password. Each step
//! gates advancement on its own validation, and steps 2 and 3 additionally
//! require an availability probe that reported the candidate as free. Probe
//! responses carry a sequence tag so a stale response can never overwrite
//! the outcome of a newer probe.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{AccountProfile, SignupData, UserCheck};
use crate::util::validate::is_valid_email;

pub const MIN_USERNAME_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 8;

pub const MSG_ACCOUNT_TYPE_REQUIRED: &str = "Selecione um tipo de conta";
pub const MSG_USERNAME_REQUIRED: &str = "Nome de usuário é obrigatório";
pub const MSG_USERNAME_TOO_SHORT: &str = "Nome de usuário deve ter no mínimo 4 caracteres";
pub const MSG_USERNAME_TAKEN: &str = "Nome de usuário já está em uso";
pub const MSG_USERNAME_CHECK_FAILED: &str = "Erro ao verificar disponibilidade do usuário";
pub const MSG_FIRST_NAME_REQUIRED: &str = "Primeiro nome é obrigatório";
pub const MSG_LAST_NAME_REQUIRED: &str = "Sobrenome é obrigatório";
pub const MSG_EMAIL_REQUIRED: &str = "E-mail é obrigatório";
pub const MSG_EMAIL_INVALID: &str = "E-mail inválido";
pub const MSG_EMAIL_TAKEN: &str = "E-mail já está em uso";
pub const MSG_EMAIL_CHECK_FAILED: &str = "Erro ao verificar disponibilidade do e-mail";
pub const MSG_PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Senha deve ter no mínimo 8 caracteres";
pub const MSG_PASSWORD_MISMATCH: &str = "Senhas não coincidem";

/// Wizard position, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupStep {
    AccountType,
    Username,
    Contact,
    Password,
}

impl SignupStep {
    pub const ALL: [Self; 4] = [Self::AccountType, Self::Username, Self::Contact, Self::Password];

    /// 1-based position for the step indicator.
    pub fn number(self) -> u8 {
        match self {
            Self::AccountType => 1,
            Self::Username => 2,
            Self::Contact => 3,
            Self::Password => 4,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::AccountType => Some(Self::Username),
            Self::Username => Some(Self::Contact),
            Self::Contact => Some(Self::Password),
            Self::Password => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::AccountType => None,
            Self::Username => Some(Self::AccountType),
            Self::Contact => Some(Self::Username),
            Self::Password => Some(Self::Contact),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// Accumulated wizard input. Lives only in the page's form state and is
/// discarded on success or abandonment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub profile: Option<AccountProfile>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignupDraft {
    /// The signup payload, available once step 1 chose a profile.
    pub fn to_signup_data(&self) -> Option<SignupData> {
        Some(SignupData {
            profile: self.profile?,
            username: self.username.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Field errors for the current step plus a general failure banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub account_type: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub general: Option<String>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Local validation for one step. Availability probes are issued separately
/// by the page; their outcome lands in the same error slots via
/// [`apply_username_check`] and [`apply_email_check`].
pub fn validate_step(
    step: SignupStep,
    draft: &SignupDraft,
    confirm_password: &str,
) -> SignupErrors {
    let mut errors = SignupErrors::default();
    match step {
        SignupStep::AccountType => {
            if draft.profile.is_none() {
                errors.account_type = Some(MSG_ACCOUNT_TYPE_REQUIRED.to_owned());
            }
        }
        SignupStep::Username => {
            let username = draft.username.trim();
            if username.is_empty() {
                errors.username = Some(MSG_USERNAME_REQUIRED.to_owned());
            } else if username.chars().count() < MIN_USERNAME_LEN {
                errors.username = Some(MSG_USERNAME_TOO_SHORT.to_owned());
            }
        }
        SignupStep::Contact => {
            if draft.first_name.trim().is_empty() {
                errors.first_name = Some(MSG_FIRST_NAME_REQUIRED.to_owned());
            }
            if draft.last_name.trim().is_empty() {
                errors.last_name = Some(MSG_LAST_NAME_REQUIRED.to_owned());
            }
            let email = draft.email.trim();
            if email.is_empty() {
                errors.email = Some(MSG_EMAIL_REQUIRED.to_owned());
            } else if !is_valid_email(email) {
                errors.email = Some(MSG_EMAIL_INVALID.to_owned());
            }
        }
        SignupStep::Password => {
            if draft.password.is_empty() {
                errors.password = Some(MSG_PASSWORD_REQUIRED.to_owned());
            } else if draft.password.chars().count() < MIN_PASSWORD_LEN {
                errors.password = Some(MSG_PASSWORD_TOO_SHORT.to_owned());
            }
            if draft.password != confirm_password {
                errors.confirm_password = Some(MSG_PASSWORD_MISMATCH.to_owned());
            }
        }
    }
    errors
}

/// Apply a username availability outcome. Returns whether the wizard may
/// advance: only a probe that answered `exists: false`. An error means
/// "could not verify" and blocks advancement.
pub fn apply_username_check(
    errors: &mut SignupErrors,
    result: &Result<UserCheck, ApiError>,
) -> bool {
    match result {
        Ok(check) if check.exists => {
            errors.username = Some(MSG_USERNAME_TAKEN.to_owned());
            false
        }
        Ok(_) => true,
        Err(_) => {
            errors.username = Some(MSG_USERNAME_CHECK_FAILED.to_owned());
            false
        }
    }
}

/// E-mail counterpart of [`apply_username_check`].
pub fn apply_email_check(errors: &mut SignupErrors, result: &Result<UserCheck, ApiError>) -> bool {
    match result {
        Ok(check) if check.exists => {
            errors.email = Some(MSG_EMAIL_TAKEN.to_owned());
            false
        }
        Ok(_) => true,
        Err(_) => {
            errors.email = Some(MSG_EMAIL_CHECK_FAILED.to_owned());
            false
        }
    }
}

/// Monotonic tag for availability probes. A response is applied only while
/// its tag is still the latest issued, so out-of-order responses from
/// superseded probes are discarded.
#[derive(Clone, Copy, Debug)]
pub struct CheckSequence(StoredValue<u64>);

impl CheckSequence {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    /// Issue the next tag, superseding all previously issued ones.
    pub fn issue(&self) -> u64 {
        let next = self.0.get_value() + 1;
        self.0.set_value(next);
        next
    }

    pub fn is_current(&self, tag: u64) -> bool {
        self.0.get_value() == tag
    }
}

impl Default for CheckSequence {
    fn default() -> Self {
        Self::new()
    }
}
