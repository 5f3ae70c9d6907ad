//! Wire types shared with the backend API.

use serde::{Deserialize, Serialize};

/// Authenticated user profile, as returned by the login endpoint and cached
/// in the session store between visits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Login form payload. Transient; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Account profile chosen on the first signup step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountProfile {
    Influencer,
    Advertiser,
}

/// Account state decided by the backend on signup. The client stores it but
/// does not interpret it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Inactive,
}

/// Completed signup payload sent to `POST /user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub profile: AccountProfile,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Account summary returned by `POST /user`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub id: String,
    pub owner: bool,
    pub status: AccountStatus,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile: AccountProfile,
    pub username: String,
}

/// Availability probe result for a candidate username or e-mail.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct UserCheck {
    pub exists: bool,
}

/// Password reset completion payload. Transient; submitted once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Response to a password reset initiation.
#[derive(Clone, Debug, Deserialize)]
pub struct ResetOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to reset-token validation and reset completion. `email` lets the
/// caller attempt an automatic login afterwards.
#[derive(Clone, Debug, Deserialize)]
pub struct ResetCheck {
    pub success: bool,
    #[serde(default)]
    pub email: Option<String>,
}
