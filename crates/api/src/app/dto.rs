use serde::{Deserialize, Serialize};

use doorman_core::UserSummary;

// -------------------------
// Request DTOs
// -------------------------

/// Login payload.
///
/// The `username` field is the historical wire name; it is matched against
/// the stored **email** attribute, not the username. Renaming it would break
/// existing clients.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial update; omitted fields keep their stored values. An omitted
/// password in particular must never touch the stored hash.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

/// Standard mutation response: a message plus the affected record's summary.
#[derive(Debug, Serialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserSummary,
}
