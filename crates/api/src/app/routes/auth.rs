//! Credential authentication: verify a password, mint a bearer token.

use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::app::{dto, errors::ApiError, services::AppServices};

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> Result<Json<dto::LoginResponse>, ApiError> {
    // The identifier arrives in the `username` field but is matched against
    // the stored email attribute. Historical wire contract; see DESIGN.md.
    let user = services
        .store()
        .find_by_email(&body.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    // Same error as the lookup miss above, so a caller cannot tell which
    // factor failed.
    if !doorman_auth::verify_password(&body.password, &user.password)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = services.tokens().issue(user.id, user.admin)?;

    Ok(Json(dto::LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: user.summary(),
    }))
}
