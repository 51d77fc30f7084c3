//! Centralized error responses.
//!
//! Every domain failure is a typed [`ApiError`] carrying a message and a
//! status code; handlers bubble them up with `?` and the single
//! `IntoResponse` impl renders them uniformly.
//!
//! Two status choices are wire-compatibility quirks kept on purpose:
//! `InvalidCredentials` and `DuplicateEntry` are rendered with a 200 status
//! so that neither login probing nor registration probing can distinguish
//! outcomes by status code.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

use doorman_auth::{PasswordError, TokenError};
use doorman_infra::StoreError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Login failed. Deliberately identical for "no such account" and
    /// "wrong password".
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing/invalid token, or insufficient privilege.
    #[error("{0}")]
    Unauthorized(String),

    /// Token verified but the account behind it no longer exists.
    #[error("Token not valid")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    /// Input shape violation; the message is the joined set of violated
    /// rule messages.
    #[error("{0}")]
    Validation(String),

    /// Store-level uniqueness violation.
    #[error("Duplicate entry")]
    DuplicateEntry,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::DuplicateEntry => StatusCode::OK,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_error",
            Self::DuplicateEntry => "duplicate_entry",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(%detail, "request failed with internal error");
                if production() {
                    "Internal server error".to_string()
                } else {
                    format!("Internal server error: {detail}")
                }
            }
            other => other.to_string(),
        };

        json_error(self.status(), self.code(), message)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::DuplicateEntry,
            StoreError::NotFound => Self::NotFound("User not found".to_string()),
            StoreError::Backend(msg) => Self::Internal(msg),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => Self::Unauthorized("Token not valid".to_string()),
            TokenError::Signing(msg) => Self::Internal(msg),
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Stack/detail suppression follows the deployment environment.
fn production() -> bool {
    std::env::var("APP_ENV").map(|v| v == "production").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_sensitive_errors_share_a_success_status() {
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::OK);
        assert_eq!(ApiError::DuplicateEntry.status(), StatusCode::OK);
    }

    #[test]
    fn privilege_errors_map_to_distinct_statuses() {
        assert_eq!(
            ApiError::Unauthorized("Token not provided".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn store_errors_convert_to_api_errors() {
        assert_eq!(ApiError::from(StoreError::Duplicate), ApiError::DuplicateEntry);
        assert_eq!(
            ApiError::from(StoreError::NotFound),
            ApiError::NotFound("User not found".to_string())
        );
        assert!(matches!(
            ApiError::from(StoreError::Backend("down".to_string())),
            ApiError::Internal(_)
        ));
    }
}
