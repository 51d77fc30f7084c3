//! Account management handlers.
//!
//! Self-service mutations (`PUT`/`DELETE /users`) take their target from the
//! authenticated context, never from the request. Admin mutations
//! (`PUT`/`DELETE /users/:id`) take an arbitrary target from the path and
//! check the admin flag before touching the store.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use doorman_core::{User, UserId, UserSummary};

use crate::app::{dto, errors::ApiError, services::AppServices, validate};
use crate::context::CurrentUser;

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = services.store().list().await?;
    Ok(Json(users.iter().map(User::summary).collect()))
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<UserSummary>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = services.store().get(id).await?.ok_or_else(user_not_found)?;
    Ok(Json(user.summary()))
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateUserRequest>,
) -> Result<(StatusCode, Json<dto::UserMessageResponse>), ApiError> {
    validate::validate_create(&body)?;

    let user = User {
        id: UserId::new(),
        username: body.username,
        email: body.email,
        password: doorman_auth::hash_password(&body.password)?,
        admin: false,
    };
    let summary = user.summary();

    services.store().insert(user).await?;

    Ok((
        StatusCode::CREATED,
        Json(dto::UserMessageResponse {
            message: "User created".to_string(),
            user: summary,
        }),
    ))
}

pub async fn update_self(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<dto::UpdateUserRequest>,
) -> Result<Json<dto::UserMessageResponse>, ApiError> {
    apply_update(&services, current.id(), body).await.map(Json)
}

pub async fn delete_self(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<dto::UserMessageResponse>, ApiError> {
    let deleted = services.store().delete(current.id()).await?;

    Ok(Json(dto::UserMessageResponse {
        message: "User deleted".to_string(),
        user: deleted.summary(),
    }))
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateUserRequest>,
) -> Result<Json<dto::UserMessageResponse>, ApiError> {
    require_admin(&current)?;
    let id = parse_user_id(&id)?;
    apply_update(&services, id, body).await.map(Json)
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<dto::UserMessageResponse>, ApiError> {
    require_admin(&current)?;
    let id = parse_user_id(&id)?;

    let deleted = services.store().delete(id).await?;

    Ok(Json(dto::UserMessageResponse {
        message: "User deleted".to_string(),
        user: deleted.summary(),
    }))
}

/// Admin gate for the arbitrary-target mutations. Must run before any store
/// access so a denied caller cannot cause side effects.
fn require_admin(current: &CurrentUser) -> Result<(), ApiError> {
    if current.is_admin() {
        Ok(())
    } else {
        Err(ApiError::Unauthorized("Admin privileges required".to_string()))
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation("Invalid user id".to_string()))
}

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".to_string())
}

async fn apply_update(
    services: &AppServices,
    target: UserId,
    body: dto::UpdateUserRequest,
) -> Result<dto::UserMessageResponse, ApiError> {
    validate::validate_update(&body)?;

    let mut record = services
        .store()
        .get(target)
        .await?
        .ok_or_else(user_not_found)?;

    if let Some(username) = body.username {
        record.username = username;
    }
    if let Some(email) = body.email {
        record.email = email;
    }
    // An omitted password leaves the stored hash untouched.
    if let Some(password) = body.password {
        record.password = doorman_auth::hash_password(&password)?;
    }

    let summary = record.summary();
    services.store().update(record).await?;

    Ok(dto::UserMessageResponse {
        message: "User updated".to_string(),
        user: summary,
    })
}
