//! Authorization gate for protected routes.
//!
//! Extracts and verifies the bearer token, then re-fetches the account from
//! the store before letting the request through. The re-fetch is what makes
//! deleted accounts lose access immediately even though tokens never expire.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use doorman_auth::TokenSigner;
use doorman_infra::UserStore;

use crate::app::errors::ApiError;
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: TokenSigner,
    pub store: Arc<dyn UserStore>,
}

pub async fn authorize(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;

    let claims = state
        .tokens
        .verify(token)
        .map_err(|_| ApiError::Unauthorized("Token not valid".to_string()))?;

    // A valid signature is not enough: the account must still exist. This is
    // the only revocation mechanism in the system.
    let user = state
        .store
        .get(claims.sub)
        .await?
        .ok_or(ApiError::Forbidden)?;

    req.extensions_mut().insert(CurrentUser::new(
        user.id,
        user.username,
        user.email,
        user.admin,
    ));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let missing = || ApiError::Unauthorized("Token not provided".to_string());

    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(missing)?;

    let header = header.to_str().map_err(|_| missing())?;

    let token = header.strip_prefix("Bearer ").ok_or_else(missing)?.trim();
    if token.is_empty() {
        return Err(missing());
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn extract_bearer_accepts_well_formed_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());

        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn extract_bearer_rejects_missing_and_malformed_headers() {
        assert!(extract_bearer(&HeaderMap::new()).is_err());

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic abc".parse().unwrap());
        assert!(extract_bearer(&headers).is_err());

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer ".parse().unwrap());
        assert!(extract_bearer(&headers).is_err());
    }
}
