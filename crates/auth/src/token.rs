//! Bearer token issue/verify (HS256 JWT).
//!
//! Tokens carry the account identity and admin flag only. No expiry claim
//! is set and none is validated: a token stays valid until the signing
//! secret rotates. The only staleness check in the system is the per-request
//! account re-fetch done by the HTTP layer.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use doorman_core::UserId;

/// Payload embedded in a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account identity.
    pub sub: UserId,
    /// Admin privilege at issue time.
    pub admin: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token not valid")]
    Invalid,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies bearer tokens with a process-wide HS256 secret.
///
/// The secret is injected at construction; loading it (and failing fast
/// when it is absent) is the caller's responsibility.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Mint a token for an account.
    pub fn issue(&self, sub: UserId, admin: bool) -> Result<String, TokenError> {
        let claims = Claims { sub, admin };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token's signature and decode its claims.
    ///
    /// Any decode failure collapses to [`TokenError::Invalid`]; callers get
    /// no detail about what was wrong with the token.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No exp claim is issued, so none can be required.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

impl core::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Never expose key material through Debug output.
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_returns_original_claims() {
        let signer = TokenSigner::new(b"test-secret");
        let sub = UserId::new();

        let token = signer.issue(sub, true).unwrap();
        let claims = signer.verify(&token).unwrap();

        assert_eq!(claims.sub, sub);
        assert!(claims.admin);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let signer = TokenSigner::new(b"test-secret");
        let other = TokenSigner::new(b"other-secret");

        let token = signer.issue(UserId::new(), false).unwrap();
        assert_eq!(other.verify(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn verify_rejects_tampered_token() {
        let signer = TokenSigner::new(b"test-secret");
        let mut token = signer.issue(UserId::new(), false).unwrap();
        token.push('x');

        assert_eq!(signer.verify(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn verify_rejects_garbage() {
        let signer = TokenSigner::new(b"test-secret");
        assert_eq!(signer.verify("not.a.jwt").unwrap_err(), TokenError::Invalid);
    }
}
