use std::sync::Arc;

use doorman_auth::TokenSigner;
use doorman_infra::{InMemoryUserStore, UserStore};

/// Service wiring shared by all handlers: the user store and the token
/// signer. Both are read-only after startup.
pub struct AppServices {
    store: Arc<dyn UserStore>,
    tokens: TokenSigner,
}

impl AppServices {
    /// Default wiring: in-memory store (dev/test).
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_store(Arc::new(InMemoryUserStore::new()), jwt_secret)
    }

    /// Wire an externally built store (used by tests to pre-seed accounts,
    /// and by deployments that bring their own store adapter).
    pub fn with_store(store: Arc<dyn UserStore>, jwt_secret: &[u8]) -> Self {
        Self {
            store,
            tokens: TokenSigner::new(jwt_secret),
        }
    }

    pub fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    pub fn tokens(&self) -> &TokenSigner {
        &self.tokens
    }
}
