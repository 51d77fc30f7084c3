//! CRUD contract for the user document store, plus the in-memory adapter.
//!
//! The engine behind the contract is external; this module only fixes the
//! operations the service relies on. Email uniqueness is the store's
//! responsibility and surfaces as [`StoreError::Duplicate`] rather than a
//! silent overwrite.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;

use doorman_core::{User, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A unique attribute (email) collided with an existing record.
    #[error("duplicate entry")]
    Duplicate,

    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,

    /// The store itself failed (connection, poisoned lock, ...).
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Document-store CRUD contract for user records.
///
/// Every operation touches exactly one record; there are no transactions
/// and no retries. Conflicting writes are serialized by the store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    /// Insert a new record. Fails with [`StoreError::Duplicate`] when the
    /// email is already taken.
    async fn insert(&self, user: User) -> Result<(), StoreError>;
    /// Replace an existing record. Email uniqueness is enforced against all
    /// other records. Fails with [`StoreError::NotFound`] for a missing id.
    async fn update(&self, user: User) -> Result<(), StoreError>;
    /// Delete a record, returning it. Deletion is immediate and permanent.
    async fn delete(&self, id: UserId) -> Result<User, StoreError>;
}

/// In-memory store for dev/test.
///
/// A single `RwLock` stands in for whatever write serialization the real
/// engine provides.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;

        if map.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate);
        }

        map.insert(user.id, user);
        Ok(())
    }

    async fn update(&self, user: User) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;

        if !map.contains_key(&user.id) {
            return Err(StoreError::NotFound);
        }
        if map.values().any(|u| u.id != user.id && u.email == user.email) {
            return Err(StoreError::Duplicate);
        }

        map.insert(user.id, user);
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<User, StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.remove(&id).ok_or(StoreError::NotFound)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Backend("user store lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(username: &str, email: &str) -> User {
        User {
            id: UserId::new(),
            username: username.to_string(),
            email: email.to_string(),
            password: "$argon2id$fake".to_string(),
            admin: false,
        }
    }

    #[tokio::test]
    async fn insert_get_list_round_trip() {
        let store = InMemoryUserStore::new();
        let user = test_user("alice01", "a@x.com");

        store.insert(user.clone()).await.unwrap();

        assert_eq!(store.get(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(store.find_by_email("a@x.com").await.unwrap(), Some(user));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let store = InMemoryUserStore::new();
        store.insert(test_user("alice01", "a@x.com")).await.unwrap();

        let err = store.insert(test_user("bob02", "a@x.com")).await.unwrap_err();
        assert_eq!(err, StoreError::Duplicate);

        // Original record untouched.
        let kept = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(kept.username, "alice01");
    }

    #[tokio::test]
    async fn update_rejects_email_taken_by_another_record() {
        let store = InMemoryUserStore::new();
        let alice = test_user("alice01", "a@x.com");
        let mut bob = test_user("bob02", "b@x.com");
        store.insert(alice).await.unwrap();
        store.insert(bob.clone()).await.unwrap();

        bob.email = "a@x.com".to_string();
        assert_eq!(store.update(bob).await.unwrap_err(), StoreError::Duplicate);
    }

    #[tokio::test]
    async fn update_allows_keeping_own_email() {
        let store = InMemoryUserStore::new();
        let mut alice = test_user("alice01", "a@x.com");
        store.insert(alice.clone()).await.unwrap();

        alice.username = "alice02".to_string();
        store.update(alice.clone()).await.unwrap();

        assert_eq!(store.get(alice.id).await.unwrap().unwrap().username, "alice02");
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let store = InMemoryUserStore::new();
        let err = store.update(test_user("ghost1", "g@x.com")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn delete_removes_and_returns_the_record() {
        let store = InMemoryUserStore::new();
        let user = test_user("alice01", "a@x.com");
        store.insert(user.clone()).await.unwrap();

        let deleted = store.delete(user.id).await.unwrap();
        assert_eq!(deleted, user);
        assert_eq!(store.get(user.id).await.unwrap(), None);
        assert_eq!(store.delete(user.id).await.unwrap_err(), StoreError::NotFound);
    }
}
