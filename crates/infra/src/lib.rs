//! Infrastructure layer: the document-store contract and its adapters.

pub mod user_store;

pub use user_store::{InMemoryUserStore, StoreError, UserStore};
