//! `doorman-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use user::{User, UserSummary};
