//! `doorman-auth` — pure authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows how
//! to hash and verify passwords and how to mint and verify bearer tokens,
//! nothing else.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use token::{Claims, TokenError, TokenSigner};
