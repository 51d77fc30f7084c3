//! The user account record and its client-facing projection.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A stored user account.
///
/// `password` always holds a one-way hash (PHC string), never plaintext.
/// This type is the store-side shape; it must never be serialized to
/// clients directly — use [`UserSummary`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub admin: bool,
}

impl User {
    /// Client-facing projection: id, username and email only.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// The only user shape ever returned to clients.
///
/// Deliberately has no password or admin fields, so a leak of either
/// through a response body is a type error rather than a review item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_drops_password_and_admin() {
        let user = User {
            id: UserId::new(),
            username: "alice01".to_string(),
            email: "a@x.com".to_string(),
            password: "$argon2id$fake".to_string(),
            admin: true,
        };

        let json = serde_json::to_value(user.summary()).unwrap();
        assert_eq!(json["username"], "alice01");
        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("password").is_none());
        assert!(json.get("admin").is_none());
    }
}
