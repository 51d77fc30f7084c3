use doorman_core::UserId;

/// Authenticated context for a request.
///
/// Built by the authorization middleware from a verified token **plus a
/// fresh store lookup**, so it reflects the account as it exists right now,
/// not as it was when the token was minted. The admin flag in particular
/// always comes from the store, never from the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    id: UserId,
    username: String,
    email: String,
    admin: bool,
}

impl CurrentUser {
    pub fn new(id: UserId, username: String, email: String, admin: bool) -> Self {
        Self {
            id,
            username,
            email,
            admin,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }
}
