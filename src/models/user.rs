//! Session user.

use serde::{Deserialize, Serialize};

/// Display name given to every signed-in user by the mock boundary.
pub const SESSION_NAME: &str = "管理员";
/// Role given to every signed-in user by the mock boundary.
pub const SESSION_ROLE: &str = "admin";
/// Department given to every signed-in user by the mock boundary.
pub const SESSION_DEPARTMENT: &str = "信息宣传部";

/// Identity returned by the data service's auth operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub id: String,
    pub email: Option<String>,
}

/// The signed-in user held by the auth store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub department: String,
}

impl User {
    /// Build the session user for an identity.
    ///
    /// Name, role and department are fixed regardless of who signed in.
    pub fn from_identity(identity: AuthIdentity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.unwrap_or_default(),
            name: SESSION_NAME.to_string(),
            role: SESSION_ROLE.to_string(),
            department: SESSION_DEPARTMENT.to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == SESSION_ROLE
    }
}
