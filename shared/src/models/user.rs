//! User Model

use serde::{Deserialize, Serialize};

/// Account role
///
/// ADMIN and ATTENDANT come from the static staff table; CUSTOMER is the
/// implicit role of anonymous checkout visitors and is never persisted as
/// an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Attendant,
    Customer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Admin => "ADMIN",
            Role::Attendant => "ATTENDANT",
            Role::Customer => "CUSTOMER",
        };
        write!(f, "{}", s)
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
}

/// Sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}
