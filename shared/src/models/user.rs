//! User Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    Customer,
    RestaurantManager,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Customer => "customer",
            UserRole::RestaurantManager => "restaurant manager",
            UserRole::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: Timestamp,
}

impl User {
    /// Display name ("First Last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create user payload (ID assigned by the account service; role defaults
/// to customer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<UserRole>,
}
