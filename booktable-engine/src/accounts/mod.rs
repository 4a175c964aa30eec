//! Account directory
//!
//! Demo-grade accounts: sign-in matches email and role and checks no
//! credential, mirroring the platform's mock authentication. Real
//! authentication is out of scope and must not be layered on this module.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use shared::models::{User, UserCreate, UserRole};
use shared::util::{now_millis, snowflake_id};

use crate::core::error::{AppError, AppResult};
use crate::core::state::ResourceVersions;
use crate::utils::validation::{MAX_NAME_LEN, validate_email, validate_required_text};

/// Account service over an in-memory user directory
#[derive(Clone)]
pub struct AccountService {
    users: Arc<RwLock<Vec<User>>>,
    versions: Arc<ResourceVersions>,
}

impl fmt::Debug for AccountService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountService")
            .field("users_count", &self.users.read().len())
            .finish()
    }
}

impl AccountService {
    pub fn new(versions: Arc<ResourceVersions>) -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            versions,
        }
    }

    pub fn with_users(users: Vec<User>, versions: Arc<ResourceVersions>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            versions,
        }
    }

    /// Sign in by exact email and role. No password is taken or verified.
    pub fn sign_in(&self, email: &str, role: UserRole) -> AppResult<User> {
        self.users
            .read()
            .iter()
            .find(|u| u.email == email && u.role == role)
            .cloned()
            .ok_or_else(|| AppError::unauthorized(format!("No {role} account for '{email}'")))
    }

    /// Register a new account. Emails are unique case-insensitively; the
    /// role defaults to customer when the payload leaves it out.
    pub fn register(&self, data: UserCreate) -> AppResult<User> {
        validate_email(&data.email)?;
        validate_required_text(&data.first_name, "first_name", MAX_NAME_LEN)?;
        validate_required_text(&data.last_name, "last_name", MAX_NAME_LEN)?;

        let user = {
            let mut users = self.users.write();
            if users.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
                return Err(AppError::conflict(format!(
                    "Email '{}' is already registered",
                    data.email
                )));
            }
            let user = User {
                id: snowflake_id(),
                email: data.email,
                first_name: data.first_name,
                last_name: data.last_name,
                role: data.role.unwrap_or(UserRole::Customer),
                created_at: now_millis(),
            };
            users.push(user.clone());
            user
        };

        self.record_change("registered", user.id);
        Ok(user)
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    /// Every account, registration order
    pub fn list(&self) -> Vec<User> {
        self.users.read().clone()
    }

    fn record_change(&self, action: &str, id: i64) {
        let version = self.versions.increment("user");
        tracing::debug!(resource = "user", action, id, version, "directory changed");
    }
}
