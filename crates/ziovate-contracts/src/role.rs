//! User roles and the in-memory session.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// The closed set of roles a user can log in as.
///
/// Role selection happens once, on the login screen; everything downstream
/// dispatches on this enum exhaustively, so adding a role is a compile error
/// until every dashboard mapping handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Patient,
    Doctor,
    Admin,
}

impl UserRole {
    /// All roles, in login-screen display order.
    pub const ALL: [UserRole; 3] = [UserRole::Patient, UserRole::Doctor, UserRole::Admin];

    /// The lowercase wire/display name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Patient => "patient",
            UserRole::Doctor => "doctor",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "patient" => Ok(UserRole::Patient),
            "doctor" => Ok(UserRole::Doctor),
            "admin" => Ok(UserRole::Admin),
            other => Err(ApiError::Validation {
                field: "role".to_string(),
                message: format!("unknown role '{}'", other),
            }),
        }
    }
}

/// The current user, held only in memory.
///
/// A session exists iff the user is logged in. It is created by a successful
/// login, destroyed by logout, and never persisted — a process restart always
/// returns to the login screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique id for this login, for log correlation.
    pub id: Uuid,
    /// The name the user entered on the login form.
    pub name: String,
    /// The role selected at login.
    pub role: UserRole,
    /// When the session was created (UTC).
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Start a new session for `name` acting as `role`.
    pub fn start(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            started_at: Utc::now(),
        }
    }
}
