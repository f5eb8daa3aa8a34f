//! Session lifecycle: login, logout, and the current-user handle.
//!
//! The session is NOT ambient state. `SessionContext` is an explicit object
//! the hosting application constructs once and hands to whatever needs the
//! current user, which keeps the whole lifecycle testable in isolation.

use std::sync::Arc;

use tracing::info;

use ziovate_api::ApiClient;
use ziovate_contracts::{ApiError, ApiResult, Session, UserRole};

/// Owns the `Option<Session>` toggle between logged-out and logged-in.
///
/// A session exists iff login succeeded and logout has not been called.
/// Nothing is persisted; dropping the context is equivalent to a restart.
pub struct SessionContext<C: ApiClient> {
    client: Arc<C>,
    session: Option<Session>,
}

impl<C: ApiClient> SessionContext<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            session: None,
        }
    }

    /// The seam client this context drives.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Attempt to log in and create a session.
    ///
    /// Blank name, email, or password fails with `ApiError::Validation`
    /// BEFORE the client is called — no half-authenticated state, and the
    /// login form re-prompts locally. On a successful client call the
    /// session holds the submitted name and selected role.
    pub async fn login(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> ApiResult<&Session> {
        for (field, value) in [("name", name), ("email", email), ("password", password)] {
            if value.trim().is_empty() {
                return Err(ApiError::Validation {
                    field: field.to_string(),
                    message: "please fill all fields before login".to_string(),
                });
            }
        }

        self.client.login(email, password).await?;

        let session = Session::start(name, role);
        info!(session_id = %session.id, name, role = %role, "session started");
        Ok(self.session.insert(session))
    }

    /// End the current session, returning it if one existed.
    ///
    /// The UI interprets the logged-out state as "show the login form".
    pub fn logout(&mut self) -> Option<Session> {
        let session = self.session.take();
        if let Some(s) = &session {
            info!(session_id = %s.id, "session ended");
        }
        session
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}
