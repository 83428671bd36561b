//! Authentication session
//!
//! One owned object per process. It rehydrates from the persisted token on
//! [`Session::initialize`], and any call result passed through
//! [`Session::observe`] that carries an authentication failure drops it back
//! to [`SessionState::Anonymous`].

use std::sync::Arc;

use tasktime_domain::{AuthResponse, Credentials, Registration, Result, TaskTimeError, User};
use tracing::{debug, info, warn};

use crate::ports::{TaskTimeApi, TokenStore};

/// Where the session stands
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Persisted token not checked yet
    Loading,
    Anonymous,
    Authenticated(User),
}

/// Authentication session bound to an API and a token store
pub struct Session {
    api: Arc<dyn TaskTimeApi>,
    store: Arc<dyn TokenStore>,
    state: SessionState,
}

impl Session {
    pub fn new(api: Arc<dyn TaskTimeApi>, store: Arc<dyn TokenStore>) -> Self {
        Self { api, store, state: SessionState::Loading }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Rehydrate from the persisted token.
    ///
    /// No token means anonymous without a request. A token the server no
    /// longer accepts is cleared. Never fails: the worst outcome is an
    /// anonymous session.
    pub async fn initialize(&mut self) -> &SessionState {
        self.state = SessionState::Loading;

        let token = match self.store.load() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Failed to read persisted token");
                None
            }
        };

        if token.is_none() {
            debug!("No persisted token, starting anonymous");
            self.state = SessionState::Anonymous;
            return &self.state;
        }

        match self.api.current_user().await {
            Ok(user) => {
                info!(user_id = user.id, username = %user.username, "Session restored");
                self.state = SessionState::Authenticated(user);
            }
            Err(err) => {
                info!(error = %err, "Persisted token rejected, clearing it");
                self.drop_token();
                self.state = SessionState::Anonymous;
            }
        }

        &self.state
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<&User> {
        let response = self.api.login(credentials).await?;
        self.adopt(response)
    }

    pub async fn register(&mut self, registration: &Registration) -> Result<&User> {
        let response = self.api.register(registration).await?;
        self.adopt(response)
    }

    /// Forget the token and the user.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        if let Some(user) = self.user() {
            info!(user_id = user.id, "Logged out");
        }
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// Pass a call result through, ending an authenticated session on auth
    /// failures. Outside an established session the stored token is left alone.
    pub fn observe<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if err.is_auth() && self.is_authenticated() {
                info!(error = %err, "Authentication rejected, ending session");
                self.drop_token();
                self.state = SessionState::Anonymous;
            }
        }
        result
    }

    fn adopt(&mut self, response: AuthResponse) -> Result<&User> {
        let AuthResponse { access_token, user, .. } = response;
        self.store.save(&access_token)?;
        info!(user_id = user.id, username = %user.username, "Signed in");
        self.state = SessionState::Authenticated(user);
        self.user().ok_or_else(|| TaskTimeError::Internal("session not established".into()))
    }

    fn drop_token(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "Failed to clear persisted token");
        }
    }
}
