//! Application context - dependency injection container

use std::sync::Arc;

use tasktime_common::time::{Clock, SystemClock};
use tasktime_core::{Dashboard, Session, TaskTimeApi, TokenStore};
use tasktime_domain::{Config, Result, TaskTimeError, User};
use tasktime_infra::{FileTokenStore, HttpTaskTimeApi};
use tracing::debug;

/// Application context - holds the adapters and the session
pub struct AppContext {
    pub config: Config,
    pub api: Arc<dyn TaskTimeApi>,
    pub tokens: Arc<dyn TokenStore>,
    pub clock: Arc<dyn Clock>,
    pub session: Session,
}

impl AppContext {
    /// Wire the HTTP adapter and the file token store from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(FileTokenStore::open(config.storage.token_path.clone())?);
        debug!(path = %store.path().display(), "using token storage");

        let tokens: Arc<dyn TokenStore> = store;
        let api: Arc<dyn TaskTimeApi> =
            Arc::new(HttpTaskTimeApi::from_config(&config.api, tokens.clone())?);

        Ok(Self::with_adapters(config, api, tokens, Arc::new(SystemClock)))
    }

    /// Build a context around already constructed adapters.
    pub fn with_adapters(
        config: Config,
        api: Arc<dyn TaskTimeApi>,
        tokens: Arc<dyn TokenStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session = Session::new(api.clone(), tokens.clone());
        Self { config, api, tokens, clock, session }
    }

    /// Restore the session from the stored token.
    ///
    /// # Errors
    /// Returns `TaskTimeError::Auth` when nobody is signed in.
    pub async fn require_user(&mut self) -> Result<User> {
        self.session.initialize().await;
        self.session
            .user()
            .cloned()
            .ok_or_else(|| TaskTimeError::Auth("Not logged in. Run `tasktime login` first.".into()))
    }

    /// A fresh dashboard bound to this context's adapters.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.api.clone(), self.clock.clone())
    }

    /// End the session after the server rejected our credentials.
    pub fn end_session(&mut self, err: &TaskTimeError) {
        if err.is_auth() {
            let _ = self.session.observe::<()>(Err(err.clone()));
        }
    }
}
