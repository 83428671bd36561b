//! Bearer token lookup for outgoing requests

use std::sync::Arc;

use async_trait::async_trait;
use tasktime_core::TokenStore;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// `None` means no session; the request is sent without an
/// `Authorization` header and the server decides.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Reads the current token from the persisted store on every call, so a
/// login or logout is visible to the next request without rebuilding the
/// client.
pub struct StoredTokenProvider {
    store: Arc<dyn TokenStore>,
}

impl StoredTokenProvider {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccessTokenProvider for StoredTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        self.store.load().map_err(ApiError::from)
    }
}
