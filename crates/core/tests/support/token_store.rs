//! In-memory `TokenStore`

use parking_lot::Mutex;
use tasktime_core::ports::TokenStore;
use tasktime_domain::{Result, TaskTimeError};

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
    fail_writes: Mutex<bool>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_string())), fail_writes: Mutex::new(false) }
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().clone()
    }

    pub fn fail_writes(&self) {
        *self.fail_writes.lock() = true;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.fail_writes.lock() {
            return Err(TaskTimeError::Storage("read-only store".into()));
        }
        Ok(())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        self.check_writable()?;
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.check_writable()?;
        *self.token.lock() = None;
        Ok(())
    }
}
