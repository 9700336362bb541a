//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use quill_core::ports::{Cache, PasswordService, TokenService};
use quill_store::{Argon2PasswordService, InMemoryCache, JwtTokenService, SharedStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub cache: Arc<dyn Cache>,
    pub cache_ttl: Duration,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    /// Hash verified against when a login names an unknown user.
    pub login_decoy: String,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let state = Self::with_services(
            SharedStore::default(),
            Arc::new(InMemoryCache::new()),
            config.cache_ttl,
            Arc::new(JwtTokenService::new(config.jwt.clone())),
            Arc::new(Argon2PasswordService::new()),
        );

        tracing::info!(
            cache_ttl_secs = config.cache_ttl.as_secs(),
            "Application state initialized"
        );
        state
    }

    pub fn with_services(
        store: SharedStore,
        cache: Arc<dyn Cache>,
        cache_ttl: Duration,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        let login_decoy = passwords.hash("quill-login-decoy").unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to prepare login decoy hash");
            String::new()
        });

        Self {
            store,
            cache,
            cache_ttl,
            tokens,
            passwords,
            login_decoy,
        }
    }

    /// Drop cached query responses after a successful mutation.
    ///
    /// Call while still holding the store's write guard so no reader can
    /// repopulate the cache from the pre-mutation state.
    pub async fn invalidate_reads(&self) {
        self.cache.clear().await;
    }
}
