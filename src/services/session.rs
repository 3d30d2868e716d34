//! Shared view of who is signed in.
//!
//! A single cache maps access tokens to the provider's user record so the
//! provider is asked at most once per token per TTL, however many parts of
//! a page need the current user.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::models::ProviderUser;
use crate::services::Provider;

struct CachedUser {
    user: ProviderUser,
    fetched_at: Instant,
}

pub struct SessionService {
    provider: Arc<dyn Provider>,
    ttl: Duration,
    cache: Mutex<HashMap<String, CachedUser>>,
}

impl SessionService {
    pub fn new(provider: Arc<dyn Provider>, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// User behind `access_token`, or `None` when anonymous.
    ///
    /// Lookup failures are logged and treated as signed out; a token the
    /// provider rejects is evicted.
    pub async fn current_user(
        &self,
        access_token: &str,
    ) -> Option<ProviderUser> {
        if access_token.is_empty() {
            return None;
        }

        if let Some(user) = self.cached(access_token) {
            return Some(user);
        }

        match self.provider.get_user(access_token).await {
            Ok(user) => {
                self.remember(access_token, user.clone());
                Some(user)
            }
            Err(e) if e.is_unauthorized() => {
                log::info!("Session token rejected by provider: {}", e);
                self.forget(access_token);
                None
            }
            Err(e) => {
                log::warn!("Failed to look up session user: {}", e);
                None
            }
        }
    }

    /// Record a freshly signed-in user so the next page load skips the
    /// provider.
    pub fn remember(&self, access_token: &str, user: ProviderUser) {
        let now = Instant::now();
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let ttl = self.ttl;
        cache.retain(|_, entry| now.duration_since(entry.fetched_at) < ttl);
        cache.insert(
            access_token.to_string(),
            CachedUser {
                user,
                fetched_at: now,
            },
        );
    }

    pub fn forget(&self, access_token: &str) {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(access_token);
    }

    fn cached(&self, access_token: &str) -> Option<ProviderUser> {
        let cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        cache
            .get(access_token)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.user.clone())
    }
}
