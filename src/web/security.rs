use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Allowed attempts per client within a sliding window.
#[derive(Debug, Clone, Copy)]
pub struct Limit {
    pub max_requests: usize,
    pub window: Duration,
}

pub const SIGN_IN_LIMIT: Limit = Limit {
    max_requests: 5,
    window: Duration::from_secs(300),
};

pub const MAGIC_LINK_LIMIT: Limit = Limit {
    max_requests: 5,
    window: Duration::from_secs(300),
};

pub const REGISTER_LIMIT: Limit = Limit {
    max_requests: 5,
    window: Duration::from_secs(600),
};

pub const RATE_LIMITED_MESSAGE: &str =
    "Too many attempts. Please try again later.";

/// Attempts of one action by one client, with the window they count in.
struct Attempts {
    times: Vec<Instant>,
    window: Duration,
}

impl Attempts {
    fn prune(&mut self, now: Instant) {
        let window = self.window;
        self.times.retain(|&time| now.duration_since(time) < window);
    }
}

/// Simple in-memory rate limiter
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Attempts>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt of `action` by `client`.
    /// Returns false once the client is over the limit.
    pub fn check(&self, action: &str, client: &str, limit: Limit) -> bool {
        let now = Instant::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Drop every key whose attempts have all left their window
        requests.retain(|_, attempts| {
            attempts.prune(now);
            !attempts.times.is_empty()
        });

        let attempts = requests
            .entry(format!("{}:{}", action, client))
            .or_insert_with(|| Attempts {
                times: Vec::new(),
                window: limit.window,
            });
        attempts.window = limit.window;

        if attempts.times.len() >= limit.max_requests {
            return false;
        }

        attempts.times.push(now);
        true
    }

    /// Number of action/client pairs currently tracked.
    pub fn tracked(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
