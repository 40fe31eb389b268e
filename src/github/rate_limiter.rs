use reqwest::header::HeaderMap;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Tracks GitHub's primary rate limit from response headers and holds the
/// next request back until the quota resets once it is exhausted.
pub struct RateLimiter {
    state: Mutex<RateLimitState>,
}

struct RateLimitState {
    remaining: Option<u32>,
    reset_at: Option<Instant>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RateLimitState {
                remaining: None,
                reset_at: None,
            }),
        }
    }

    pub async fn wait(&self) {
        let state = self.state.lock().await;

        if state.remaining != Some(0) {
            return;
        }

        if let Some(reset_at) = state.reset_at {
            let now = Instant::now();
            if reset_at > now {
                let wait_duration = reset_at - now;
                drop(state);
                tracing::warn!("Rate limit exhausted, waiting {:?} for reset", wait_duration);
                sleep(wait_duration).await;
            }
        }
    }

    pub async fn update_from_headers(&self, headers: &HeaderMap) {
        let Some(remaining) = header_number::<u32>(headers, "x-ratelimit-remaining") else {
            return;
        };

        let mut state = self.state.lock().await;
        state.remaining = Some(remaining);
        state.reset_at = header_number::<u64>(headers, "x-ratelimit-reset").and_then(|reset| {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            (reset > now).then(|| Instant::now() + Duration::from_secs(reset - now))
        });

        tracing::debug!("Rate limit remaining: {}", remaining);
    }

    pub async fn remaining(&self) -> Option<u32> {
        self.state.lock().await.remaining
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
