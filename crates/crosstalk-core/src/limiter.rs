//! Per-client admission control.
//!
//! Fixed-window rate limiting: each client identity gets a counter that is
//! cleared wholesale when the window rolls over. A client can therefore
//! burst up to twice the limit across a window boundary; that coarseness is
//! inherited from the source design and is not compensated for here.
//!
//! The whole state (window epoch + counter map) sits behind one mutex so
//! check-and-increment and the rollover clear are atomic with respect to
//! concurrent requests. The lock is never held across an await point.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default number of admitted requests per client per window.
const DEFAULT_LIMIT: u32 = 60;

/// Default window length.
const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

struct WindowState {
    started: Instant,
    counts: HashMap<String, u32>,
}

/// Fixed-window per-client request counter.
///
/// Constructed once at startup and injected into the orchestrator; owns no
/// background task -- rollover is detected lazily on the next `admit` call.
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    state: Mutex<WindowState>,
}

impl RateLimiter {
    /// Create a limiter with the default 60 requests / 60 seconds window.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_LIMIT, DEFAULT_WINDOW)
    }

    /// Create a limiter with explicit limits. Used by tests and by
    /// deployments that tune the window.
    pub fn with_limits(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            state: Mutex::new(WindowState {
                started: Instant::now(),
                counts: HashMap::new(),
            }),
        }
    }

    /// Admit or reject one request from `client`.
    ///
    /// Counters for all clients reset together when the window has
    /// elapsed. A rejected request does not increment the counter.
    pub fn admit(&self, client: &str) -> bool {
        let mut state = self.state.lock().expect("rate limiter lock poisoned");

        if state.started.elapsed() >= self.window {
            state.counts.clear();
            state.started = Instant::now();
        }

        let count = state.counts.get(client).copied().unwrap_or(0);
        if count >= self.limit {
            tracing::warn!(client, count, "rate limit exceeded");
            return false;
        }

        state.counts.insert(client.to_string(), count + 1);
        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
