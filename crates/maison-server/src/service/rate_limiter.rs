//! Token-bucket rate limiter with a pluggable store.
//!
//! The bucket store sits behind [`RateLimitStore`] so the default
//! in-memory map can be swapped for an external TTL cache when the
//! server scales horizontally, and so tests can inject a store without
//! spawning the sweeper.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::handler::{ErrorKind, Result as HandlerResult};

/// Tracing target for rate limiter operations.
const TRACING_TARGET: &str = "maison_server::service::rate_limiter";

/// Rate limiter key type.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum RateLimitKey {
    /// Rate limit by IP address
    IpAddress(IpAddr),
    /// Rate limit by email address
    Email(String),
    /// Custom key
    Custom(String),
}

impl RateLimitKey {
    /// Creates a key from an IP address.
    pub fn from_ip(ip: IpAddr) -> Self {
        Self::IpAddress(ip)
    }

    /// Creates a key from an email address.
    pub fn from_email(email: impl Into<String>) -> Self {
        Self::Email(email.into())
    }

    /// Creates a custom key.
    pub fn custom(key: impl Into<String>) -> Self {
        Self::Custom(key.into())
    }
}

/// Rate limiter configuration.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Maximum number of requests allowed in the time window
    pub capacity: u32,
    /// Token refill rate per second
    pub refill_rate: f64,
}

impl RateLimitConfig {
    /// Creates a new rate limit configuration.
    pub fn new(capacity: u32, refill_rate: f64) -> Self {
        Self {
            capacity,
            refill_rate,
        }
    }

    /// Creates a configuration for N requests per minute.
    pub fn per_minute(requests: u32) -> Self {
        Self {
            capacity: requests,
            refill_rate: requests as f64 / 60.0,
        }
    }

    /// Strict rate limit: 5 requests per minute.
    pub fn strict() -> Self {
        Self::per_minute(5)
    }

    /// Moderate rate limit: 20 requests per minute.
    pub fn moderate() -> Self {
        Self::per_minute(20)
    }

    /// Lenient rate limit: 60 requests per minute.
    pub fn lenient() -> Self {
        Self::per_minute(60)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::moderate()
    }
}

/// Outcome of a token consumption attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsumeOutcome {
    /// The request is within the limit.
    Allowed,
    /// The request exceeds the limit; retry after this duration.
    Limited {
        /// Time until the next token is available.
        retry_after: Duration,
    },
}

/// Storage backend for rate limit buckets.
///
/// Keys carry a bounded lifetime: [`RateLimitStore::sweep`] evicts
/// buckets that have refilled to capacity (idle keys).
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Attempts to consume `cost` tokens for `key`.
    async fn try_consume(
        &self,
        key: RateLimitKey,
        cost: u32,
        config: RateLimitConfig,
    ) -> ConsumeOutcome;

    /// Forgets the bucket for `key`.
    async fn reset(&self, key: &RateLimitKey);

    /// Evicts idle buckets; returns how many were removed.
    async fn sweep(&self) -> usize;

    /// Returns the number of tracked keys.
    async fn tracked_keys(&self) -> usize;
}

/// Token bucket state.
#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    capacity: u32,
    refill_rate: f64,
    last_refill: Instant,
}

impl TokenBucket {
    fn new(capacity: u32, refill_rate: f64) -> Self {
        Self {
            tokens: capacity as f64,
            capacity,
            refill_rate,
            last_refill: Instant::now(),
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        let new_tokens = elapsed * self.refill_rate;

        self.tokens = (self.tokens + new_tokens).min(self.capacity as f64);
        self.last_refill = now;
    }

    fn try_consume(&mut self, tokens: u32) -> bool {
        self.refill();

        if self.tokens >= tokens as f64 {
            self.tokens -= tokens as f64;
            true
        } else {
            false
        }
    }

    fn time_until_available(&self) -> Duration {
        if self.tokens >= 1.0 {
            Duration::from_secs(0)
        } else {
            let tokens_needed = 1.0 - self.tokens;
            let seconds = tokens_needed / self.refill_rate;
            Duration::from_secs_f64(seconds.ceil())
        }
    }
}

/// Default in-memory bucket store: a map behind an async lock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    buckets: RwLock<HashMap<RateLimitKey, TokenBucket>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryStore {
    async fn try_consume(
        &self,
        key: RateLimitKey,
        cost: u32,
        config: RateLimitConfig,
    ) -> ConsumeOutcome {
        let mut buckets = self.buckets.write().await;

        let bucket = buckets
            .entry(key)
            .or_insert_with(|| TokenBucket::new(config.capacity, config.refill_rate));

        if bucket.try_consume(cost) {
            ConsumeOutcome::Allowed
        } else {
            ConsumeOutcome::Limited {
                retry_after: bucket.time_until_available(),
            }
        }
    }

    async fn reset(&self, key: &RateLimitKey) {
        let mut buckets = self.buckets.write().await;
        let _ = buckets.remove(key);
    }

    async fn sweep(&self) -> usize {
        let mut buckets = self.buckets.write().await;
        let before = buckets.len();
        // A bucket at full capacity has seen no traffic for at least one
        // whole refill window.
        buckets.retain(|_, bucket| {
            let mut probe = bucket.clone();
            probe.refill();
            probe.tokens < probe.capacity as f64
        });
        before - buckets.len()
    }

    async fn tracked_keys(&self) -> usize {
        self.buckets.read().await.len()
    }
}

/// Rate limiter over an injected bucket store.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    config: RateLimitConfig,
    sweep_interval: Duration,
}

impl RateLimiter {
    /// Default interval between idle-bucket sweeps.
    const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

    /// Creates a rate limiter with the default in-memory store and
    /// starts its periodic sweeper.
    pub fn new(config: RateLimitConfig) -> Self {
        let limiter = Self::with_store(Arc::new(InMemoryStore::new()), config);
        limiter.start_sweeper();

        tracing::info!(
            target: TRACING_TARGET,
            capacity = config.capacity,
            refill_rate = config.refill_rate,
            "Rate limiter initialized",
        );

        limiter
    }

    /// Creates a rate limiter over an injected store.
    ///
    /// No sweeper is started; the owner of the store drives eviction.
    pub fn with_store(store: Arc<dyn RateLimitStore>, config: RateLimitConfig) -> Self {
        Self {
            store,
            config,
            sweep_interval: Self::SWEEP_INTERVAL,
        }
    }

    /// Checks if a request is allowed for the given key.
    pub async fn check(&self, key: RateLimitKey) -> HandlerResult<()> {
        self.check_with_cost(key, 1).await
    }

    /// Checks if a request with custom token cost is allowed.
    pub async fn check_with_cost(&self, key: RateLimitKey, cost: u32) -> HandlerResult<()> {
        match self.store.try_consume(key.clone(), cost, self.config).await {
            ConsumeOutcome::Allowed => Ok(()),
            ConsumeOutcome::Limited { retry_after } => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    key = ?key,
                    retry_after_secs = retry_after.as_secs(),
                    "Rate limit exceeded",
                );
                Err(ErrorKind::TooManyRequests.with_message(format!(
                    "Rate limit exceeded. Please try again in {} seconds",
                    retry_after.as_secs(),
                )))
            }
        }
    }

    /// Resets the rate limit for a specific key.
    pub async fn reset(&self, key: &RateLimitKey) {
        self.store.reset(key).await;
    }

    /// Returns the number of tracked keys.
    pub async fn tracked_keys(&self) -> usize {
        self.store.tracked_keys().await
    }

    /// Starts a background task that periodically evicts idle buckets.
    fn start_sweeper(&self) {
        let store = Arc::clone(&self.store);
        let interval = self.sweep_interval;

        drop(tokio::spawn(async move {
            let mut sweep_interval = tokio::time::interval(interval);
            loop {
                sweep_interval.tick().await;

                let removed = store.sweep().await;
                if removed > 0 {
                    tracing::debug!(
                        target: TRACING_TARGET,
                        removed_count = removed,
                        "Swept idle rate limit buckets",
                    );
                }
            }
        }));
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .field("sweep_interval", &self.sweep_interval)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_limiter(config: RateLimitConfig) -> RateLimiter {
        // Injected store, no sweeper task.
        RateLimiter::with_store(Arc::new(InMemoryStore::new()), config)
    }

    #[tokio::test]
    async fn refills_over_time() -> anyhow::Result<()> {
        let limiter = test_limiter(RateLimitConfig::new(2, 10.0));
        let key = RateLimitKey::from_ip("127.0.0.1".parse()?);

        assert!(limiter.check(key.clone()).await.is_ok());
        assert!(limiter.check(key.clone()).await.is_ok());
        assert!(limiter.check(key.clone()).await.is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(limiter.check(key).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn keys_are_limited_independently() -> anyhow::Result<()> {
        let limiter = test_limiter(RateLimitConfig::new(1, 0.001));
        let first = RateLimitKey::from_ip("10.0.0.1".parse()?);
        let second = RateLimitKey::from_ip("10.0.0.2".parse()?);

        assert!(limiter.check(first.clone()).await.is_ok());
        assert!(limiter.check(first).await.is_err());
        assert!(limiter.check(second).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn reset_forgets_a_key() -> anyhow::Result<()> {
        let limiter = test_limiter(RateLimitConfig::new(1, 0.001));
        let key = RateLimitKey::from_email("buyer@example.com");

        assert!(limiter.check(key.clone()).await.is_ok());
        assert!(limiter.check(key.clone()).await.is_err());

        limiter.reset(&key).await;
        assert!(limiter.check(key).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn sweep_evicts_idle_buckets() -> anyhow::Result<()> {
        let store = Arc::new(InMemoryStore::new());
        // Fast refill so a touched bucket is back at capacity quickly.
        let limiter = RateLimiter::with_store(store.clone(), RateLimitConfig::new(1, 50.0));
        let key = RateLimitKey::from_ip("10.1.1.1".parse()?);

        limiter.check(key).await.ok();
        assert_eq!(limiter.tracked_keys().await, 1);

        tokio::time::sleep(Duration::from_millis(100)).await;
        let removed = store.sweep().await;
        assert_eq!(removed, 1);
        assert_eq!(limiter.tracked_keys().await, 0);
        Ok(())
    }
}
