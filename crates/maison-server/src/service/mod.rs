//! Shared application services: configuration, state, security.

mod admin_key;
mod config;
mod rate_limiter;
mod state;

pub use admin_key::AdminKey;
pub use config::ServiceConfig;
pub use rate_limiter::{
    ConsumeOutcome, InMemoryStore, RateLimitConfig, RateLimitKey, RateLimitStore, RateLimiter,
};
pub use state::ServiceState;
