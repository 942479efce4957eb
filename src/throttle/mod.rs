//! Rate limiting for outbound extraction calls
//!
//! The extraction provider only tolerates one call per interval. The gate is
//! created once at startup and shared by every request, so concurrent
//! searches still respect the provider's limit.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::sync::Arc;
use std::time::Duration;

/// Something that paces outbound calls
#[async_trait]
pub trait Throttle: Send + Sync {
    /// Wait until the next call may be issued
    async fn acquire(&self);
}

/// Fixed-interval gate: at most one permit per `interval`
pub struct IntervalGate {
    limiter: DefaultDirectRateLimiter,
    interval: Duration,
}

impl IntervalGate {
    /// Returns `None` for a zero interval
    pub fn new(interval: Duration) -> Option<Self> {
        let quota = Quota::with_period(interval)?;
        Some(Self {
            limiter: RateLimiter::direct(quota),
            interval,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl Throttle for IntervalGate {
    async fn acquire(&self) {
        self.limiter.until_ready().await;
    }
}

/// No pacing at all
#[derive(Debug, Default, Clone, Copy)]
pub struct Unthrottled;

#[async_trait]
impl Throttle for Unthrottled {
    async fn acquire(&self) {}
}

/// Build the shared throttle for a configured interval
pub fn for_interval(interval: Duration) -> Arc<dyn Throttle> {
    match IntervalGate::new(interval) {
        Some(gate) => Arc::new(gate),
        None => Arc::new(Unthrottled),
    }
}
