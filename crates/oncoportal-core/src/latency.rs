//! Simulated latency.
//!
//! The portal fakes a round trip before login results and prediction results
//! appear. The delay is purely cosmetic and carries no ordering or
//! cancellation guarantees, so it sits behind a trait and tests inject
//! [`NoLatency`] to run synchronously.

use std::time::Duration;

/// Hook invoked wherever the portal wants to pretend work is happening.
pub trait LatencyHook {
    fn simulate(&self, delay: Duration);
}

/// Real sleeping, for interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingLatency;

impl LatencyHook for BlockingLatency {
    fn simulate(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// No-op hook for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl LatencyHook for NoLatency {
    fn simulate(&self, _delay: Duration) {}
}
