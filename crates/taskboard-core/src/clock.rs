//! Clock Abstraction
//!
//! Task ids are derived from wall-clock milliseconds. The browser build
//! supplies its own clock since `std::time` is unavailable on wasm32.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of millisecond timestamps for id generation
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Host clock backed by `SystemTime`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}
