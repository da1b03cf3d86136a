//! Browser Clock

use taskboard_core::Clock;

/// Milliseconds since the epoch from `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_millis(&self) -> u64 {
        // Date.now() is a non-negative integral f64 well below 2^53
        js_sys::Date::now() as u64
    }
}
