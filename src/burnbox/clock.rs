use chrono::Utc;

/// Wall clock in epoch milliseconds, injected so expiry can be tested
/// without sleeping.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::Clock;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    /// A clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Arc<AtomicI64>,
    }

    impl ManualClock {
        pub fn at(now_ms: i64) -> Self {
            Self {
                now: Arc::new(AtomicI64::new(now_ms)),
            }
        }

        pub fn advance_ms(&self, ms: i64) {
            self.now.fetch_add(ms, Ordering::SeqCst);
        }

        pub fn advance_minutes(&self, minutes: i64) {
            self.advance_ms(minutes * 60_000);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> i64 {
            self.now.load(Ordering::SeqCst)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::ManualClock;
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::at(1_000);
        let other = clock.clone();
        clock.advance_minutes(1);
        assert_eq!(other.now_ms(), 61_000);
    }
}
