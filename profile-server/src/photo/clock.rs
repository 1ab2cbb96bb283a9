//! Time source for photo file names

/// Supplies the unix timestamp embedded in stored file names
pub trait Clock: Send + Sync {
    /// Seconds since the unix epoch
    fn unix_seconds(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_seconds(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(1_700_000_000).unix_seconds(), 1_700_000_000);
    }

    #[test]
    fn test_system_clock_is_after_2024() {
        assert!(SystemClock.unix_seconds() > 1_704_067_200);
    }
}
