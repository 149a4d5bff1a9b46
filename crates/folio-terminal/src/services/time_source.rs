//! Time source abstraction for testability.
//!
//! Commands such as `status`, `uptime` and `date` read the clock through a
//! `TimeSource` so tests can pin both the monotonic clock and the wall clock.

use chrono::{DateTime, FixedOffset, Local};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Abstraction over time-related operations.
pub trait TimeSource: Send + Sync + std::fmt::Debug {
    /// Get the current instant for measuring elapsed time.
    fn now(&self) -> Instant;

    /// Current wall-clock time with its local offset.
    fn wall_clock(&self) -> DateTime<FixedOffset>;

    /// Calculate elapsed time since an earlier instant.
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// Type alias for shared time source.
pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Production implementation using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall_clock(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Test implementation with controllable time.
///
/// - `now()` returns a logical instant based on an internal counter
/// - `wall_clock()` returns a fixed base date plus the logical elapsed time
/// - Time only moves when `advance()` is called
///
/// # Example
///
/// ```
/// use folio::services::time_source::{TestTimeSource, TimeSource};
/// use std::time::Duration;
///
/// let time = TestTimeSource::new();
/// let start = time.now();
/// time.advance(Duration::from_secs(90));
/// assert_eq!(time.elapsed_since(start), Duration::from_secs(90));
/// ```
#[derive(Debug)]
pub struct TestTimeSource {
    /// Logical time in nanoseconds since creation.
    logical_nanos: AtomicU64,
    base_instant: Instant,
    base_wall: DateTime<FixedOffset>,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    /// Create a source whose wall clock starts at 2025-01-01 09:30:00 UTC.
    pub fn new() -> Self {
        let base_wall = DateTime::from_timestamp(1_735_723_800, 0).unwrap_or_default();
        Self::starting_at(base_wall.fixed_offset())
    }

    pub fn starting_at(base_wall: DateTime<FixedOffset>) -> Self {
        Self {
            logical_nanos: AtomicU64::new(0),
            base_instant: Instant::now(),
            base_wall,
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Advance logical time by the given duration.
    pub fn advance(&self, duration: Duration) {
        self.logical_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Get the logical elapsed time since creation.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.logical_nanos.load(Ordering::SeqCst))
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.base_instant + self.elapsed()
    }

    fn wall_clock(&self) -> DateTime<FixedOffset> {
        let elapsed =
            chrono::Duration::from_std(self.elapsed()).unwrap_or_else(|_| chrono::Duration::zero());
        self.base_wall + elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_source_advance() {
        let time = TestTimeSource::new();
        let start = time.now();

        time.advance(Duration::from_millis(100));
        assert_eq!(time.elapsed_since(start), Duration::from_millis(100));

        time.advance(Duration::from_secs(1));
        assert_eq!(time.elapsed(), Duration::from_millis(1100));
    }

    #[test]
    fn test_wall_clock_follows_logical_time() {
        let time = TestTimeSource::new();
        assert_eq!(
            time.wall_clock().format("%Y-%m-%d %H:%M:%S").to_string(),
            "2025-01-01 09:30:00"
        );
        time.advance(Duration::from_secs(3600));
        assert_eq!(time.wall_clock().format("%H:%M").to_string(), "10:30");
    }

    #[test]
    fn test_real_time_source_is_monotonic() {
        let time = RealTimeSource::new();
        let a = time.now();
        let b = time.now();
        assert!(b >= a);
    }

    #[test]
    fn test_shared_time_source_is_object_safe() {
        let shared: SharedTimeSource = TestTimeSource::shared();
        let start = shared.now();
        assert_eq!(shared.elapsed_since(start), Duration::ZERO);
    }
}
