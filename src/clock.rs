//! Controller clock domain
//!
//! The motion controller timestamps its control cycle against its own
//! monotonic clock. `CycleInstant` carries such a time point as an offset
//! from that epoch so it can cross the C boundary as a plain millisecond
//! count. The value is only meaningful when fed back to the same controller
//! instance that produced it (cycle synchronization via
//! `init_period`/`wait_period`); it is not comparable to wall-clock time.

use std::time::Duration;

/// A point on the motion controller's monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleInstant(Duration);

impl CycleInstant {
    /// Time point at the given offset from the controller epoch.
    pub fn from_epoch_offset(offset: Duration) -> Self {
        CycleInstant(offset)
    }

    /// Offset from the controller epoch.
    pub fn epoch_offset(self) -> Duration {
        self.0
    }

    /// Offset in whole milliseconds. Sub-millisecond precision is
    /// truncated and does not round-trip.
    pub fn as_millis(self) -> i64 {
        self.0.as_millis() as i64
    }

    /// Reconstruct a time point from a millisecond offset previously
    /// obtained from [`as_millis`](Self::as_millis). Negative offsets
    /// saturate to the epoch.
    pub fn from_millis(millis: i64) -> Self {
        CycleInstant(Duration::from_millis(millis.max(0) as u64))
    }
}
