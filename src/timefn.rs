// timefn: monotonic wall-clock helpers for progress throttling and the
// final "Done in" line.
//
// std::time::Instant is monotonic and thread-safe, so no platform branches
// are needed.

use std::time::Instant;

/// Nanosecond duration.
pub type DurationNs = u64;

/// Opaque timestamp.  Only differences between two values are meaningful.
#[derive(Clone, Copy, Debug)]
pub struct TimeT {
    pub(crate) t: Instant,
}

impl Default for TimeT {
    fn default() -> Self {
        get_time()
    }
}

/// Current monotonic timestamp.
pub fn get_time() -> TimeT {
    TimeT { t: Instant::now() }
}

/// Nanoseconds from `clock_start` to `clock_end` (0 if `clock_end` is earlier).
pub fn span_ns(clock_start: TimeT, clock_end: TimeT) -> DurationNs {
    clock_end.t.saturating_duration_since(clock_start.t).as_nanos() as DurationNs
}

/// Nanoseconds elapsed since `clock_start`.
pub fn clock_span_ns(clock_start: TimeT) -> DurationNs {
    clock_start.t.elapsed().as_nanos() as DurationNs
}
