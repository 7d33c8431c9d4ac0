// progress.rs: per-chunk progress line driven by the codec observer.

use std::ops::ControlFlow;

use crate::cli::constants::display_level as current_level;
use crate::io::prefs::{display_level, REFRESH_RATE_NS};
use crate::timefn::{clock_span_ns, get_time, TimeT};

/// Rewrites `Read : x / y bytes` on stderr, at most once per
/// [`REFRESH_RATE_NS`] (every chunk at level ≥ 4).
pub struct Progress {
    total: u64,
    last: TimeT,
    enabled: bool,
}

impl Progress {
    /// `total` is the source size, or 0 when unknown.  A disabled progress
    /// never prints.
    pub fn new(total: u64, enabled: bool) -> Self {
        Progress { total, last: get_time(), enabled }
    }

    /// Reports `processed` source bytes.
    pub fn update(&mut self, processed: u64) {
        if !self.enabled || current_level() < 2 {
            return;
        }
        if current_level() < 4 && clock_span_ns(self.last) < REFRESH_RATE_NS {
            return;
        }
        self.last = get_time();
        let msg = if self.total > 0 {
            format!("\rRead : {} / {} bytes ", processed, self.total)
        } else {
            format!("\rRead : {} bytes ", processed)
        };
        display_level(2, &msg);
    }

    /// Observer for the codec's `*_observed` entry points.  Never cancels.
    pub fn observer(&mut self) -> impl FnMut(u64) -> ControlFlow<()> + '_ {
        move |processed| {
            self.update(processed);
            ControlFlow::Continue(())
        }
    }

    /// Erases the progress line.
    pub fn clear(&self) {
        if self.enabled {
            display_level(2, &format!("\r{:79}\r", ""));
        }
    }
}
