use std::{cell::Cell, time::Duration};

use tracing::trace;

use super::Stream;

/// Fixed-period timer driven by the elapsed time reported by the host.
///
/// Periods that were missed between two calls to [`Interval::advance`]
/// are caught up immediately, one tick each, and the leftover fraction of
/// a period carries over to the next call.
pub struct Interval {
    period: Duration,
    // time since the last tick
    remainder: Duration,
    count: u64,
    ticks: Stream<u64>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            remainder: Duration::ZERO,
            count: 0,
            ticks: Stream::new(),
        }
    }

    pub fn ticks(&self) -> &Stream<u64> {
        &self.ticks
    }

    /// Returns the number of ticks fired
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if self.period.is_zero() {
            return 0;
        }

        self.remainder += elapsed;
        let mut fired = 0;
        while self.remainder >= self.period {
            self.remainder -= self.period;
            trace!(tick = self.count, "interval");
            self.ticks.emit(self.count);
            self.count += 1;
            fired += 1;
        }
        fired
    }
}

/// Unbounded counting pulse, fired once per displayed frame
pub struct FramePulse {
    next: Cell<u64>,
    frames: Stream<u64>,
}

impl Default for FramePulse {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePulse {
    pub fn new() -> Self {
        Self {
            next: Cell::new(0),
            frames: Stream::new(),
        }
    }

    pub fn frames(&self) -> &Stream<u64> {
        &self.frames
    }

    pub fn fire(&self) -> u64 {
        let frame = self.next.get();
        self.next.set(frame + 1);
        self.frames.emit(frame);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_interval_catches_up() {
        let mut interval = Interval::new(Duration::from_millis(300));
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&seen);
        interval.ticks().subscribe(move |n| sink.borrow_mut().push(*n));

        assert_eq!(interval.advance(Duration::from_millis(299)), 0);
        assert_eq!(interval.advance(Duration::from_millis(1)), 1);
        assert_eq!(interval.advance(Duration::from_millis(950)), 3);
        // 50ms left over from the previous call
        assert_eq!(interval.advance(Duration::from_millis(250)), 1);
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_period_never_fires() {
        let mut interval = Interval::new(Duration::ZERO);
        assert_eq!(interval.advance(Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_frame_pulse_counts() {
        let pulse = FramePulse::new();
        assert_eq!(pulse.fire(), 0);
        assert_eq!(pulse.fire(), 1);
        assert_eq!(pulse.fire(), 2);
    }
}
