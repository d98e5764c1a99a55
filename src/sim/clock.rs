use super::types::{MINUTES_PER_TICK, TICKS_PER_DAY, TICKS_PER_HOUR};

/// Yields the ticks `0..total` of a run, one at a time, never repeating.
///
/// # Examples
///
/// ```
/// use chargepoint_sim::sim::clock::TickClock;
///
/// let ticks: Vec<usize> = TickClock::new(3).collect();
/// assert_eq!(ticks, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct TickClock {
    next: usize,
    total: usize,
}

impl TickClock {
    pub fn new(total: usize) -> Self {
        Self { next: 0, total }
    }

    /// Ticks not yet handed out.
    pub fn remaining(&self) -> usize {
        self.total - self.next
    }
}

impl Iterator for TickClock {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        (self.next < self.total).then(|| {
            self.next += 1;
            self.next - 1
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for TickClock {}

/// Day index (0-based) of `tick`.
pub fn day_of(tick: usize) -> usize {
    tick / TICKS_PER_DAY
}

/// Tick within its day, `0..TICKS_PER_DAY`.
pub fn tick_of_day(tick: usize) -> usize {
    tick % TICKS_PER_DAY
}

/// Wall-clock label `HH:MM` for the start of `tick` within its day.
pub fn time_of_day_label(tick: usize) -> String {
    let in_day = tick_of_day(tick);
    let hour = in_day / TICKS_PER_HOUR;
    let minute = (in_day % TICKS_PER_HOUR) * MINUTES_PER_TICK;
    format!("{hour:02}:{minute:02}")
}
