//! Per-station occupancy state.

/// Occupancy of one charge point, tracked as the first tick it is free again.
///
/// A station is FREE at `tick` when `busy_until <= tick` and BUSY otherwise.
/// All stations start free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StationState {
    busy_until: usize,
}

impl StationState {
    /// Creates a free station.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the station can accept an arrival at `tick`.
    pub fn is_free(&self, tick: usize) -> bool {
        self.busy_until <= tick
    }

    /// Marks the station busy for `ticks` ticks starting at `tick`.
    ///
    /// Returns `false` and leaves the state unchanged if the station is still
    /// busy at `tick`, so `busy_until` never moves backwards.
    pub fn reserve(&mut self, tick: usize, ticks: usize) -> bool {
        if !self.is_free(tick) {
            return false;
        }
        self.busy_until = tick.saturating_add(ticks);
        true
    }

    /// First tick at which the station is free again.
    pub fn busy_until(&self) -> usize {
        self.busy_until
    }
}

#[cfg(test)]
mod tests {
    use super::StationState;

    #[test]
    fn starts_free() {
        let station = StationState::new();
        assert!(station.is_free(0));
        assert_eq!(station.busy_until(), 0);
    }

    #[test]
    fn busy_for_reserved_window() {
        let mut station = StationState::new();
        assert!(station.reserve(10, 3));
        assert!(!station.is_free(10));
        assert!(!station.is_free(12));
        assert!(station.is_free(13));
    }

    #[test]
    fn cannot_reserve_while_busy() {
        let mut station = StationState::new();
        assert!(station.reserve(0, 5));
        assert!(!station.reserve(2, 1));
        assert_eq!(station.busy_until(), 5);
    }

    #[test]
    fn reservation_saturates() {
        let mut station = StationState::new();
        assert!(station.reserve(4, usize::MAX));
        assert_eq!(station.busy_until(), usize::MAX);
    }
}
