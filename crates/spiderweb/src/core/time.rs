/// Frame-rate throttle.
/// Accepts at most one frame per `interval_ms`, regardless of how often the
/// host's animation callback fires.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    /// Minimum time between accepted frames, in milliseconds.
    interval_ms: f64,
    /// Timestamp of the last accepted frame.
    last_frame: f64,
    /// Number of frames accepted so far.
    accepted: u64,
}

impl FrameThrottle {
    /// One 60Hz frame.
    pub const DEFAULT_INTERVAL_MS: f64 = 16.67;

    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_frame: 0.0,
            accepted: 0,
        }
    }

    /// Offer a frame at `timestamp_ms`. Returns true if the frame should run.
    ///
    /// The very first offer is always accepted so the field renders on the
    /// first callback after start instead of one interval later.
    pub fn accept(&mut self, timestamp_ms: f64) -> bool {
        if self.accepted > 0 && timestamp_ms - self.last_frame < self.interval_ms {
            return false;
        }
        self.last_frame = timestamp_ms;
        self.accepted += 1;
        true
    }

    /// Forget the last accepted frame. The next offer is accepted.
    pub fn reset(&mut self) {
        self.last_frame = 0.0;
        self.accepted = 0;
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn accepted_frames(&self) -> u64 {
        self.accepted
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_accepted() {
        let mut t = FrameThrottle::default();
        assert!(t.accept(0.0));
        assert_eq!(t.accepted_frames(), 1);
    }

    #[test]
    fn rejects_frames_inside_interval() {
        let mut t = FrameThrottle::default();
        assert!(t.accept(0.0));
        assert!(!t.accept(8.0)); // 120Hz display
        assert!(!t.accept(16.0));
        assert!(t.accept(16.67));
        assert_eq!(t.accepted_frames(), 2);
    }

    #[test]
    fn interval_measured_from_last_accepted() {
        let mut t = FrameThrottle::default();
        t.accept(100.0);
        assert!(!t.accept(110.0));
        // 20ms after the accepted frame, not after the rejected one
        assert!(t.accept(120.0));
    }

    #[test]
    fn reset_accepts_next_offer() {
        let mut t = FrameThrottle::default();
        t.accept(50.0);
        t.reset();
        assert!(t.accept(51.0));
    }
}
