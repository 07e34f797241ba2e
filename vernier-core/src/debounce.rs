//! Rate limiting for the user replay trigger.
//!
//! A physical button replays the last decoded value as keystrokes and a
//! starred broadcast. Mechanical contacts bounce and users double-tap, so
//! triggers are limited to one per [`REPLAY_DEBOUNCE_MS`], measured from the
//! previous accepted trigger. Pure logic, wrapping millisecond arithmetic.

/// Minimum interval between accepted replay triggers
pub const REPLAY_DEBOUNCE_MS: u32 = 500;

/// Trigger rate limiter
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debounce {
    interval_ms: u32,
    last_ms: Option<u32>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(REPLAY_DEBOUNCE_MS)
    }
}

impl Debounce {
    /// Create a debouncer with the given minimum interval
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Attempt a trigger at `now_ms`.
    ///
    /// Returns `true` when the trigger is accepted. The first trigger after
    /// construction is always accepted; later ones only once the interval
    /// has elapsed since the previous *accepted* trigger.
    pub fn try_trigger(&mut self, now_ms: u32) -> bool {
        match self.last_ms {
            Some(last) if now_ms.wrapping_sub(last) < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_trigger_fires() {
        let mut debounce = Debounce::default();
        assert!(debounce.try_trigger(0));
    }

    #[test]
    fn test_rapid_double_tap_fires_once() {
        let mut debounce = Debounce::default();
        assert!(debounce.try_trigger(1000));
        assert!(!debounce.try_trigger(1100));
        assert!(!debounce.try_trigger(1499));
    }

    #[test]
    fn test_fires_again_after_interval() {
        let mut debounce = Debounce::default();
        assert!(debounce.try_trigger(1000));
        assert!(debounce.try_trigger(1500));
    }

    #[test]
    fn test_rejected_trigger_does_not_extend_window() {
        let mut debounce = Debounce::default();
        assert!(debounce.try_trigger(1000));
        assert!(!debounce.try_trigger(1400));
        // Window is measured from the accepted trigger at 1000, not 1400
        assert!(debounce.try_trigger(1501));
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_debounce_is_defmt_loggable() {
        fn assert_format<T: defmt::Format>() {}
        assert_format::<Debounce>();
        assert_format::<crate::NullKeyboard>();
    }

    #[test]
    fn test_across_wraparound() {
        let mut debounce = Debounce::default();
        assert!(debounce.try_trigger(u32::MAX - 100));
        assert!(!debounce.try_trigger(u32::MAX));
        // 500 ms after the accepted trigger, past the wrap
        assert!(debounce.try_trigger(399));
    }
}
