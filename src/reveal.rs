/// Visibility threshold for most page sections.
pub const SECTION_THRESHOLD: f64 = 0.2;
/// The about section waits until a bit more of it is on screen.
pub const ABOUT_THRESHOLD: f64 = 0.3;
/// How long the CSS enter transition runs before a reveal settles.
pub const REVEAL_TRANSITION_MS: f64 = 700.0;
/// Duration of the stat counter interpolation.
pub const COUNT_DURATION_MS: f64 = 2000.0;

/// One-shot reveal state machine for a scroll-animated element.
///
/// `Hidden -> Entering -> Visible`, driven by a single visibility event.
/// Once an element has revealed it never goes back, scrolling it out of
/// the viewport and back in does not re-trigger the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Entering,
    Visible,
}

impl RevealState {
    /// Advance `Hidden -> Entering`. Returns whether anything changed,
    /// so callers can tear down their visibility observer after the
    /// first fire.
    pub fn on_visible(&mut self) -> bool {
        if *self == RevealState::Hidden {
            *self = RevealState::Entering;
            true
        } else {
            false
        }
    }

    /// Mark the enter transition as finished.
    pub fn settle(&mut self) {
        if *self == RevealState::Entering {
            *self = RevealState::Visible;
        }
    }

    pub fn is_revealed(&self) -> bool {
        !matches!(self, RevealState::Hidden)
    }
}

/// Timed interpolation from 0 to a target value, rounding down each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCounter {
    pub target: u32,
    pub duration_ms: f64,
}

impl StatCounter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration_ms: COUNT_DURATION_MS,
        }
    }

    /// The displayed value `elapsed_ms` into the animation. Clamped so it
    /// never exceeds the target and holds the target once reached.
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if elapsed_ms <= 0.0 {
            return 0;
        }
        if elapsed_ms >= self.duration_ms {
            return self.target;
        }
        (f64::from(self.target) * (elapsed_ms / self.duration_ms)).floor() as u32
    }

    pub fn done_at(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed());

        assert!(state.on_visible());
        assert_eq!(state, RevealState::Entering);
        assert!(state.is_revealed());

        // Scroll-out/scroll-in does not re-trigger
        assert!(!state.on_visible());
        state.settle();
        assert_eq!(state, RevealState::Visible);
        assert!(!state.on_visible());
        assert_eq!(state, RevealState::Visible);
    }

    #[test]
    fn test_settle_requires_entering() {
        let mut state = RevealState::Hidden;
        state.settle();
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn test_counter_reaches_target_exactly() {
        let counter = StatCounter::new(60);

        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(-5.0), 0);
        assert_eq!(counter.value_at(COUNT_DURATION_MS), 60);
        assert_eq!(counter.value_at(COUNT_DURATION_MS * 10.0), 60);
        assert!(counter.done_at(COUNT_DURATION_MS));
        assert!(!counter.done_at(COUNT_DURATION_MS - 1.0));
    }

    #[test]
    fn test_counter_is_monotone_and_bounded() {
        let counter = StatCounter::new(40);
        let mut prev = 0;
        let mut elapsed = 0.0;
        while elapsed <= COUNT_DURATION_MS + 100.0 {
            let v = counter.value_at(elapsed);
            assert!(v >= prev);
            assert!(v <= counter.target);
            prev = v;
            // Roughly a 60fps frame
            elapsed += 16.7;
        }
        assert_eq!(prev, counter.target);
    }

    #[test]
    fn test_counter_rounds_down() {
        let counter = StatCounter::new(2);
        // Just shy of 50% should still floor to 0
        assert_eq!(counter.value_at(COUNT_DURATION_MS * 0.49), 0);
        assert_eq!(counter.value_at(COUNT_DURATION_MS * 0.51), 1);
    }

    #[test]
    fn test_zero_target_counter() {
        let counter = StatCounter::new(0);
        assert_eq!(counter.value_at(10.0), 0);
        assert_eq!(counter.value_at(COUNT_DURATION_MS), 0);
    }
}
