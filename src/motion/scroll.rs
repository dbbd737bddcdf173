use std::time::Duration;

use super::Easing;

/// Height of the fixed header; scroll targets land this far below it.
pub const HEADER_OFFSET: f64 = 80.0;
pub const SCROLL_DURATION: Duration = Duration::from_secs(1);

/// A time-based scroll from one vertical position to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan {
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
}

impl ScrollPlan {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            duration: SCROLL_DURATION,
            easing: Easing::Power2Out,
        }
    }

    /// Scroll so the element whose top is `element_top` (relative to the
    /// viewport) ends up just below the fixed header.
    pub fn to_element(current_scroll: f64, element_top: f64) -> Self {
        let target = (current_scroll + element_top - HEADER_OFFSET).max(0.0);
        Self::new(current_scroll, target)
    }

    pub fn to_top(current_scroll: f64) -> Self {
        Self::new(current_scroll, 0.0)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn position_at(&self, elapsed: Duration) -> f64 {
        let duration = self.duration.as_secs_f64();
        let t = if duration > 0.0 {
            elapsed.as_secs_f64() / duration
        } else {
            1.0
        };
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_offset_by_header() {
        let plan = ScrollPlan::to_element(100.0, 1000.0);
        assert_eq!(plan.target(), 1020.0);
    }

    #[test]
    fn test_target_clamps_at_page_top() {
        let plan = ScrollPlan::to_element(0.0, 30.0);
        assert_eq!(plan.target(), 0.0);
    }

    #[test]
    fn test_position_moves_toward_target() {
        let plan = ScrollPlan::to_element(0.0, 1080.0);
        assert_eq!(plan.position_at(Duration::ZERO), 0.0);
        let quarter = plan.position_at(Duration::from_millis(250));
        let half = plan.position_at(Duration::from_millis(500));
        assert!(0.0 < quarter && quarter < half && half < 1000.0);
        assert_eq!(plan.position_at(SCROLL_DURATION), 1000.0);
        assert_eq!(plan.position_at(Duration::from_secs(5)), 1000.0);
        assert!(plan.is_finished(SCROLL_DURATION));
        assert!(!plan.is_finished(Duration::from_millis(999)));
    }

    #[test]
    fn test_scroll_to_top() {
        let plan = ScrollPlan::to_top(2400.0);
        assert_eq!(plan.target(), 0.0);
        assert!(plan.position_at(Duration::from_millis(500)) < 2400.0);
    }
}
