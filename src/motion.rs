//! Declarative motion: transition descriptors, scroll triggers, timelines
//! and the orchestrator that binds them to a viewport and an animator.
//!
//! Nothing here touches the DOM. The browser side lives in
//! `app::motion`, which implements [`ViewportObserver`] and [`Animator`].

mod descriptor;
mod easing;
mod orchestrator;
mod scroll;
mod timeline;
mod trigger;

use thiserror::Error;

pub use descriptor::{
    Direction, Repeat, TransitionDescriptor, TriggerMode, Tween, VisualState, ENTRANCE_STAGGER,
};
pub use easing::Easing;
pub use orchestrator::{Animator, EdgeCallback, ObserverId, ScrollOrchestrator, ViewportObserver};
pub use scroll::{ScrollPlan, HEADER_OFFSET, SCROLL_DURATION};
pub use timeline::{Position, Timeline, TimelineEntry};
pub use trigger::{
    ElementEdge, ElementRect, Playback, Region, ScrollTrigger, Threshold, ToggleActions,
    TriggerEdge, TriggerState,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("unknown easing: {0}")]
    UnknownEasing(String),
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),
    #[error("invalid toggle action: {0}")]
    InvalidToggleAction(String),
    #[error("invalid percentage: {0}")]
    InvalidPercentage(String),
}

/// Parses a CSS-style percentage such as `"95%"` into `95.0`.
///
/// Used for the `data-width` attribute carried by skill bars.
pub fn parse_percentage(raw: &str) -> Result<f64, MotionError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() && (0.0..=100.0).contains(&v) => Ok(v),
        _ => Err(MotionError::InvalidPercentage(raw.to_string())),
    }
}

const SCATTER_STEPS: [f64; 4] = [
    0.618_033_988_749_895,
    0.754_877_666_246_693,
    0.569_840_290_998_053,
    0.438_450_061_170_088,
];

/// Deterministic stand-in for `Math.random()`: a value in `[0, 1)` that is
/// the same for a given `index` and `channel` on server and client.
///
/// Consecutive indices are spread evenly over the interval. Channels beyond
/// the fourth reuse the earlier sequences.
pub fn scatter(index: usize, channel: usize) -> f64 {
    let step = SCATTER_STEPS[channel % SCATTER_STEPS.len()];
    ((index + 1) as f64 * step).fract()
}
