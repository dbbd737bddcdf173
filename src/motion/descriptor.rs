use std::time::Duration;

use super::{Easing, Playback, ScrollTrigger};

/// Per-index delay between siblings animating the same entrance.
pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(100);

const SLIDE_OFFSET: f64 = 50.0;

/// Visual properties an animation can drive. Offsets are in pixels,
/// rotation in degrees, width/height in percent of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    pub width_pct: Option<f64>,
    pub height_pct: Option<f64>,
}

impl VisualState {
    /// Where every element naturally sits.
    pub const REST: Self = Self {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
        opacity: 1.0,
        width_pct: None,
        height_pct: None,
    };

    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_width(mut self, pct: f64) -> Self {
        self.width_pct = Some(pct);
        self
    }

    pub const fn with_height(mut self, pct: f64) -> Self {
        self.height_pct = Some(pct);
        self
    }

    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        let mix_opt = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => Some(mix(a, b)),
            (_, b) => b,
        };
        Self {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            rotation: mix(self.rotation, to.rotation),
            scale: mix(self.scale, to.scale),
            opacity: mix(self.opacity, to.opacity),
            width_pct: mix_opt(self.width_pct, to.width_pct),
            height_pct: mix_opt(self.height_pct, to.height_pct),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.3})",
            self.x, self.y, self.rotation, self.scale
        )
    }

    /// Inline style declarations for this state.
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![
            ("transform", self.transform()),
            ("opacity", format!("{:.3}", self.opacity.clamp(0.0, 1.0))),
        ];
        if let Some(w) = self.width_pct {
            props.push(("width", format!("{:.2}%", w.max(0.0))));
        }
        if let Some(h) = self.height_pct {
            props.push(("height", format!("{:.2}%", h.max(0.0))));
        }
        props
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever { yoyo: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerMode {
    /// Starts as soon as it is registered.
    Immediate,
    /// Gated on the element crossing the trigger's lines.
    OnScroll(ScrollTrigger),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDescriptor {
    pub from: VisualState,
    pub to: VisualState,
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
    pub repeat: Repeat,
    pub mode: TriggerMode,
}

impl TransitionDescriptor {
    pub fn new(from: VisualState, to: VisualState, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            delay: Duration::ZERO,
            repeat: Repeat::Once,
            mode: TriggerMode::Immediate,
        }
    }

    /// Fade in while rising 50px into place once scrolled into view.
    pub fn fade_rise() -> Self {
        Self::new(
            VisualState::REST.with_y(SLIDE_OFFSET).with_opacity(0.0),
            VisualState::REST,
            Duration::from_secs(1),
            Easing::Power3Out,
        )
        .on_scroll(ScrollTrigger::ENTRANCE)
    }

    /// Fade in while sliding horizontally; even indices come from the left,
    /// odd ones from the right.
    pub fn fade_slide(index: usize) -> Self {
        let x = if index % 2 == 0 {
            -SLIDE_OFFSET
        } else {
            SLIDE_OFFSET
        };
        Self::new(
            VisualState::REST.with_x(x).with_opacity(0.0),
            VisualState::REST,
            Duration::from_secs(1),
            Easing::Power3Out,
        )
        .on_scroll(ScrollTrigger::ENTRANCE)
    }

    pub fn width_grow(pct: f64) -> Self {
        Self::new(
            VisualState::REST.with_width(0.0),
            VisualState::REST.with_width(pct),
            Duration::from_millis(1500),
            Easing::Power3Out,
        )
        .on_scroll(ScrollTrigger::START_ONLY)
    }

    pub fn height_grow() -> Self {
        Self::new(
            VisualState::REST.with_height(0.0),
            VisualState::REST.with_height(100.0),
            Duration::from_secs(2),
            Easing::Power3Out,
        )
        .on_scroll(ScrollTrigger::ENTRANCE)
    }

    /// Endless back-and-forth between rest and `to`, independent of scroll.
    pub fn oscillate(to: VisualState, duration: Duration) -> Self {
        Self::new(VisualState::REST, to, duration, Easing::Power2InOut).repeating(true)
    }

    /// Endless one-way drift from rest to `to`, restarting each cycle.
    pub fn drift(to: VisualState, duration: Duration) -> Self {
        Self::new(VisualState::REST, to, duration, Easing::Power2Out).repeating(false)
    }

    /// Entrance from `from` into the natural resting state.
    pub fn enter_from(from: VisualState, duration: Duration, easing: Easing) -> Self {
        Self::new(from, VisualState::REST, duration, easing)
    }

    pub fn on_scroll(mut self, trigger: ScrollTrigger) -> Self {
        self.mode = TriggerMode::OnScroll(trigger);
        self
    }

    pub fn repeating(mut self, yoyo: bool) -> Self {
        self.repeat = Repeat::Forever { yoyo };
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Adds `step * index` to the delay.
    pub fn staggered(mut self, index: usize, step: Duration) -> Self {
        self.delay += step * index as u32;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Playback state of one descriptor on one element.
#[derive(Debug, Clone)]
pub struct Tween {
    descriptor: TransitionDescriptor,
    progress: f64,
    delay_left: f64,
    direction: Direction,
    running: bool,
}

impl Tween {
    /// A paused tween sitting at the descriptor's start state.
    pub fn new(descriptor: TransitionDescriptor) -> Self {
        Self {
            descriptor,
            progress: 0.0,
            delay_left: 0.0,
            direction: Direction::Forward,
            running: false,
        }
    }

    pub fn descriptor(&self) -> &TransitionDescriptor {
        &self.descriptor
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> VisualState {
        let eased = self.descriptor.easing.apply(self.progress);
        self.descriptor.from.lerp(&self.descriptor.to, eased)
    }

    pub fn apply(&mut self, playback: Playback) {
        match playback {
            Playback::Play => {
                if self.progress == 0.0 {
                    self.delay_left = self.descriptor.delay.as_secs_f64();
                }
                self.direction = Direction::Forward;
                self.running = self.progress < 1.0 || self.is_repeating();
            }
            Playback::Reverse => {
                self.delay_left = 0.0;
                self.direction = Direction::Backward;
                self.running = self.progress > 0.0;
            }
            Playback::Restart => {
                self.progress = 0.0;
                self.delay_left = self.descriptor.delay.as_secs_f64();
                self.direction = Direction::Forward;
                self.running = true;
            }
            Playback::Reset => {
                self.progress = 0.0;
                self.running = false;
            }
            Playback::Complete => {
                self.progress = 1.0;
                self.running = false;
            }
            Playback::None => {}
        }
    }

    fn is_repeating(&self) -> bool {
        matches!(self.descriptor.repeat, Repeat::Forever { .. })
    }

    /// Moves the playhead by `dt` and returns the resulting state.
    pub fn advance(&mut self, dt: Duration) -> VisualState {
        if !self.running {
            return self.state();
        }
        let mut dt = dt.as_secs_f64();
        if self.direction == Direction::Forward && self.delay_left > 0.0 {
            let consumed = dt.min(self.delay_left);
            self.delay_left -= consumed;
            dt -= consumed;
        }
        let duration = self.descriptor.duration.as_secs_f64();
        let mut remaining = if duration > 0.0 { dt / duration } else { 1.0 };
        if self.is_repeating() {
            // a full yoyo cycle spans two units
            remaining %= 2.0;
        }
        while remaining > 0.0 && self.running {
            match self.direction {
                Direction::Forward => {
                    let room = 1.0 - self.progress;
                    if remaining < room {
                        self.progress += remaining;
                        remaining = 0.0;
                    } else {
                        self.progress = 1.0;
                        remaining -= room;
                        self.finish_forward();
                    }
                }
                Direction::Backward => {
                    if remaining < self.progress {
                        self.progress -= remaining;
                        remaining = 0.0;
                    } else {
                        remaining -= self.progress;
                        self.progress = 0.0;
                        self.finish_backward();
                    }
                }
            }
        }
        self.state()
    }

    fn finish_forward(&mut self) {
        match self.descriptor.repeat {
            Repeat::Once => self.running = false,
            Repeat::Forever { yoyo: true } => self.direction = Direction::Backward,
            Repeat::Forever { yoyo: false } => self.progress = 0.0,
        }
    }

    fn finish_backward(&mut self) {
        match self.descriptor.repeat {
            Repeat::Once => self.running = false,
            Repeat::Forever { yoyo: true } => self.direction = Direction::Forward,
            Repeat::Forever { yoyo: false } => self.progress = 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_fade_rise_shape() {
        let d = TransitionDescriptor::fade_rise();
        assert_eq!(d.from.y, 50.0);
        assert_eq!(d.from.opacity, 0.0);
        assert_eq!(d.to, VisualState::REST);
        assert_eq!(d.duration, Duration::from_secs(1));
        assert_eq!(d.mode, TriggerMode::OnScroll(ScrollTrigger::ENTRANCE));
    }

    #[test]
    fn test_fade_slide_alternates() {
        let xs = (0..4)
            .map(|i| TransitionDescriptor::fade_slide(i).from.x)
            .collect::<Vec<_>>();
        assert_eq!(xs, vec![-50.0, 50.0, -50.0, 50.0]);
    }

    #[test]
    fn test_stagger_accumulates() {
        let d = TransitionDescriptor::fade_rise()
            .with_delay(ms(50))
            .staggered(3, ENTRANCE_STAGGER);
        assert_eq!(d.delay, ms(350));
    }

    #[test]
    fn test_width_grow_styles() {
        let d = TransitionDescriptor::width_grow(95.0);
        let start = d.from.style_properties();
        let end = d.to.style_properties();
        assert!(start.contains(&("width", "0.00%".to_string())));
        assert!(end.contains(&("width", "95.00%".to_string())));
        assert_eq!(d.mode, TriggerMode::OnScroll(ScrollTrigger::START_ONLY));
    }

    #[test]
    fn test_transform_string() {
        let s = VisualState::REST.with_x(10.0).with_y(-20.0).with_rotation(5.0);
        assert_eq!(
            s.transform(),
            "translate(10.00px, -20.00px) rotate(5.00deg) scale(1.000)"
        );
    }

    #[test]
    fn test_tween_waits_for_play() {
        let mut tween = Tween::new(TransitionDescriptor::fade_rise());
        let state = tween.advance(ms(500));
        assert_eq!(state.opacity, 0.0);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_tween_plays_to_rest() {
        let mut tween = Tween::new(TransitionDescriptor::fade_rise());
        tween.apply(Playback::Play);
        let mid = tween.advance(ms(500));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        let end = tween.advance(ms(600));
        assert_eq!(end, VisualState::REST);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_delay_is_consumed_first() {
        let mut tween = Tween::new(TransitionDescriptor::fade_rise().with_delay(ms(300)));
        tween.apply(Playback::Play);
        assert_eq!(tween.advance(ms(300)).opacity, 0.0);
        assert!(tween.advance(ms(100)).opacity > 0.0);
    }

    #[test]
    fn test_reverse_from_midway() {
        let mut tween = Tween::new(TransitionDescriptor::fade_rise().with_delay(ms(200)));
        tween.apply(Playback::Play);
        tween.advance(ms(700));
        assert!(close(tween.progress(), 0.5));
        tween.apply(Playback::Reverse);
        // no delay when reversing
        tween.advance(ms(250));
        assert!(close(tween.progress(), 0.25));
        let back = tween.advance(ms(1000));
        assert_eq!(back.opacity, 0.0);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_reverse_at_start_is_noop() {
        let mut tween = Tween::new(TransitionDescriptor::fade_rise());
        tween.apply(Playback::Reverse);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_yoyo_bounces() {
        let to = VisualState::REST.with_y(10.0);
        let mut tween = Tween::new(TransitionDescriptor::oscillate(to, Duration::from_secs(2)));
        tween.apply(Playback::Play);
        assert!(close(tween.advance(Duration::from_secs(2)).y, 10.0));
        assert_eq!(tween.direction(), Direction::Backward);
        assert!(close(tween.advance(Duration::from_secs(1)).y, 5.0));
        assert!(close(tween.advance(Duration::from_secs(1)).y, 0.0));
        assert_eq!(tween.direction(), Direction::Forward);
        assert!(tween.is_running());
    }

    #[test]
    fn test_yoyo_survives_long_frames() {
        let to = VisualState::REST.with_y(-20.0);
        let mut tween = Tween::new(TransitionDescriptor::oscillate(to, Duration::from_secs(4)));
        tween.apply(Playback::Play);
        tween.advance(Duration::from_secs(4 * 1000 + 2));
        assert!(close(tween.progress(), 0.5));
        assert_eq!(tween.direction(), Direction::Forward);
    }

    #[test]
    fn test_drift_wraps_without_yoyo() {
        let to = VisualState::REST.with_y(-100.0).with_opacity(0.0);
        let mut tween = Tween::new(TransitionDescriptor::drift(to, Duration::from_secs(4)));
        tween.apply(Playback::Play);
        tween.advance(Duration::from_secs(5));
        assert!(close(tween.progress(), 0.25));
        assert_eq!(tween.direction(), Direction::Forward);
    }

    #[test]
    fn test_complete_and_reset() {
        let mut tween = Tween::new(TransitionDescriptor::height_grow());
        tween.apply(Playback::Complete);
        assert_eq!(tween.state().height_pct, Some(100.0));
        tween.apply(Playback::Reset);
        assert_eq!(tween.state().height_pct, Some(0.0));
        tween.apply(Playback::Restart);
        assert!(tween.is_running());
    }
}
