use std::str::FromStr;

use super::MotionError;

/// Which edge of the observed element a threshold measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementEdge {
    Top,
    Center,
    Bottom,
}

/// A line across the viewport, e.g. `"top 80%"`: the element's top edge
/// crossing 80% of the viewport height from its top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub edge: ElementEdge,
    pub viewport_pct: f64,
}

impl Threshold {
    pub const fn new(edge: ElementEdge, viewport_pct: f64) -> Self {
        Self { edge, viewport_pct }
    }

    fn passed(&self, rect: ElementRect, viewport_height: f64) -> bool {
        let line = viewport_height * self.viewport_pct / 100.0;
        rect.edge(self.edge) <= line
    }
}

impl FromStr for Threshold {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MotionError::InvalidThreshold(s.to_string());
        let mut parts = s.split_whitespace();
        let edge = match parts.next() {
            Some("top") => ElementEdge::Top,
            Some("center") => ElementEdge::Center,
            Some("bottom") => ElementEdge::Bottom,
            _ => return Err(err()),
        };
        let pct = parts
            .next()
            .and_then(|p| p.strip_suffix('%'))
            .and_then(|p| p.parse::<f64>().ok())
            .ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self::new(edge, pct))
    }
}

/// Element bounds relative to the top of the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
}

impl ElementRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    fn edge(&self, edge: ElementEdge) -> f64 {
        match edge {
            ElementEdge::Top => self.top,
            ElementEdge::Center => (self.top + self.bottom) / 2.0,
            ElementEdge::Bottom => self.bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Before,
    Active,
    After,
}

/// Crossing events, named the way scroll-trigger libraries name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEdge {
    /// Start line crossed scrolling down.
    Enter,
    /// End line crossed scrolling down.
    Leave,
    /// End line crossed scrolling back up.
    EnterBack,
    /// Start line crossed scrolling back up.
    LeaveBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Play,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for Playback {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(Self::Play),
            "reverse" => Ok(Self::Reverse),
            "restart" => Ok(Self::Restart),
            "reset" => Ok(Self::Reset),
            "complete" => Ok(Self::Complete),
            "none" => Ok(Self::None),
            other => Err(MotionError::InvalidToggleAction(other.to_string())),
        }
    }
}

/// What to do on each of the four edges, in `enter leave enterBack leaveBack`
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Playback,
    pub on_leave: Playback,
    pub on_enter_back: Playback,
    pub on_leave_back: Playback,
}

impl ToggleActions {
    /// `play none none reverse`: play once when scrolled into view, undo
    /// when scrolled back above the start line.
    pub const PLAY_THEN_REVERSE: Self = Self {
        on_enter: Playback::Play,
        on_leave: Playback::None,
        on_enter_back: Playback::None,
        on_leave_back: Playback::Reverse,
    };

    pub fn action_for(&self, edge: TriggerEdge) -> Playback {
        match edge {
            TriggerEdge::Enter => self.on_enter,
            TriggerEdge::Leave => self.on_leave,
            TriggerEdge::EnterBack => self.on_enter_back,
            TriggerEdge::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_THEN_REVERSE
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(Playback::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        match actions[..] {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(MotionError::InvalidToggleAction(s.to_string())),
        }
    }
}

/// Visibility rule for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    pub start: Threshold,
    pub end: Option<Threshold>,
    pub actions: ToggleActions,
}

impl ScrollTrigger {
    /// `start: "top 80%"`, `end: "bottom 20%"`, `play none none reverse`.
    pub const ENTRANCE: Self = Self {
        start: Threshold::new(ElementEdge::Top, 80.0),
        end: Some(Threshold::new(ElementEdge::Bottom, 20.0)),
        actions: ToggleActions::PLAY_THEN_REVERSE,
    };

    /// Same start line without an end line; used by skill bars.
    pub const START_ONLY: Self = Self {
        start: Threshold::new(ElementEdge::Top, 80.0),
        end: None,
        actions: ToggleActions::PLAY_THEN_REVERSE,
    };

    pub fn region(&self, rect: ElementRect, viewport_height: f64) -> Region {
        if !self.start.passed(rect, viewport_height) {
            Region::Before
        } else if self
            .end
            .is_some_and(|end| end.passed(rect, viewport_height))
        {
            Region::After
        } else {
            Region::Active
        }
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::ENTRANCE
    }
}

/// Tracks which region an element was last seen in and reports crossings.
#[derive(Debug, Clone)]
pub struct TriggerState {
    trigger: ScrollTrigger,
    region: Region,
}

impl TriggerState {
    pub fn new(trigger: ScrollTrigger) -> Self {
        Self {
            trigger,
            region: Region::Before,
        }
    }

    pub fn trigger(&self) -> &ScrollTrigger {
        &self.trigger
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Moves to the region implied by `rect` and returns the edges crossed
    /// on the way, in order. A jump straight past both lines yields both
    /// edges.
    pub fn update(&mut self, rect: ElementRect, viewport_height: f64) -> Vec<TriggerEdge> {
        let next = self.trigger.region(rect, viewport_height);
        let edges = match (self.region, next) {
            (Region::Before, Region::Active) => vec![TriggerEdge::Enter],
            (Region::Before, Region::After) => vec![TriggerEdge::Enter, TriggerEdge::Leave],
            (Region::Active, Region::After) => vec![TriggerEdge::Leave],
            (Region::Active, Region::Before) => vec![TriggerEdge::LeaveBack],
            (Region::After, Region::Active) => vec![TriggerEdge::EnterBack],
            (Region::After, Region::Before) => {
                vec![TriggerEdge::EnterBack, TriggerEdge::LeaveBack]
            }
            _ => Vec::new(),
        };
        self.region = next;
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn rect_at(top: f64) -> ElementRect {
        ElementRect::new(top, 200.0)
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(
            "top 80%".parse(),
            Ok(Threshold::new(ElementEdge::Top, 80.0))
        );
        assert_eq!(
            "bottom 20%".parse(),
            Ok(Threshold::new(ElementEdge::Bottom, 20.0))
        );
        assert!("top".parse::<Threshold>().is_err());
        assert!("left 80%".parse::<Threshold>().is_err());
        assert!("top 80".parse::<Threshold>().is_err());
        assert!("top 80% extra".parse::<Threshold>().is_err());
    }

    #[test]
    fn test_parse_toggle_actions() {
        assert_eq!(
            "play none none reverse".parse(),
            Ok(ToggleActions::PLAY_THEN_REVERSE)
        );
        let restart: ToggleActions = "restart none complete reset".parse().unwrap();
        assert_eq!(restart.action_for(TriggerEdge::Enter), Playback::Restart);
        assert_eq!(restart.action_for(TriggerEdge::EnterBack), Playback::Complete);
        assert_eq!(restart.action_for(TriggerEdge::LeaveBack), Playback::Reset);
        assert!("play pause none none".parse::<ToggleActions>().is_err());
        assert!("play none".parse::<ToggleActions>().is_err());
    }

    #[test]
    fn test_regions() {
        let t = ScrollTrigger::ENTRANCE;
        assert_eq!(t.region(rect_at(900.0), VH), Region::Before);
        assert_eq!(t.region(rect_at(800.0), VH), Region::Active);
        assert_eq!(t.region(rect_at(300.0), VH), Region::Active);
        // bottom at 200 == 20% line
        assert_eq!(t.region(rect_at(0.0), VH), Region::After);
        assert_eq!(t.region(rect_at(-500.0), VH), Region::After);
    }

    #[test]
    fn test_start_only_never_leaves() {
        let t = ScrollTrigger::START_ONLY;
        assert_eq!(t.region(rect_at(-5000.0), VH), Region::Active);
    }

    #[test]
    fn test_scroll_down_then_back_up() {
        let mut state = TriggerState::new(ScrollTrigger::ENTRANCE);
        assert!(state.update(rect_at(1200.0), VH).is_empty());
        assert_eq!(state.update(rect_at(700.0), VH), vec![TriggerEdge::Enter]);
        assert!(state.update(rect_at(500.0), VH).is_empty());
        assert_eq!(state.update(rect_at(-100.0), VH), vec![TriggerEdge::Leave]);
        assert_eq!(
            state.update(rect_at(400.0), VH),
            vec![TriggerEdge::EnterBack]
        );
        assert_eq!(
            state.update(rect_at(900.0), VH),
            vec![TriggerEdge::LeaveBack]
        );
        assert_eq!(state.region(), Region::Before);
    }

    #[test]
    fn test_jump_reports_both_edges() {
        let mut state = TriggerState::new(ScrollTrigger::ENTRANCE);
        assert_eq!(
            state.update(rect_at(-900.0), VH),
            vec![TriggerEdge::Enter, TriggerEdge::Leave]
        );
        assert_eq!(
            state.update(rect_at(2000.0), VH),
            vec![TriggerEdge::EnterBack, TriggerEdge::LeaveBack]
        );
    }

    #[test]
    fn test_play_then_reverse_mapping() {
        let a = ToggleActions::PLAY_THEN_REVERSE;
        assert_eq!(a.action_for(TriggerEdge::Enter), Playback::Play);
        assert_eq!(a.action_for(TriggerEdge::Leave), Playback::None);
        assert_eq!(a.action_for(TriggerEdge::EnterBack), Playback::None);
        assert_eq!(a.action_for(TriggerEdge::LeaveBack), Playback::Reverse);
    }
}
