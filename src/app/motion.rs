//! Browser side of [`crate::motion`]: a window-backed viewport observer, a
//! `requestAnimationFrame` animator and the smooth scroller.

use std::{cell::RefCell, rc::Rc, time::Duration};

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::{
    motion::{
        Animator, EdgeCallback, ElementRect, ObserverId, Playback, ScrollOrchestrator,
        ScrollPlan, ScrollTrigger, Timeline, TransitionDescriptor, TriggerState, Tween,
        ViewportObserver, VisualState,
    },
    nav::anchor_target,
};

pub type SectionMotion = ScrollOrchestrator<WindowViewport, FrameAnimator>;

fn now_ms() -> f64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_default()
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

fn current_scroll() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let nodes = match root.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("bad selector {selector}: {e:?}");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

struct Observation {
    id: ObserverId,
    target: HtmlElement,
    state: TriggerState,
    on_edge: EdgeCallback,
}

impl Observation {
    fn evaluate(&mut self, viewport_height: f64) {
        let rect = self.target.get_bounding_client_rect();
        let rect = ElementRect::new(rect.top(), rect.height());
        for edge in self.state.update(rect, viewport_height) {
            (self.on_edge)(edge);
        }
    }
}

#[derive(Default)]
struct Observations {
    next_id: u64,
    entries: Vec<Observation>,
}

impl Observations {
    fn evaluate_all(&mut self) {
        let vh = viewport_height();
        for obs in &mut self.entries {
            obs.evaluate(vh);
        }
    }
}

/// Watches elements against the window's scroll position. Scroll and resize
/// both re-evaluate every observed element.
pub struct WindowViewport {
    observations: Rc<RefCell<Observations>>,
    listeners: Vec<WindowListenerHandle>,
}

impl WindowViewport {
    pub fn new() -> Self {
        let observations = Rc::new(RefCell::new(Observations::default()));
        let listeners = vec![
            {
                let observations = Rc::clone(&observations);
                window_event_listener(ev::scroll, move |_| {
                    observations.borrow_mut().evaluate_all()
                })
            },
            {
                let observations = Rc::clone(&observations);
                window_event_listener(ev::resize, move |_| {
                    observations.borrow_mut().evaluate_all()
                })
            },
        ];
        Self {
            observations,
            listeners,
        }
    }
}

impl Default for WindowViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportObserver for WindowViewport {
    type Target = HtmlElement;

    fn observe(
        &mut self,
        target: &HtmlElement,
        trigger: ScrollTrigger,
        on_edge: EdgeCallback,
    ) -> ObserverId {
        let mut observations = self.observations.borrow_mut();
        let id = ObserverId(observations.next_id);
        observations.next_id += 1;
        let mut observation = Observation {
            id,
            target: target.clone(),
            state: TriggerState::new(trigger),
            on_edge,
        };
        // elements already past the start line play right away
        observation.evaluate(viewport_height());
        observations.entries.push(observation);
        id
    }

    fn release(&mut self, id: ObserverId) {
        self.observations
            .borrow_mut()
            .entries
            .retain(|obs| obs.id != id);
    }
}

impl Drop for WindowViewport {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
        self.observations.borrow_mut().entries.clear();
    }
}

fn write_state(target: &HtmlElement, state: &VisualState) {
    let style = target.style();
    for (property, value) in state.style_properties() {
        if let Err(e) = style.set_property(property, &value) {
            log::warn!("could not set {property}: {e:?}");
        }
    }
}

struct Track {
    target: HtmlElement,
    tween: Tween,
    last_frame: Option<f64>,
    frame: Option<AnimationFrameRequestHandle>,
}

type SharedTrack = Rc<RefCell<Track>>;

fn schedule(track: SharedTrack) {
    let next = Rc::clone(&track);
    match request_animation_frame_with_handle(move || step(next)) {
        Ok(handle) => track.borrow_mut().frame = Some(handle),
        Err(e) => log::warn!("could not schedule animation frame: {e:?}"),
    }
}

fn step(track: SharedTrack) {
    let now = now_ms();
    let running = {
        let mut t = track.borrow_mut();
        t.frame = None;
        let elapsed_ms = t.last_frame.map_or(0.0, |last| (now - last).max(0.0));
        t.last_frame = Some(now);
        let state = t.tween.advance(Duration::from_secs_f64(elapsed_ms / 1000.0));
        write_state(&t.target, &state);
        if !t.tween.is_running() {
            t.last_frame = None;
        }
        t.tween.is_running()
    };
    if running {
        schedule(track);
    }
}

/// Tweens inline styles, one frame loop per animated element.
#[derive(Default)]
pub struct FrameAnimator {
    tracks: RefCell<Vec<SharedTrack>>,
}

impl FrameAnimator {
    fn track_for(&self, target: &HtmlElement, descriptor: &TransitionDescriptor) -> SharedTrack {
        let mut tracks = self.tracks.borrow_mut();
        if let Some(track) = tracks.iter().find(|t| t.borrow().target == *target) {
            return Rc::clone(track);
        }
        let track = Rc::new(RefCell::new(Track {
            target: target.clone(),
            tween: Tween::new(descriptor.clone()),
            last_frame: None,
            frame: None,
        }));
        tracks.push(Rc::clone(&track));
        track
    }
}

impl Animator for FrameAnimator {
    type Target = HtmlElement;

    fn apply(&self, target: &HtmlElement, state: &VisualState) {
        write_state(target, state);
    }

    fn play(&self, target: &HtmlElement, descriptor: &TransitionDescriptor, playback: Playback) {
        let track = self.track_for(target, descriptor);
        let idle = {
            let mut t = track.borrow_mut();
            t.tween.apply(playback);
            if !t.tween.is_running() {
                write_state(&t.target, &t.tween.state());
            }
            t.tween.is_running() && t.frame.is_none()
        };
        if idle {
            schedule(track);
        }
    }

    fn cancel(&self, target: &HtmlElement) {
        self.tracks.borrow_mut().retain(|track| {
            let mut t = track.borrow_mut();
            if t.target != *target {
                return true;
            }
            if let Some(handle) = t.frame.take() {
                handle.cancel();
            }
            false
        });
    }
}

/// Adds every step of `timeline` under `root`, keyed by CSS selector. Steps
/// whose elements are missing are skipped.
pub fn register_timeline(
    motion: &mut SectionMotion,
    root: &Element,
    timeline: &Timeline<&'static str>,
) -> usize {
    let mut registered = 0;
    for entry in timeline.entries() {
        let targets = query_all(root, entry.key);
        if targets.is_empty() {
            log::debug!("timeline step {} has no elements", entry.key);
        }
        registered += motion.register_each(targets, |i| entry.descriptor_at(i));
    }
    registered
}

/// Installs the animations of one section once it is mounted and tears them
/// down when it unmounts.
pub fn use_section_motion(
    root: NodeRef<html::Section>,
    install: impl Fn(&mut SectionMotion, &HtmlElement) + 'static,
) {
    let orchestrator = StoredValue::new_local(None::<SectionMotion>);

    Effect::new(move |_| {
        let Some(section) = root.get() else {
            return;
        };
        let mut motion = ScrollOrchestrator::new(WindowViewport::new(), Rc::new(FrameAnimator::default()));
        install(&mut motion, &section);
        log::debug!(
            "section #{} animating {} elements, {} on scroll",
            section.id(),
            motion.animated_count(),
            motion.observer_count()
        );
        // replacing a previous orchestrator drops it, which tears it down
        orchestrator.set_value(Some(motion));
    });

    on_cleanup(move || {
        orchestrator.try_update_value(|o| {
            if let Some(mut motion) = o.take() {
                motion.teardown();
            }
        });
    });
}

#[derive(Default)]
struct ScrollState {
    generation: u64,
    frame: Option<AnimationFrameRequestHandle>,
}

/// Animates the window's scroll position. Starting a scroll cancels the one
/// in flight.
#[derive(Clone, Default)]
pub struct SmoothScroller {
    state: Rc<RefCell<ScrollState>>,
}

impl SmoothScroller {
    /// Scrolls to the element with `id`, landing below the fixed header.
    /// Returns `false` if there is no such element.
    pub fn scroll_to_id(&self, id: &str) -> bool {
        let Some(target) = document().get_element_by_id(id) else {
            log::debug!("no element #{id} to scroll to");
            return false;
        };
        let top = target.get_bounding_client_rect().top();
        self.run(ScrollPlan::to_element(current_scroll(), top));
        true
    }

    pub fn scroll_to_top(&self) {
        self.run(ScrollPlan::to_top(current_scroll()));
    }

    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        if let Some(handle) = state.frame.take() {
            handle.cancel();
        }
    }

    fn run(&self, plan: ScrollPlan) {
        self.cancel();
        let generation = self.state.borrow().generation;
        self.frame(plan, now_ms(), generation);
    }

    fn frame(&self, plan: ScrollPlan, started: f64, generation: u64) {
        let this = self.clone();
        let res = request_animation_frame_with_handle(move || {
            if this.state.borrow().generation != generation {
                return;
            }
            let elapsed = Duration::from_secs_f64(((now_ms() - started) / 1000.0).max(0.0));
            window().scroll_to_with_x_and_y(0.0, plan.position_at(elapsed));
            if plan.is_finished(elapsed) {
                this.state.borrow_mut().frame = None;
            } else {
                this.frame(plan, started, generation);
            }
        });
        match res {
            Ok(handle) => self.state.borrow_mut().frame = Some(handle),
            Err(e) => log::warn!("could not schedule scroll frame: {e:?}"),
        }
    }
}

/// Page-wide handle to the smooth scroller.
#[derive(Clone, Copy)]
pub struct ScrollContext(StoredValue<SmoothScroller, LocalStorage>);

impl ScrollContext {
    pub fn scroll_to(&self, id: &str) -> bool {
        self.0.with_value(|s| s.scroll_to_id(id))
    }

    pub fn scroll_to_top(&self) {
        self.0.with_value(SmoothScroller::scroll_to_top);
    }
}

pub fn use_scroller() -> ScrollContext {
    expect_context::<ScrollContext>()
}

/// Provides the scroller and routes every in-page anchor click through it.
///
/// Clicks on `a[href^='#']` never jump. They animate when the target exists.
pub fn provide_smooth_scrolling() -> ScrollContext {
    let scroller = ScrollContext(StoredValue::new_local(SmoothScroller::default()));
    provide_context(scroller);

    let _ = use_event_listener(use_window(), ev::click, move |ev: MouseEvent| {
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        ev.prevent_default();
        if let Some(id) = anchor
            .get_attribute("href")
            .as_deref()
            .and_then(anchor_target)
        {
            scroller.scroll_to(id);
        }
    });

    scroller
}
