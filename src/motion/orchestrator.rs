use std::rc::Rc;

use super::{Playback, ScrollTrigger, TransitionDescriptor, TriggerEdge, TriggerMode, VisualState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

pub type EdgeCallback = Box<dyn FnMut(TriggerEdge)>;

/// Reports when observed elements cross their trigger lines.
pub trait ViewportObserver {
    type Target;

    fn observe(
        &mut self,
        target: &Self::Target,
        trigger: ScrollTrigger,
        on_edge: EdgeCallback,
    ) -> ObserverId;

    /// After this returns the callback registered under `id` never runs
    /// again.
    fn release(&mut self, id: ObserverId);
}

/// Drives visual state on targets.
pub trait Animator {
    type Target;

    /// Snaps `target` to `state` without animating.
    fn apply(&self, target: &Self::Target, state: &VisualState);

    fn play(&self, target: &Self::Target, descriptor: &TransitionDescriptor, playback: Playback);

    /// Stops anything running on `target`.
    fn cancel(&self, target: &Self::Target);
}

/// Registers entrance transitions for one mounted section and releases them
/// all when the section goes away.
pub struct ScrollOrchestrator<V, A>
where
    V: ViewportObserver,
    A: Animator<Target = V::Target>,
{
    viewport: V,
    animator: Rc<A>,
    observers: Vec<ObserverId>,
    animated: Vec<V::Target>,
}

impl<V, A> ScrollOrchestrator<V, A>
where
    V: ViewportObserver,
    V::Target: Clone + 'static,
    A: Animator<Target = V::Target> + 'static,
{
    pub fn new(viewport: V, animator: Rc<A>) -> Self {
        Self {
            viewport,
            animator,
            observers: Vec::new(),
            animated: Vec::new(),
        }
    }

    /// Schedules `descriptor` on `target`. A missing target is skipped and
    /// reported as `false`.
    pub fn register(&mut self, target: Option<V::Target>, descriptor: TransitionDescriptor) -> bool {
        let Some(target) = target else {
            log::debug!("skipping animation for missing element");
            return false;
        };
        self.animator.apply(&target, &descriptor.from);
        let mode = descriptor.mode;
        match mode {
            TriggerMode::Immediate => {
                self.animator.play(&target, &descriptor, Playback::Play);
            }
            TriggerMode::OnScroll(trigger) => {
                let animator = Rc::clone(&self.animator);
                let el = target.clone();
                let on_edge = Box::new(move |edge: TriggerEdge| {
                    let action = trigger.actions.action_for(edge);
                    if action != Playback::None {
                        animator.play(&el, &descriptor, action);
                    }
                });
                let id = self.viewport.observe(&target, trigger, on_edge);
                self.observers.push(id);
            }
        }
        self.animated.push(target);
        true
    }

    /// Registers one descriptor per target, built from the target's index.
    /// Returns how many were registered.
    pub fn register_each(
        &mut self,
        targets: impl IntoIterator<Item = V::Target>,
        descriptor_for: impl Fn(usize) -> TransitionDescriptor,
    ) -> usize {
        let mut registered = 0;
        for (i, target) in targets.into_iter().enumerate() {
            if self.register(Some(target), descriptor_for(i)) {
                registered += 1;
            }
        }
        registered
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn animated_count(&self) -> usize {
        self.animated.len()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }
}

impl<V, A> ScrollOrchestrator<V, A>
where
    V: ViewportObserver,
    A: Animator<Target = V::Target>,
{
    /// Releases every observer and stops every animation registered here.
    pub fn teardown(&mut self) {
        for id in self.observers.drain(..) {
            self.viewport.release(id);
        }
        for target in self.animated.drain(..) {
            self.animator.cancel(&target);
        }
    }
}

impl<V, A> Drop for ScrollOrchestrator<V, A>
where
    V: ViewportObserver,
    A: Animator<Target = V::Target>,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;
    use crate::motion::{ElementRect, TriggerState, ENTRANCE_STAGGER};

    struct Subscription {
        target: &'static str,
        state: TriggerState,
        on_edge: EdgeCallback,
    }

    #[derive(Default)]
    struct FakeViewport {
        next_id: u64,
        subs: Rc<RefCell<HashMap<ObserverId, Subscription>>>,
    }

    impl FakeViewport {
        fn handle(&self) -> Rc<RefCell<HashMap<ObserverId, Subscription>>> {
            Rc::clone(&self.subs)
        }
    }

    fn scroll(subs: &RefCell<HashMap<ObserverId, Subscription>>, rect: ElementRect) {
        for sub in subs.borrow_mut().values_mut() {
            for edge in sub.state.update(rect, 1000.0) {
                (sub.on_edge)(edge);
            }
        }
    }

    impl ViewportObserver for FakeViewport {
        type Target = &'static str;

        fn observe(
            &mut self,
            target: &&'static str,
            trigger: ScrollTrigger,
            on_edge: EdgeCallback,
        ) -> ObserverId {
            let id = ObserverId(self.next_id);
            self.next_id += 1;
            self.subs.borrow_mut().insert(
                id,
                Subscription {
                    target: *target,
                    state: TriggerState::new(trigger),
                    on_edge,
                },
            );
            id
        }

        fn release(&mut self, id: ObserverId) {
            self.subs.borrow_mut().remove(&id);
        }
    }

    #[derive(Default)]
    struct RecordingAnimator {
        applied: RefCell<Vec<(&'static str, VisualState)>>,
        played: RefCell<Vec<(&'static str, Playback)>>,
        cancelled: RefCell<Vec<&'static str>>,
    }

    impl Animator for RecordingAnimator {
        type Target = &'static str;

        fn apply(&self, target: &&'static str, state: &VisualState) {
            self.applied.borrow_mut().push((*target, *state));
        }

        fn play(&self, target: &&'static str, _: &TransitionDescriptor, playback: Playback) {
            self.played.borrow_mut().push((*target, playback));
        }

        fn cancel(&self, target: &&'static str) {
            self.cancelled.borrow_mut().push(*target);
        }
    }

    fn setup() -> (
        ScrollOrchestrator<FakeViewport, RecordingAnimator>,
        Rc<RefCell<HashMap<ObserverId, Subscription>>>,
        Rc<RecordingAnimator>,
    ) {
        let viewport = FakeViewport::default();
        let subs = viewport.handle();
        let animator = Rc::new(RecordingAnimator::default());
        (
            ScrollOrchestrator::new(viewport, Rc::clone(&animator)),
            subs,
            animator,
        )
    }

    #[test]
    fn test_register_applies_start_state() {
        let (mut orch, subs, animator) = setup();
        assert!(orch.register(Some("heading"), TransitionDescriptor::fade_rise()));
        assert_eq!(orch.observer_count(), 1);
        assert_eq!(subs.borrow().len(), 1);
        let applied = animator.applied.borrow();
        assert_eq!(applied[0].0, "heading");
        assert_eq!(applied[0].1.opacity, 0.0);
        assert!(animator.played.borrow().is_empty());
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let (mut orch, subs, animator) = setup();
        assert!(!orch.register(None, TransitionDescriptor::fade_rise()));
        assert_eq!(orch.observer_count(), 0);
        assert!(subs.borrow().is_empty());
        assert!(animator.applied.borrow().is_empty());
    }

    #[test]
    fn test_scroll_plays_then_reverses() {
        let (mut orch, subs, animator) = setup();
        orch.register(Some("card"), TransitionDescriptor::fade_rise());
        scroll(&subs, ElementRect::new(1200.0, 300.0));
        assert!(animator.played.borrow().is_empty());
        scroll(&subs, ElementRect::new(600.0, 300.0));
        scroll(&subs, ElementRect::new(-400.0, 300.0));
        scroll(&subs, ElementRect::new(1200.0, 300.0));
        assert_eq!(
            *animator.played.borrow(),
            vec![("card", Playback::Play), ("card", Playback::Reverse)]
        );
    }

    #[test]
    fn test_immediate_descriptor_plays_without_observer() {
        let (mut orch, subs, animator) = setup();
        let bounce = TransitionDescriptor::oscillate(
            VisualState::REST.with_y(10.0),
            std::time::Duration::from_secs(2),
        );
        orch.register(Some("scroll-cue"), bounce);
        assert_eq!(orch.observer_count(), 0);
        assert!(subs.borrow().is_empty());
        assert_eq!(
            *animator.played.borrow(),
            vec![("scroll-cue", Playback::Play)]
        );
    }

    #[test]
    fn test_register_each_staggers_by_index() {
        let (mut orch, subs, _) = setup();
        let n = orch.register_each(["a", "b", "c"], |i| {
            TransitionDescriptor::fade_rise().staggered(i, ENTRANCE_STAGGER)
        });
        assert_eq!(n, 3);
        let targets = {
            let subs = subs.borrow();
            let mut t = subs.values().map(|s| s.target).collect::<Vec<_>>();
            t.sort();
            t
        };
        assert_eq!(targets, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_teardown_releases_everything() {
        let (mut orch, subs, animator) = setup();
        orch.register_each(["a", "b"], |_| TransitionDescriptor::fade_rise());
        orch.register(
            Some("float"),
            TransitionDescriptor::oscillate(
                VisualState::REST.with_y(-20.0),
                std::time::Duration::from_secs(4),
            ),
        );
        orch.teardown();
        assert!(subs.borrow().is_empty());
        assert_eq!(orch.observer_count(), 0);
        assert_eq!(animator.cancelled.borrow().len(), 3);

        let before = animator.played.borrow().len();
        scroll(&subs, ElementRect::new(500.0, 100.0));
        assert_eq!(animator.played.borrow().len(), before);
    }

    #[test]
    fn test_drop_releases_observers() {
        let (mut orch, subs, _) = setup();
        orch.register(Some("a"), TransitionDescriptor::fade_rise());
        drop(orch);
        assert!(subs.borrow().is_empty());
    }
}
