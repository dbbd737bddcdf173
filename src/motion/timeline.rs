use std::time::Duration;

use super::TransitionDescriptor;

/// Where a step starts relative to the timeline built so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// At the current end of the timeline.
    Sequential,
    /// This long before the current end (`"-=x"`).
    Overlap(Duration),
    /// At an absolute offset from the timeline start.
    At(Duration),
}

/// One step of a timeline: `count` targets sharing `key`, each starting
/// `stagger` after the previous.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry<K> {
    pub key: K,
    pub count: usize,
    pub start: Duration,
    pub stagger: Duration,
    pub descriptor: TransitionDescriptor,
}

impl<K> TimelineEntry<K> {
    pub fn end(&self) -> Duration {
        let spread = self.stagger * self.count.saturating_sub(1) as u32;
        self.start + spread + self.descriptor.duration
    }

    /// The descriptor for the `index`th target, delayed to its slot on the
    /// timeline.
    pub fn descriptor_at(&self, index: usize) -> TransitionDescriptor {
        let offset = self.descriptor.delay + self.start + self.stagger * index as u32;
        self.descriptor.clone().with_delay(offset)
    }
}

/// Composes entrance steps into one schedule. Keys identify the targets
/// (for the browser, a class selector).
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<K> {
    entries: Vec<TimelineEntry<K>>,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> Timeline<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        mut self,
        key: K,
        count: usize,
        descriptor: TransitionDescriptor,
        stagger: Duration,
        position: Position,
    ) -> Self {
        let end = self.total_duration();
        let start = match position {
            Position::Sequential => end,
            Position::Overlap(d) => end.saturating_sub(d),
            Position::At(d) => d,
        };
        self.entries.push(TimelineEntry {
            key,
            count,
            start,
            stagger,
            descriptor,
        });
        self
    }

    pub fn entries(&self) -> &[TimelineEntry<K>] {
        &self.entries
    }

    pub fn total_duration(&self) -> Duration {
        self.entries
            .iter()
            .map(TimelineEntry::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}
