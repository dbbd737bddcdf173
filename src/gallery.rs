use crate::portfolio::ProjectRecord;

/// Suspends and restores page scrolling while an overlay is up.
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
}

/// Detail overlay for at most one project.
///
/// The page stays locked exactly once while any project is shown, however
/// many times the selection is replaced.
pub struct ProjectModal<L: ScrollLock> {
    selected: Option<ProjectRecord>,
    lock: L,
}

impl<L: ScrollLock> ProjectModal<L> {
    pub fn new(lock: L) -> Self {
        Self {
            selected: None,
            lock,
        }
    }

    pub fn selected(&self) -> Option<&ProjectRecord> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(&mut self, project: ProjectRecord) {
        if self.selected.is_none() {
            self.lock.lock();
        }
        log::debug!("showing project {}", project.id);
        self.selected = Some(project);
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            self.lock.unlock();
        }
    }

    pub fn scroll_lock(&self) -> &L {
        &self.lock
    }
}

impl<L: ScrollLock> Drop for ProjectModal<L> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::portfolio::Portfolio;

    #[derive(Default, Clone)]
    struct CountingLock {
        depth: Rc<Cell<i32>>,
        locks: Rc<Cell<u32>>,
    }

    impl ScrollLock for CountingLock {
        fn lock(&mut self) {
            self.depth.set(self.depth.get() + 1);
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&mut self) {
            self.depth.set(self.depth.get() - 1);
        }
    }

    fn project(index: usize) -> ProjectRecord {
        Portfolio::get().projects[index].clone()
    }

    #[test]
    fn test_open_shows_exactly_that_project() {
        let lock = CountingLock::default();
        let mut modal = ProjectModal::new(lock.clone());
        assert!(!modal.is_open());
        modal.open(project(0));
        assert_eq!(modal.selected(), Some(&project(0)));
        assert_eq!(lock.depth.get(), 1);
    }

    #[test]
    fn test_close_restores_scroll() {
        let lock = CountingLock::default();
        let mut modal = ProjectModal::new(lock.clone());
        modal.open(project(1));
        modal.close();
        assert_eq!(modal.selected(), None);
        assert_eq!(lock.depth.get(), 0);
        // closing again is a no-op
        modal.close();
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_second_selection_replaces_first() {
        let lock = CountingLock::default();
        let mut modal = ProjectModal::new(lock.clone());
        modal.open(project(0));
        modal.open(project(2));
        assert_eq!(modal.selected(), Some(&project(2)));
        assert_eq!(lock.locks.get(), 1);
        assert_eq!(lock.depth.get(), 1);
        modal.close();
        assert_eq!(lock.depth.get(), 0);
    }

    #[test]
    fn test_drop_while_open_unlocks() {
        let lock = CountingLock::default();
        {
            let mut modal = ProjectModal::new(lock.clone());
            modal.open(project(3));
        }
        assert_eq!(lock.depth.get(), 0);
    }
}
