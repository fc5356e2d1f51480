//! Observable display state.
//!
//! [`StateStore`] owns the single [`DisplayState`] value driving what the
//! renderer shows. It has exactly one write path ([`StateStore::load`]) and
//! notifies every subscriber after each transition. The store is not `Sync`:
//! it lives on the interaction thread and background work reaches it only
//! through [`crate::loader`].

use crate::report::Report;
use std::fmt;
use std::sync::Arc;

/// What the renderer should show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    /// No report loaded yet
    #[default]
    Empty,
    /// Most recent successfully decoded report
    Loaded(Arc<Report>),
}

impl DisplayState {
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Empty => None,
            Self::Loaded(report) => Some(report),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

type Listener = Box<dyn FnMut(&DisplayState)>;

/// Holder of the current [`DisplayState`] with notify-on-change.
#[derive(Default)]
pub struct StateStore {
    state: DisplayState,
    revision: u64,
    listeners: Vec<Listener>,
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Number of transitions applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener called after every transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&DisplayState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the displayed report wholesale and notify listeners.
    pub fn load(&mut self, report: Report) {
        self.state = DisplayState::Loaded(Arc::new(report));
        self.revision += 1;
        self.notify();
    }

    fn notify(&mut self) {
        let state = &self.state;
        for listener in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn report(covered: u64) -> Report {
        Report {
            covered_lines: covered,
            executable_lines: 100,
            line_coverage: covered as f64 / 100.0,
            targets: vec![],
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = StateStore::new();
        assert!(store.state().is_empty());
        assert!(store.state().report().is_none());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_load_replaces_previous_report() {
        let mut store = StateStore::new();
        store.load(report(10));
        store.load(report(20));

        assert_eq!(store.revision(), 2);
        assert_eq!(store.state().report().map(|r| r.covered_lines), Some(20));
    }

    #[test]
    fn test_listeners_see_every_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = StateStore::new();
        store.subscribe(move |state| {
            sink.borrow_mut()
                .push(state.report().map(|r| r.covered_lines));
        });

        store.load(report(1));
        store.load(report(2));

        assert_eq!(*seen.borrow(), vec![Some(1), Some(2)]);
    }
}
