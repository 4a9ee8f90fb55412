use std::cell::RefCell;

use leptos::prelude::*;

/// Somewhere a piece of view state lives. In the app this is a signal; tests
/// use a `RefCell`. Both return `None` once the owner is gone.
pub trait StateCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// What became of one async operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was dispatched.
    Ignored,
    /// The result was written to state.
    Applied,
    /// The result arrived for a session or view that no longer exists.
    Discarded,
}
