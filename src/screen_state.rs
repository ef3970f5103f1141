//! Screen State Handle
//!
//! Async commands never hold a borrow of screen state across an await.
//! They read and write through this handle after each remote call; once
//! the screen is gone the handle refuses and the result is dropped.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::{Rc, Weak};

use leptos::prelude::*;

/// Shared, possibly torn-down, screen model
pub trait ScreenState<M> {
    /// Mutate the model; `None` when the screen no longer exists
    fn apply<R>(&self, f: impl FnOnce(&mut M) -> R) -> Option<R>;

    /// Read the model without subscribing; `None` when the screen no longer exists
    fn inspect<R>(&self, f: impl FnOnce(&M) -> R) -> Option<R>;
}

/// Screen models live in a signal owned by the screen component,
/// disposed with it.
impl<M: Send + Sync + 'static> ScreenState<M> for RwSignal<M> {
    fn apply<R>(&self, f: impl FnOnce(&mut M) -> R) -> Option<R> {
        Update::try_update(self, f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&M) -> R) -> Option<R> {
        WithUntracked::try_with_untracked(self, f)
    }
}

/// Plain shared model, for driving commands without a reactive runtime
#[cfg(test)]
impl<M> ScreenState<M> for Rc<RefCell<M>> {
    fn apply<R>(&self, f: impl FnOnce(&mut M) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&M) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// Dropped model stands in for a torn-down screen
#[cfg(test)]
impl<M> ScreenState<M> for Weak<RefCell<M>> {
    fn apply<R>(&self, f: impl FnOnce(&mut M) -> R) -> Option<R> {
        self.upgrade().map(|cell| f(&mut cell.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&M) -> R) -> Option<R> {
        self.upgrade().map(|cell| f(&cell.borrow()))
    }
}
