//! Where page state lives.
//!
//! The lifecycle operations mutate state through [`StateCell`] so the same
//! code drives a Leptos signal in the browser and a plain [`LocalCell`] in
//! native callers and tests. Everything runs on one thread; a cell is never
//! borrowed across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateCell<T> {
    /// Clone of the current value.
    fn snapshot(&self) -> T;

    /// Mutate in place. `None` when the backing storage is gone (a disposed
    /// signal after the view unmounted).
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

/// Shared single-threaded cell.
#[derive(Debug, Default)]
pub struct LocalCell<T>(Rc<RefCell<T>>);

impl<T> LocalCell<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Read without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl<T> Clone for LocalCell<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Clone> StateCell<T> for LocalCell<T> {
    fn snapshot(&self) -> T {
        self.0.borrow().clone()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.0.borrow_mut()))
    }
}
