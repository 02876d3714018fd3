//! Observable values with explicit, symmetric subscriptions.
//!
//! An [`Observable`] holds a `Copy` value and a list of change listeners.
//! Subscribing returns a [`SubscriptionId`]; whoever subscribed is responsible
//! for handing that id back to [`Observable::unsubscribe`] when it stops
//! watching. The minimap keeps one id per watched property and releases all of
//! them whenever the window or content reference it watches is replaced.
//!
//! Listeners are called synchronously from [`Observable::set`], after the new
//! value has been stored, with `(old, new)`. Writing an equal value is not a
//! change and notifies nobody. A listener may subscribe, unsubscribe or set
//! other observables; it must not call `set` on the observable that is
//! currently notifying it in a way that never converges.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Rc<dyn Fn(T, T)>;

/// A single observable property.
pub struct Observable<T: Copy + PartialEq> {
    value: Cell<T>,
    listeners: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
    next_id: Cell<u64>,
}

impl<T: Copy + PartialEq> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value: Cell::new(value), listeners: RefCell::new(Vec::new()), next_id: Cell::new(0) }
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Store `value` and notify listeners if it differs from the current one.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        let old = self.value.get();
        if old == value {
            return false;
        }
        self.value.set(value);
        // Snapshot so listeners may (un)subscribe while being notified.
        let listeners: Vec<Listener<T>> = self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener(old, value);
        }
        true
    }

    /// Register a change listener.
    pub fn subscribe(&self, listener: impl Fn(T, T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered here.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: Copy + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + PartialEq + fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
