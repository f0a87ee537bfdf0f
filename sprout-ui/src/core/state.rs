//! Reactive state cells

use std::sync::{Arc, RwLock};

/// Reactive state container - notifies listeners when changed.
///
/// `State` is the single place a value lives. Readers call [`State::get`]
/// for a snapshot, never a reference into the cell, so handing a `State`
/// to a display component gives it a read-only view. Writers go through
/// [`State::set`] or [`State::update`], and every successful write runs
/// the registered listeners exactly once.
pub struct State<T: Clone + Send + Sync + 'static> {
    value: Arc<RwLock<T>>,
    listeners: Arc<RwLock<Vec<Box<dyn Fn() + Send + Sync>>>>,
}

impl<T: Clone + Send + Sync + 'static> State<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get a snapshot of the current value.
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Replace the value and notify listeners.
    pub fn set(&self, new_value: T) {
        {
            let mut value = self.value.write().unwrap();
            *value = new_value;
        }
        self.notify();
    }

    /// Update the value in place with a function, then notify listeners.
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        {
            let mut value = self.value.write().unwrap();
            f(&mut *value);
        }
        self.notify();
    }

    /// Subscribe to changes. Listeners run after every `set`/`update`.
    pub fn subscribe<F: Fn() + Send + Sync + 'static>(&self, callback: F) {
        let mut listeners = self.listeners.write().unwrap();
        listeners.push(Box::new(callback));
    }

    fn notify(&self) {
        let listeners = self.listeners.read().unwrap();
        for listener in listeners.iter() {
            listener();
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            listeners: Arc::clone(&self.listeners),
        }
    }
}
