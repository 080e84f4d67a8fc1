// SPDX-License-Identifier: MPL-2.0
//! Shared event sources with scoped listeners.
//!
//! An [`EventSource`] plays the role of a window-level event target: several
//! components register handlers on the same source. Registration returns a
//! [`Listener`] guard; dropping the guard deregisters the handler, so a
//! component that holds its guard cannot leak a handler past its teardown.
//!
//! Everything here is single-threaded (`Rc`), matching the UI event loop.
//!
//! ```
//! use nuvo_ui::ui::events::EventSource;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let scroll = EventSource::<f32>::new();
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = seen.clone();
//! let listener = scroll.listen(move |y| sink.set(*y));
//!
//! scroll.emit(&42.0);
//! assert_eq!(seen.get(), 42.0);
//!
//! drop(listener);
//! scroll.emit(&7.0);
//! assert_eq!(seen.get(), 42.0);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

/// A broadcast point for events of type `T`.
pub struct EventSource<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> EventSource<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Registers `handler` until the returned guard is dropped.
    #[must_use = "dropping the listener immediately deregisters the handler"]
    pub fn listen(&self, handler: impl Fn(&T) + 'static) -> Listener {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.push((id, Rc::new(handler)));
            id
        };

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Listener {
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry
                        .borrow_mut()
                        .handlers
                        .retain(|(handler_id, _)| *handler_id != id);
                }
            })),
        }
    }

    /// Calls every registered handler with `event`.
    ///
    /// Handlers run on a snapshot, so a handler may register or release
    /// listeners on this source without a borrow conflict.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<Handler<T>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in snapshot {
            handler(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl<T: 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventSource<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> fmt::Debug for EventSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("listeners", &self.registry.borrow().handlers.len())
            .finish()
    }
}

/// Registration guard returned by [`EventSource::listen`].
pub struct Listener {
    release: Option<Box<dyn FnOnce()>>,
}

impl Listener {
    /// Deregisters now instead of waiting for the drop.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn emit_reaches_every_listener() {
        let source = EventSource::<u32>::new();
        let total = Rc::new(Cell::new(0));
        let a = total.clone();
        let b = total.clone();
        let _first = source.listen(move |v| a.set(a.get() + *v));
        let _second = source.listen(move |v| b.set(b.get() + *v));

        source.emit(&5);
        assert_eq!(total.get(), 10);
    }

    #[test]
    fn dropping_listener_deregisters() {
        let source = EventSource::<u32>::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let listener = source.listen(move |_| counter.set(counter.get() + 1));
        assert_eq!(source.listener_count(), 1);

        drop(listener);
        assert_eq!(source.listener_count(), 0);

        source.emit(&1);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn release_only_removes_its_own_handler() {
        let source = EventSource::<()>::new();
        let first = source.listen(|_| {});
        let _second = source.listen(|_| {});

        first.release();
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn listener_outliving_source_is_harmless() {
        let source = EventSource::<()>::new();
        let listener = source.listen(|_| {});
        drop(source);
        drop(listener);
    }

    #[test]
    fn handler_may_register_during_emit() {
        let source = EventSource::<()>::new();
        let inner_source = source.clone();
        let kept = Rc::new(RefCell::new(Vec::new()));
        let sink = kept.clone();
        let _outer = source.listen(move |_| {
            sink.borrow_mut().push(inner_source.listen(|_| {}));
        });

        source.emit(&());
        assert_eq!(source.listener_count(), 2);
        assert_eq!(kept.borrow().len(), 1);
    }
}
