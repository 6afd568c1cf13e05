// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle callback slots.
//!
//! Each [`LifecycleEvent`] has its own slot holding zero or one handler.
//! Hosts subscribe only to the events they care about; unsubscribed events
//! are simply not delivered.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_fab::callbacks::{Callbacks, LifecycleEvent};
//!
//! let taps = Rc::new(Cell::new(0));
//! let mut callbacks = Callbacks::new();
//! let counter = Rc::clone(&taps);
//! callbacks.set(LifecycleEvent::DidTap, move |_| counter.set(counter.get() + 1));
//!
//! assert!(callbacks.emit(LifecycleEvent::DidTap));
//! assert!(!callbacks.emit(LifecycleEvent::DidAppear));
//! assert_eq!(taps.get(), 1);
//! ```

use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashMap;

/// Events reported over the button's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// A show was requested; emitted before the motion is queued.
    WillAppear,
    /// A show motion completed.
    DidAppear,
    /// A hide, tap-exit or magnify was requested; emitted before the motion is queued.
    WillDisappear,
    /// A hide or magnify motion completed.
    DidDisappear,
    /// The button was tapped.
    DidTap,
}

type Handler = Box<dyn FnMut(LifecycleEvent)>;

/// One optional handler per [`LifecycleEvent`].
#[derive(Default)]
pub struct Callbacks {
    slots: HashMap<LifecycleEvent, Handler>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("subscribed", &self.slots.keys().collect::<alloc::vec::Vec<_>>())
            .finish()
    }
}

impl Callbacks {
    /// Creates a set of empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler` for `event`, returning `true` if it replaced one.
    pub fn set(
        &mut self,
        event: LifecycleEvent,
        handler: impl FnMut(LifecycleEvent) + 'static,
    ) -> bool {
        self.slots.insert(event, Box::new(handler)).is_some()
    }

    /// Removes the handler for `event`, returning `true` if there was one.
    pub fn clear(&mut self, event: LifecycleEvent) -> bool {
        self.slots.remove(&event).is_some()
    }

    /// Returns `true` if a handler is installed for `event`.
    #[must_use]
    pub fn is_set(&self, event: LifecycleEvent) -> bool {
        self.slots.contains_key(&event)
    }

    /// Delivers `event` to its handler, returning `true` if one ran.
    pub fn emit(&mut self, event: LifecycleEvent) -> bool {
        match self.slots.get_mut(&event) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}
