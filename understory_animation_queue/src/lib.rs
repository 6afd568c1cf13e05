// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_animation_queue --heading-base-level=0

//! Understory Animation Queue: bounded FIFO sequencing for host-driven animations.
//!
//! Many widgets need their animations applied strictly one after another: a
//! button that is asked to hide while it is still appearing should finish
//! appearing first. [`AnimationQueue`] is a small, renderer-agnostic sequencer
//! for that pattern:
//!
//! - At most one task is in flight at any time.
//! - Tasks start in submission order; only the head of the queue can start.
//! - Depth is bounded by a capacity that counts the in-flight task. Requests
//!   arriving while the queue is full are dropped, not buffered.
//!
//! The queue does not run anything itself. It stores an opaque payload per
//! task and reports which task has just started; the host executes the
//! animation described by that payload and calls
//! [`AnimationQueue::notify_finished`] when it is done.
//!
//! Completion is entirely caller-driven: if a started task is never reported
//! as finished, the queue stays blocked behind it forever. This is part of
//! the contract, not an error condition.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_animation_queue::{Admission, AnimationQueue};
//!
//! let mut queue = AnimationQueue::new();
//!
//! // The first task starts immediately, the second waits, the third is dropped.
//! let Admission::Started(first) = queue.enqueue("appear") else { unreachable!() };
//! let Admission::Queued(second) = queue.enqueue("disappear") else { unreachable!() };
//! assert_eq!(queue.enqueue("appear again"), Admission::Dropped);
//!
//! // The host runs "appear", then reports completion; "disappear" starts.
//! let done = queue.notify_finished(first).unwrap();
//! assert_eq!(*done.finished.payload(), "appear");
//! assert_eq!(done.started, Some(second));
//! assert_eq!(queue.current().map(|t| *t.payload()), Some("disappear"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;

/// Capacity used by [`AnimationQueue::new`]: one running task plus one waiting.
pub const DEFAULT_CAPACITY: usize = 2;

/// Identifies a task admitted to an [`AnimationQueue`].
///
/// Ids are unique per queue and increase in submission order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A queued animation: an opaque payload tagged with its id and in-flight flag.
#[derive(Clone, Debug)]
pub struct Task<T> {
    id: TaskId,
    payload: T,
    in_flight: bool,
}

impl<T> Task<T> {
    /// The id assigned when the task was admitted.
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// The payload supplied to [`AnimationQueue::enqueue`].
    #[must_use]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns `true` while the task is the running head of the queue.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Consumes the task, returning its payload.
    #[must_use]
    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Result of [`AnimationQueue::enqueue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The queue was idle; the task is now in flight and the host should run it.
    Started(TaskId),
    /// The task is waiting behind the in-flight task.
    Queued(TaskId),
    /// The queue was at capacity; the task was discarded.
    Dropped,
}

impl Admission {
    /// Returns the task id unless the request was dropped.
    #[must_use]
    pub fn id(self) -> Option<TaskId> {
        match self {
            Self::Started(id) | Self::Queued(id) => Some(id),
            Self::Dropped => None,
        }
    }

    /// Returns `true` if the request was discarded.
    #[must_use]
    pub fn is_dropped(self) -> bool {
        matches!(self, Self::Dropped)
    }
}

/// Result of a successful [`AnimationQueue::notify_finished`].
#[derive(Clone, Debug)]
pub struct Completion<T> {
    /// The task that just finished, no longer in flight.
    pub finished: Task<T>,
    /// The task that was started as a consequence, if one was waiting.
    pub started: Option<TaskId>,
}

/// Bounded FIFO of animation tasks with a single in-flight slot.
///
/// See the [crate documentation](crate) for the sequencing contract.
#[derive(Clone, Debug)]
pub struct AnimationQueue<T> {
    current: Option<Task<T>>,
    pending: VecDeque<Task<T>>,
    capacity: usize,
    next_id: u64,
}

impl<T> Default for AnimationQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AnimationQueue<T> {
    /// Creates an empty queue with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty queue admitting at most `capacity` tasks, the
    /// in-flight one included.
    ///
    /// A capacity of zero drops every request.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: None,
            pending: VecDeque::new(),
            capacity,
            next_id: 0,
        }
    }

    /// Maximum number of admitted tasks, the in-flight one included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity for future admissions.
    ///
    /// Tasks already admitted are kept even if they now exceed the capacity.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Number of admitted tasks, the in-flight one included.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.current.is_some()) + self.pending.len()
    }

    /// Returns `true` if no task is admitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if no task is in flight.
    ///
    /// An idle queue is always empty: waiting tasks are started as soon as the
    /// in-flight slot frees up.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// The in-flight task, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Task<T>> {
        self.current.as_ref()
    }

    /// Tasks waiting behind the in-flight one, in the order they will start.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = &Task<T>> + '_ {
        self.pending.iter()
    }

    /// Admits a task, starting it right away if the queue is idle.
    ///
    /// When the queue already holds [`capacity`](Self::capacity) tasks the
    /// request is dropped and nothing changes.
    pub fn enqueue(&mut self, payload: T) -> Admission {
        if self.len() >= self.capacity {
            log::debug!(
                "animation queue full ({} of {}), dropping request",
                self.len(),
                self.capacity
            );
            return Admission::Dropped;
        }
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push_back(Task {
            id,
            payload,
            in_flight: false,
        });
        match self.start_head() {
            Some(started) => {
                debug_assert_eq!(started, id, "only an empty queue can start on enqueue");
                Admission::Started(id)
            }
            None => Admission::Queued(id),
        }
    }

    /// Reports that the in-flight task `id` has finished.
    ///
    /// The task is removed and the next waiting task, if any, is started. An
    /// id that does not name the in-flight task is ignored and returns `None`.
    pub fn notify_finished(&mut self, id: TaskId) -> Option<Completion<T>> {
        if self.current.as_ref().map(Task::id) != Some(id) {
            log::warn!("ignoring completion for task {} which is not in flight", id.0);
            return None;
        }
        let mut finished = self.current.take()?;
        finished.in_flight = false;
        let started = self.start_head();
        Some(Completion { finished, started })
    }

    fn start_head(&mut self) -> Option<TaskId> {
        if self.current.is_some() {
            log::trace!("animation not yet finished, head stays queued");
            return None;
        }
        let mut head = self.pending.pop_front()?;
        head.in_flight = true;
        let id = head.id;
        self.current = Some(head);
        Some(id)
    }
}
