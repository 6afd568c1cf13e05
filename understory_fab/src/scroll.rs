// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll direction tracking with change-only triggers.
//!
//! Feed successive vertical content offsets into [`ScrollTracker::sample`].
//! A trigger is produced only when the scrolling direction changes, so a
//! continuous scroll in one direction shows or hides the button once rather
//! than on every sample.
//!
//! ```
//! use understory_fab::scroll::{ScrollTracker, ScrollTrigger};
//!
//! let mut tracker = ScrollTracker::new();
//! assert_eq!(tracker.sample(120.0), Some(ScrollTrigger::Hide)); // down from 0
//! assert_eq!(tracker.sample(150.0), None); // still down
//! assert_eq!(tracker.sample(90.0), Some(ScrollTrigger::Show)); // now up
//! ```

/// Direction of the most recent offset change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollDirection {
    /// Offset decreased: content moves towards its start.
    Up,
    /// Offset increased.
    Down,
    /// No movement recorded yet, or reset after a tap-triggered exit.
    #[default]
    None,
}

/// What a direction change asks the button to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollTrigger {
    /// Scrolling turned upwards.
    Show,
    /// Scrolling turned downwards.
    Hide,
}

/// Remembers the previous offset and direction between samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
    direction: ScrollDirection,
}

impl ScrollTracker {
    /// Starts at offset zero with no direction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The direction recorded by the latest moving sample.
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// The latest sampled offset.
    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Forgets the direction so the next movement triggers again.
    pub fn reset_direction(&mut self) {
        self.direction = ScrollDirection::None;
    }

    /// Records `offset`, returning a trigger if the direction changed.
    ///
    /// The direction is updated on every moving sample, whether or not it
    /// produces a trigger. An unchanged offset only updates the stored offset.
    pub fn sample(&mut self, offset: f64) -> Option<ScrollTrigger> {
        let previous = self.direction;
        let trigger = if offset < self.last_offset {
            self.direction = ScrollDirection::Up;
            (previous != ScrollDirection::Up).then_some(ScrollTrigger::Show)
        } else if offset > self.last_offset {
            self.direction = ScrollDirection::Down;
            (previous != ScrollDirection::Down).then_some(ScrollTrigger::Hide)
        } else {
            None
        };
        self.last_offset = offset;
        trigger
    }
}
