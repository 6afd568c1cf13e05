// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_fab --heading-base-level=0

//! Understory FAB: a headless floating action button.
//!
//! A floating action button is a small overlay control resting at a fixed
//! spot of its container. It slides or fades in and out, optionally follows
//! the scrolling direction of the content below it, and reports lifecycle
//! events to the host. This crate models all of that without rendering
//! anything:
//!
//! - [`placement`]: pure functions deriving the idle, entry and exit
//!   rectangles from a container rectangle and a [`FabConfig`].
//! - [`FloatingButton`]: the controller. It sequences show/hide/magnify
//!   motions through an [`understory_animation_queue::AnimationQueue`], so at
//!   most one runs at a time and bursts of requests are dropped rather than
//!   buffered.
//! - [`callbacks`]: one optional handler per [`LifecycleEvent`].
//! - [`scroll`]: direction tracking that turns a stream of scroll offsets
//!   into show/hide triggers only when the direction changes.
//!
//! The host is responsible for:
//!
//! - Providing the container rectangle and calling
//!   [`FloatingButton::refresh`] after any configuration or container change.
//! - Rendering [`FloatingButton::visual`] (frame, opacity, scale).
//! - Driving motions, either with [`FloatingButton::advance`] once per frame
//!   or by animating [`FloatingButton::active_motion`] natively and calling
//!   [`FloatingButton::complete_motion`]. A motion that is never completed
//!   blocks every later one.
//! - Delivering taps ([`FloatingButton::on_tap`]) and scroll offsets
//!   ([`FloatingButton::on_scroll`] or [`FloatingButton::observe`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Rect;
//! use understory_fab::{FabConfig, FabState, FloatingButton};
//!
//! let container = Rect::new(0.0, 0.0, 320.0, 480.0);
//! let mut fab = FloatingButton::new(container, FabConfig::default());
//! assert!(fab.is_visible());
//!
//! // Scrolling down hides the button with the configured exit motion.
//! fab.observe([0.0, 40.0, 80.0]);
//! assert!(matches!(fab.state(), FabState::Transitioning(_)));
//!
//! // Drive the motion to completion as a frame loop would.
//! fab.advance(Duration::from_secs(1));
//! assert_eq!(fab.state(), FabState::Hidden);
//! assert_eq!(fab.visual().rect, fab.exit_rect());
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for Kurbo's floating point in `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
pub mod callbacks;
mod config;
mod icon;
mod motion;
pub mod placement;
pub mod scroll;

pub use button::{FabState, FloatingButton};
pub use callbacks::LifecycleEvent;
pub use config::{
    AnimationTiming, Direction, Easing, FabConfig, IdlePosition, MagnifyStyle, TapAnimation,
};
pub use icon::{ButtonState, ContentMode, Icon};
pub use motion::{Motion, MotionKind, Visual};
pub use understory_animation_queue::{Admission, TaskId};
