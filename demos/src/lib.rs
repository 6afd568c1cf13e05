// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless FAB examples.

use std::time::Duration;

use understory_fab::FloatingButton;

/// One frame at 60 Hz.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Advances `fab` frame by frame until no motion is in flight, returning the
/// number of frames it took.
pub fn settle(fab: &mut FloatingButton) -> usize {
    let mut frames = 0;
    while fab.active_motion().is_some() {
        fab.advance(FRAME);
        frames += 1;
    }
    frames
}

/// One-line summary of the button's state and visual.
#[must_use]
pub fn describe(fab: &FloatingButton) -> String {
    let v = fab.visual();
    format!(
        "{:?} at ({:.1}, {:.1}) {}x{} alpha {:.2} scale {:.2}",
        fab.state(),
        v.rect.x0,
        v.rect.y0,
        v.rect.width(),
        v.rect.height(),
        v.alpha,
        v.scale,
    )
}
