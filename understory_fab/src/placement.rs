// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement: pure rectangle computations for idle, entry and exit positions.
//!
//! These functions have no side effects, so they can be re-run at any time
//! (for example after a configuration change) without triggering an
//! animation. Results are never clamped to the container: a configuration
//! that places the button outside its container is honored as given.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_fab::FabConfig;
//! use understory_fab::placement::idle_rect;
//!
//! let container = Rect::new(0.0, 0.0, 320.0, 480.0);
//! let idle = idle_rect(container, &FabConfig::default());
//! assert_eq!(idle, Rect::new(264.0, 424.0, 304.0, 464.0));
//! ```

use kurbo::{Point, Rect, Size};

use crate::config::{Direction, FabConfig, IdlePosition};

/// Computes the resting rectangle of the button inside `container`.
///
/// The rectangle has the configured size. Edge-anchored cases keep the
/// configured margin from that edge. Center-axis cases use the average of the
/// container origin and extent, `(origin + extent) / 2`, minus half the button
/// size on that axis.
#[must_use]
pub fn idle_rect(container: Rect, config: &FabConfig) -> Rect {
    let Size { width, height } = config.size;
    let hm = config.horizontal_margin;
    let vm = config.vertical_margin;
    let (ox, oy) = (container.x0, container.y0);
    let (cw, ch) = (container.width(), container.height());

    let left = ox + hm;
    let center_x = (ox + cw) / 2.0 - width / 2.0;
    let right = ox + cw - width - hm;
    let top = oy + vm;
    let center_y = (oy + ch) / 2.0 - height / 2.0;
    let bottom = oy + ch - height - vm;

    let (x, y) = match config.idle_position {
        IdlePosition::TopLeft => (left, top),
        IdlePosition::TopCenter => (center_x, top),
        IdlePosition::TopRight => (right, top),
        IdlePosition::CenterLeft => (left, center_y),
        IdlePosition::Center => (center_x, center_y),
        IdlePosition::CenterRight => (right, center_y),
        IdlePosition::BottomLeft => (left, bottom),
        IdlePosition::BottomCenter => (center_x, bottom),
        IdlePosition::BottomRight => (right, bottom),
    };
    Rect::from_origin_size((x, y), config.size)
}

/// Computes where the button sits just before entering, or just after
/// exiting, in `direction`.
///
/// `anchor` is the button's reference rectangle, normally its idle rectangle.
///
/// - [`Direction::None`] returns `anchor` unchanged.
/// - Edge directions place a button-sized rectangle beyond that container
///   edge by `entry_distance`, keeping the anchor's coordinate on the other
///   axis. Top and left also move out by half the button extent.
/// - [`Direction::Faraway`] returns a 1×1 rectangle centered on the anchor.
#[must_use]
pub fn directional_rect(
    container: Rect,
    config: &FabConfig,
    anchor: Rect,
    direction: Direction,
) -> Rect {
    let Size { width, height } = config.size;
    let distance = config.entry_distance;
    let origin = match direction {
        Direction::None => return anchor,
        Direction::Faraway => return Rect::from_center_size(anchor.center(), (1.0, 1.0)),
        Direction::Top => Point::new(anchor.x0, container.y0 - distance - height / 2.0),
        Direction::Bottom => Point::new(anchor.x0, container.y0 + container.height() + distance),
        Direction::Left => Point::new(container.x0 - distance - width / 2.0, anchor.y0),
        Direction::Right => Point::new(container.x0 + container.width() + distance, anchor.y0),
    };
    Rect::from_origin_size(origin, config.size)
}

/// Corner radius that draws the button as a circle, if that was requested
/// and is possible.
///
/// A circle is only possible for square sizes; otherwise the request is
/// simply not applied.
#[must_use]
pub fn corner_radius(config: &FabConfig) -> Option<f64> {
    if !config.circle_shape {
        return None;
    }
    if config.size.width != config.size.height {
        log::debug!(
            "circle shape requested for non-square size {:?}, ignoring",
            config.size
        );
        return None;
    }
    Some(config.size.height / 2.0)
}
