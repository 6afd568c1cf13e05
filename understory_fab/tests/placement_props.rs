// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the placement functions over arbitrary containers.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_fab::placement::{directional_rect, idle_rect};
use understory_fab::{Direction, FabConfig, IdlePosition};

fn arb_container() -> impl Strategy<Value = Rect> {
    (-500.0..500.0_f64, -500.0..500.0_f64, 0.0..2000.0_f64, 0.0..2000.0_f64)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size((x, y), (w, h)))
}

fn arb_config() -> impl Strategy<Value = FabConfig> {
    (
        1.0..200.0_f64,
        1.0..200.0_f64,
        0.0..64.0_f64,
        0.0..64.0_f64,
        0.0..120.0_f64,
        prop::sample::select(IdlePosition::ALL.to_vec()),
    )
        .prop_map(|(w, h, hm, vm, distance, idle_position)| FabConfig {
            size: Size::new(w, h),
            horizontal_margin: hm,
            vertical_margin: vm,
            entry_distance: distance,
            idle_position,
            ..FabConfig::default()
        })
}

fn expected_origin(container: Rect, config: &FabConfig) -> (f64, f64) {
    let (w, h) = (config.size.width, config.size.height);
    let (ox, oy, cw, ch) = (container.x0, container.y0, container.width(), container.height());
    let left = ox + config.horizontal_margin;
    let center_x = (ox + cw) / 2.0 - w / 2.0;
    let right = ox + cw - w - config.horizontal_margin;
    let top = oy + config.vertical_margin;
    let center_y = (oy + ch) / 2.0 - h / 2.0;
    let bottom = oy + ch - h - config.vertical_margin;
    match config.idle_position {
        IdlePosition::TopLeft => (left, top),
        IdlePosition::TopCenter => (center_x, top),
        IdlePosition::TopRight => (right, top),
        IdlePosition::CenterLeft => (left, center_y),
        IdlePosition::Center => (center_x, center_y),
        IdlePosition::CenterRight => (right, center_y),
        IdlePosition::BottomLeft => (left, bottom),
        IdlePosition::BottomCenter => (center_x, bottom),
        IdlePosition::BottomRight => (right, bottom),
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    /// Idle rectangles always have the configured size and follow the anchor table.
    #[test]
    fn prop_idle_rect_follows_anchor_table(container in arb_container(), config in arb_config()) {
        let idle = idle_rect(container, &config);
        let (x, y) = expected_origin(container, &config);
        prop_assert!(close(idle.width(), config.size.width));
        prop_assert!(close(idle.height(), config.size.height));
        prop_assert!(close(idle.x0, x), "x0 {} != {}", idle.x0, x);
        prop_assert!(close(idle.y0, y), "y0 {} != {}", idle.y0, y);
    }

    /// `Direction::None` is the identity on the anchor.
    #[test]
    fn prop_none_direction_is_identity(
        container in arb_container(),
        config in arb_config(),
        anchor in arb_container(),
    ) {
        prop_assert_eq!(directional_rect(container, &config, anchor, Direction::None), anchor);
    }

    /// Edge directions keep the anchor's orthogonal coordinate and move past
    /// the container edge by the entry distance (plus half the extent for top
    /// and left).
    #[test]
    fn prop_edge_directions_leave_container(container in arb_container(), config in arb_config()) {
        let anchor = idle_rect(container, &config);
        let d = config.entry_distance;
        let Size { width: w, height: h } = config.size;
        for direction in [Direction::Top, Direction::Bottom, Direction::Left, Direction::Right] {
            let rect = directional_rect(container, &config, anchor, direction);
            prop_assert!(close(rect.width(), w));
            prop_assert!(close(rect.height(), h));
            match direction {
                Direction::Top => {
                    prop_assert_eq!(rect.x0, anchor.x0);
                    prop_assert!(close(rect.y0, container.y0 - d - h / 2.0));
                    if d >= h / 2.0 {
                        prop_assert!(rect.y1 <= container.y0 + 1e-9);
                    }
                }
                Direction::Bottom => {
                    prop_assert_eq!(rect.x0, anchor.x0);
                    prop_assert!(close(rect.y0, container.y1 + d));
                }
                Direction::Left => {
                    prop_assert_eq!(rect.y0, anchor.y0);
                    prop_assert!(close(rect.x0, container.x0 - d - w / 2.0));
                    if d >= w / 2.0 {
                        prop_assert!(rect.x1 <= container.x0 + 1e-9);
                    }
                }
                _ => {
                    prop_assert_eq!(rect.y0, anchor.y0);
                    prop_assert!(close(rect.x0, container.x1 + d));
                }
            }
        }
    }
}
