// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough of a floating action button over a scrolling list.
//!
//! The button is configured from JSON, follows a simulated scroll gesture,
//! cycles through every entry/exit direction (refreshing after each change),
//! and is finally tapped to run the magnify motion. Its handler for
//! `DidDisappear` brings it straight back, as a host app would.
//!
//! Run:
//! - `cargo run -p understory_examples --example fab_simple`
//!
//! Set `RUST_LOG=debug` to also see the queue and motion logs.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Rect;
use understory_examples::{FRAME, describe, settle};
use understory_fab::{Direction, FabConfig, FabState, FloatingButton, LifecycleEvent};

const CONFIG: &str = r#"{
    "size": { "width": 60.0, "height": 60.0 },
    "vertical_margin": 30.0,
    "horizontal_margin": 20.0,
    "entry_direction": "Bottom",
    "exit_direction": "Bottom",
    "tap_animation": "Magnify",
    "entry_timing": {
        "delay": { "secs": 0, "nanos": 0 },
        "duration": { "secs": 0, "nanos": 300000000 }
    },
    "exit_timing": {
        "delay": { "secs": 0, "nanos": 0 },
        "duration": { "secs": 0, "nanos": 300000000 }
    }
}"#;

fn main() -> Result<(), serde_json::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: FabConfig = serde_json::from_str(CONFIG)?;
    let container = Rect::new(0.0, 0.0, 375.0, 667.0);
    let mut fab = FloatingButton::new(container, config);
    log::info!("created: {}", describe(&fab));

    let reappear = Rc::new(Cell::new(false));
    for event in [
        LifecycleEvent::WillAppear,
        LifecycleEvent::DidAppear,
        LifecycleEvent::WillDisappear,
        LifecycleEvent::DidTap,
    ] {
        fab.on(event, |e| log::info!("event: {e:?}"));
    }
    let flag = Rc::clone(&reappear);
    fab.on(LifecycleEvent::DidDisappear, move |e| {
        log::info!("event: {e:?}");
        flag.set(true);
    });

    // Fling down the list, then back up; only direction changes trigger.
    let down = (0..40).map(|n| f64::from(n) * 12.0);
    let up = (0..40).rev().map(|n| f64::from(n) * 12.0);
    for offset in down.chain(up) {
        if let Some(admission) = fab.on_scroll(offset) {
            log::info!("scroll to {offset}: {admission:?}");
        }
        fab.advance(FRAME);
    }
    settle(&mut fab);
    reappear.set(false);
    log::info!("after scrolling: {}", describe(&fab));

    for direction in [Direction::Top, Direction::Right, Direction::Left, Direction::Faraway] {
        let config = fab.config_mut();
        config.entry_direction = direction;
        config.exit_direction = direction;
        fab.refresh();

        fab.hide(true);
        let frames = settle(&mut fab);
        log::info!("{direction:?}: hidden after {frames} frames: {}", describe(&fab));
        fab.show(true);
        let frames = settle(&mut fab);
        log::info!("{direction:?}: shown after {frames} frames: {}", describe(&fab));
    }
    reappear.set(false);

    fab.on_tap();
    settle(&mut fab);
    log::info!("after tap: {}", describe(&fab));
    if reappear.replace(false) {
        fab.show(false);
    }

    assert_eq!(fab.state(), FabState::Idle);
    log::info!("back at rest: {} (visible: {})", describe(&fab), fab.is_visible());
    Ok(())
}
