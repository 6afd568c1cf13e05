// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state icon records.
//!
//! The button only remembers which named asset the host should draw in each
//! interaction state; loading and drawing the image is the host's job.

use alloc::string::String;

use hashbrown::HashMap;

/// Interaction state an icon applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonState {
    /// Resting.
    Normal,
    /// Pressed.
    Highlighted,
    /// Toggled on.
    Selected,
}

/// How the icon is fitted into the button frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentMode {
    /// Scale to fit, preserving aspect ratio.
    #[default]
    AspectFit,
    /// Scale to fill, preserving aspect ratio and cropping overflow.
    AspectFill,
    /// Stretch to the frame.
    Fill,
    /// Natural size, centered.
    Center,
}

/// A named asset and how to fit it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Icon {
    /// Asset name understood by the host.
    pub name: String,
    /// Fitting mode.
    pub content_mode: ContentMode,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct IconSet {
    icons: HashMap<ButtonState, Icon>,
}

impl IconSet {
    /// Records `name` for `state` if `exists` confirms the asset is available.
    pub(crate) fn set(
        &mut self,
        name: &str,
        state: ButtonState,
        content_mode: ContentMode,
        exists: impl FnOnce(&str) -> bool,
    ) -> bool {
        if !exists(name) {
            log::warn!("no image named {name:?}, keeping the current {state:?} icon");
            return false;
        }
        self.icons.insert(
            state,
            Icon {
                name: String::from(name),
                content_mode,
            },
        );
        true
    }

    pub(crate) fn get(&self, state: ButtonState) -> Option<&Icon> {
        self.icons.get(&state)
    }
}
