// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-view marker for the app preview, with a hysteresis band.
//!
//! The marker is added once more than `show_above` of the preview is visible
//! and removed once less than `hide_below` is. Ratios in between leave the
//! marker as it was.

use crate::config::PreviewConfig;
use crate::intersection::IntersectionEntry;
use crate::patch::{PatchOp, Target};

/// In-view state of the app preview.
#[derive(Clone, Debug)]
pub struct PreviewTracker {
    in_view: bool,
    show_above: f64,
    hide_below: f64,
    class: &'static str,
}

impl PreviewTracker {
    /// Creates a tracker in the not-in-view state.
    #[must_use]
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            in_view: false,
            show_above: config.show_above,
            hide_below: config.hide_below,
            class: config.in_view_class,
        }
    }

    /// Sets the starting state from the class the page was served with, so a
    /// preset marker is removed on the first low ratio.
    pub fn seed(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    /// Whether the marker is currently set.
    #[must_use]
    pub const fn in_view(&self) -> bool {
        self.in_view
    }

    /// Applies one intersection entry. Returns the class write when the
    /// state flips.
    pub fn observe(&mut self, entry: &IntersectionEntry) -> Option<PatchOp> {
        if entry.is_intersecting && entry.ratio > self.show_above {
            if self.in_view {
                return None;
            }
            self.in_view = true;
            Some(PatchOp::AddClass {
                target: Target::Preview,
                class: self.class,
            })
        } else if entry.ratio < self.hide_below {
            if !self.in_view {
                return None;
            }
            self.in_view = false;
            Some(PatchOp::RemoveClass {
                target: Target::Preview,
                class: self.class,
            })
        } else {
            None
        }
    }
}
