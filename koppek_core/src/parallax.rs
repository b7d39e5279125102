// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven tilt for the app preview.
//!
//! Each animation frame, [`progress`] measures how far the preview has
//! travelled through the viewport, and [`ParallaxPose::at`] derives a
//! rotation, lift and fade from it. Scroll events are coalesced through a
//! [`FrameGate`] so at most one frame request is outstanding at a time.

use alloc::format;
use alloc::string::String;

use kurbo::Rect;

use crate::config::ParallaxConfig;
use crate::patch::{DomPatch, PatchOp, Target};

/// Fraction of the viewport-plus-element distance the element has covered.
///
/// `0.0` is the moment its top edge enters at the bottom of the viewport and
/// `1.0` the moment its bottom edge leaves at the top. `rect` is in viewport
/// coordinates (as from `getBoundingClientRect`). The result is not clamped.
#[must_use]
pub fn progress(viewport_height: f64, rect: Rect) -> f64 {
    (viewport_height - rect.y0) / (viewport_height + rect.height())
}

/// Transform and opacity for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxPose {
    /// Tilt around the X axis, in degrees. Never negative.
    pub rotate_x_deg: f64,
    /// Downward offset, in pixels. Never negative.
    pub translate_y_px: f64,
    /// Opacity, at most `1.0`.
    pub opacity: f64,
}

impl ParallaxPose {
    /// Derives the pose for `progress`, or `None` outside the open interval
    /// `(0, 1)` where the previous frame's pose is kept.
    #[must_use]
    pub fn at(progress: f64, config: &ParallaxConfig) -> Option<Self> {
        if !(progress > 0.0 && progress < 1.0) {
            return None;
        }
        Some(Self {
            rotate_x_deg: (config.rotate_start_deg - progress * config.rotate_span_deg).max(0.0),
            translate_y_px: (config.translate_start_px - progress * config.translate_span_px)
                .max(0.0),
            opacity: (config.opacity_start + progress * config.opacity_span).min(1.0),
        })
    }

    /// Returns the CSS transform, e.g. `rotateX(2.5deg) translateY(15px)`.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({}deg) translateY({}px)",
            self.rotate_x_deg, self.translate_y_px
        )
    }

    /// DOM writes that apply this pose to the preview.
    #[must_use]
    pub fn patch(&self) -> DomPatch {
        let mut patch = DomPatch::new();
        patch.push(PatchOp::SetTransform {
            target: Target::Preview,
            css: self.css_transform(),
        });
        patch.push(PatchOp::SetOpacity {
            target: Target::Preview,
            opacity: self.opacity,
        });
        patch
    }
}

/// Allows at most one pending frame request.
///
/// Call [`request`](Self::request) on every scroll event and only schedule a
/// frame when it returns `true`. Call [`frame_fired`](Self::frame_fired) as
/// the frame callback starts, before any work, so a scroll during the
/// callback can schedule the next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// A gate with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Claims the gate. Returns `true` if the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Releases the gate after the scheduled frame ran.
    pub fn frame_fired(&mut self) {
        self.pending = false;
    }

    /// Whether a frame is currently scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LandingConfig;

    fn config() -> ParallaxConfig {
        LandingConfig::koppek().parallax
    }

    fn approx(a: f64, b: f64) -> bool {
        let d = a - b;
        d > -1e-9 && d < 1e-9
    }

    #[test]
    fn midpoint_pose() {
        let pose = ParallaxPose::at(0.5, &config()).expect("0.5 is inside (0, 1)");
        assert!(approx(pose.rotate_x_deg, 2.5), "rotate {}", pose.rotate_x_deg);
        assert!(approx(pose.translate_y_px, 15.0), "lift {}", pose.translate_y_px);
        assert!(approx(pose.opacity, 0.75), "opacity {}", pose.opacity);
        assert_eq!(pose.css_transform(), "rotateX(2.5deg) translateY(15px)");
    }

    #[test]
    fn late_progress_clamps_to_rest() {
        let pose = ParallaxPose::at(0.9, &config()).expect("0.9 is inside (0, 1)");
        assert_eq!(pose.rotate_x_deg, 0.0);
        assert_eq!(pose.translate_y_px, 0.0);
        assert!(approx(pose.opacity, 0.95), "opacity {}", pose.opacity);
    }

    #[test]
    fn outside_open_interval_keeps_previous_pose() {
        for p in [0.0, -0.3, 1.0, 1.7, f64::NAN] {
            assert_eq!(ParallaxPose::at(p, &config()), None, "progress {p}");
        }
    }

    #[test]
    fn progress_from_geometry() {
        // 800px viewport, 400px tall element whose top sits at 200px.
        let rect = Rect::new(0.0, 200.0, 300.0, 600.0);
        assert!(approx(progress(800.0, rect), 0.5));

        // Entirely below the fold.
        let below = Rect::new(0.0, 900.0, 300.0, 1_300.0);
        assert!(progress(800.0, below) < 0.0);
    }

    #[test]
    fn degenerate_geometry_is_ignored() {
        let p = progress(0.0, Rect::ZERO);
        assert_eq!(ParallaxPose::at(p, &config()), None, "0/0 progress");
    }

    #[test]
    fn pose_patch_sets_transform_and_opacity() {
        let pose = ParallaxPose::at(0.5, &config()).expect("inside");
        let patch = pose.patch();
        assert_eq!(patch.len(), 2);
        assert!(matches!(patch.ops()[1], PatchOp::SetOpacity { opacity, .. } if approx(opacity, 0.75)));
    }

    #[test]
    fn gate_coalesces_scroll_bursts() {
        let mut gate = FrameGate::new();
        let scheduled = (0..10).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1, "one frame per burst");
        assert!(gate.is_pending());

        gate.frame_fired();
        assert!(!gate.is_pending());
        assert!(gate.request(), "next burst schedules again");
    }

    #[test]
    fn scroll_during_frame_work_schedules_one_more() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        // Frame starts: release first, then do the work.
        gate.frame_fired();
        let during_work = (0..3).filter(|_| gate.request()).count();
        assert_eq!(during_work, 1);
        assert!(gate.is_pending());
    }
}
