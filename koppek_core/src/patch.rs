// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM patches produced by the page behaviors.
//!
//! Every behavior turns its inputs (a clock reading, intersection entries,
//! element geometry, media events) into a [`DomPatch`]: an ordered list of
//! [`PatchOp`]s against named [`Target`]s. A [`Presenter`] applies the patch
//! to the live page; tests inspect it directly.
//!
//! [`Presenter`]: crate::backend::Presenter

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::countdown::Slot;

/// An element a patch operation writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// One of the four countdown display slots.
    Slot(Slot),
    /// The app preview element (in-view class and parallax transform).
    Preview,
    /// The logo video.
    Video,
    /// The static logo fallback shown when the video is unavailable.
    Fallback,
    /// The `n`th revealable element, in document order.
    Reveal(u32),
}

/// CSS `display` values the media fallback switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Display {
    /// `display: block`.
    Block,
    /// `display: none`.
    None,
}

impl Display {
    /// Returns the CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// A single DOM write.
#[derive(Clone, Debug, PartialEq)]
pub enum PatchOp {
    /// Replace the element's text content.
    SetText {
        /// Element to write.
        target: Target,
        /// New text.
        text: String,
    },
    /// Scale the element up to `scale`, then back to `scale(1)` after
    /// `settle_ms` milliseconds.
    Pulse {
        /// Element to pulse.
        target: Target,
        /// Peak scale factor.
        scale: f64,
        /// Delay before scaling back down.
        settle_ms: u32,
    },
    /// Add a class (idempotent).
    AddClass {
        /// Element to mark.
        target: Target,
        /// Class name.
        class: &'static str,
    },
    /// Remove a class (idempotent).
    RemoveClass {
        /// Element to unmark.
        target: Target,
        /// Class name.
        class: &'static str,
    },
    /// Set the inline `transform` style.
    SetTransform {
        /// Element to transform.
        target: Target,
        /// CSS transform value.
        css: String,
    },
    /// Set the inline `opacity` style.
    SetOpacity {
        /// Element to fade.
        target: Target,
        /// Opacity in `0.0..=1.0`.
        opacity: f64,
    },
    /// Set the inline `display` style.
    SetDisplay {
        /// Element to show or hide.
        target: Target,
        /// Display value.
        display: Display,
    },
}

impl PatchOp {
    /// Returns the element this operation writes to.
    #[must_use]
    pub const fn target(&self) -> Target {
        match self {
            Self::SetText { target, .. }
            | Self::Pulse { target, .. }
            | Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::SetTransform { target, .. }
            | Self::SetOpacity { target, .. }
            | Self::SetDisplay { target, .. } => *target,
        }
    }
}

/// An ordered batch of [`PatchOp`]s.
#[derive(Clone, Default, PartialEq)]
pub struct DomPatch {
    ops: Vec<PatchOp>,
}

impl DomPatch {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Appends an operation.
    pub fn push(&mut self, op: PatchOp) {
        self.ops.push(op);
    }

    /// Returns `true` if applying this patch would write nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Operations in application order.
    #[must_use]
    pub fn ops(&self) -> &[PatchOp] {
        &self.ops
    }

    /// Iterates over the operations in application order.
    pub fn iter(&self) -> core::slice::Iter<'_, PatchOp> {
        self.ops.iter()
    }

    /// Returns `true` if any operation targets `target`.
    #[must_use]
    pub fn touches(&self, target: Target) -> bool {
        self.ops.iter().any(|op| op.target() == target)
    }
}

impl Extend<PatchOp> for DomPatch {
    fn extend<I: IntoIterator<Item = PatchOp>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl From<PatchOp> for DomPatch {
    fn from(op: PatchOp) -> Self {
        Self { ops: alloc::vec![op] }
    }
}

impl<'a> IntoIterator for &'a DomPatch {
    type Item = &'a PatchOp;
    type IntoIter = core::slice::Iter<'a, PatchOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl fmt::Debug for DomPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.ops).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touches_reports_targets() {
        let mut patch = DomPatch::new();
        assert!(patch.is_empty(), "fresh patch is empty");
        patch.push(PatchOp::AddClass {
            target: Target::Reveal(3),
            class: "visible",
        });
        patch.push(PatchOp::SetDisplay {
            target: Target::Video,
            display: Display::None,
        });
        assert_eq!(patch.len(), 2);
        assert!(patch.touches(Target::Reveal(3)), "reveal target written");
        assert!(patch.touches(Target::Video), "video target written");
        assert!(!patch.touches(Target::Fallback), "fallback untouched");
    }

    #[test]
    fn display_css_keywords() {
        assert_eq!(Display::Block.as_css(), "block");
        assert_eq!(Display::None.as_css(), "none");
    }
}
