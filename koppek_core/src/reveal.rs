// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-way reveal of elements as they scroll into view.

use alloc::vec;
use alloc::vec::Vec;

use crate::intersection::IntersectionEntry;
use crate::patch::{DomPatch, PatchOp, Target};

/// Tracks which revealable elements have been marked visible.
///
/// The marker is only ever added. Scrolling an element back out of view does
/// not hide it again.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    visible_class: &'static str,
}

impl RevealTracker {
    /// Tracks `count` elements, none revealed yet.
    #[must_use]
    pub fn new(count: usize, visible_class: &'static str) -> Self {
        Self {
            revealed: vec![false; count],
            visible_class,
        }
    }

    /// Number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// Returns `true` if no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Whether element `index` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, index: u32) -> bool {
        self.revealed.get(index as usize).copied().unwrap_or(false)
    }

    /// How many elements have been revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Marks every intersecting entry visible.
    ///
    /// Entries for already revealed or unknown indices produce nothing.
    pub fn observe(&mut self, entries: &[IntersectionEntry]) -> DomPatch {
        let mut patch = DomPatch::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(revealed) = self.revealed.get_mut(entry.index as usize) else {
                continue;
            };
            if *revealed {
                continue;
            }
            *revealed = true;
            patch.push(PatchOp::AddClass {
                target: Target::Reveal(entry.index),
                class: self.visible_class,
            });
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: u32, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            index,
            is_intersecting,
            ratio: if is_intersecting { 0.2 } else { 0.0 },
        }
    }

    #[test]
    fn intersecting_entries_are_revealed() {
        let mut tracker = RevealTracker::new(3, "visible");
        let patch = tracker.observe(&[entry(0, true), entry(1, false), entry(2, true)]);
        assert_eq!(patch.len(), 2);
        assert!(patch.touches(Target::Reveal(0)));
        assert!(!patch.touches(Target::Reveal(1)));
        assert!(patch.touches(Target::Reveal(2)));
        assert_eq!(tracker.revealed_count(), 2);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut tracker = RevealTracker::new(2, "visible");
        let _ = tracker.observe(&[entry(1, true)]);
        for round in 0..5 {
            let patch = tracker.observe(&[entry(1, round % 2 == 0), entry(0, false)]);
            assert!(
                patch
                    .iter()
                    .all(|op| !matches!(op, PatchOp::RemoveClass { .. })),
                "reveal never removes the marker"
            );
            assert!(tracker.is_revealed(1), "still revealed after round {round}");
        }
        assert!(!tracker.is_revealed(0));
    }

    #[test]
    fn marker_is_emitted_once() {
        let mut tracker = RevealTracker::new(1, "visible");
        assert_eq!(tracker.observe(&[entry(0, true)]).len(), 1);
        assert!(tracker.observe(&[entry(0, true)]).is_empty());
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1, "visible");
        assert!(tracker.observe(&[entry(7, true)]).is_empty());
        assert!(!tracker.is_revealed(7));
    }
}
