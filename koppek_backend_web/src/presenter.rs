// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM patch application.
//!
//! Translates [`DomPatch`] operations into class, style and text writes on the
//! page's elements.
//!
//! [`DomPatch`]: koppek_core::patch::DomPatch

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use koppek_core::backend::Presenter;
use koppek_core::countdown::Slot;
use koppek_core::patch::{DomPatch, PatchOp, Target};
use web_sys::{Element, HtmlElement};

use crate::timer;

/// The elements a [`DomPresenter`] writes to.
///
/// The countdown slots are required; everything else is optional and writes
/// to a missing element are skipped.
#[derive(Clone, Debug)]
pub struct PageElements {
    /// Days, hours, minutes and seconds, in [`Slot::ALL`] order.
    pub slots: [HtmlElement; 4],
    /// App preview.
    pub preview: Option<HtmlElement>,
    /// Logo video.
    pub video: Option<HtmlElement>,
    /// Static logo fallback.
    pub fallback: Option<HtmlElement>,
    /// Revealable elements, in document order.
    pub reveal: Vec<Element>,
}

impl PageElements {
    /// Returns the element for `target`, if present.
    #[must_use]
    pub fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Reveal(i) => self.reveal.get(i as usize),
            _ => self
                .html_element(target)
                .map(<HtmlElement as AsRef<Element>>::as_ref),
        }
    }

    /// Returns the styleable element for `target`, if present.
    ///
    /// Revealable elements are only ever marked with classes, so they have no
    /// styleable form here.
    #[must_use]
    pub fn html_element(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Slot(slot) => Some(&self.slots[slot.index()]),
            Target::Preview => self.preview.as_ref(),
            Target::Video => self.video.as_ref(),
            Target::Fallback => self.fallback.as_ref(),
            Target::Reveal(_) => None,
        }
    }

    /// The text a slot currently shows.
    #[must_use]
    pub fn slot_text(&self, slot: Slot) -> Option<String> {
        self.slots[slot.index()].text_content()
    }
}

/// Applies [`DomPatch`]es to live page elements.
pub struct DomPresenter {
    elements: PageElements,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("preview", &self.elements.preview.is_some())
            .field("video", &self.elements.video.is_some())
            .field("fallback", &self.elements.fallback.is_some())
            .field("reveal_len", &self.elements.reveal.len())
            .finish_non_exhaustive()
    }
}

impl DomPresenter {
    /// Creates a presenter over `elements`.
    #[must_use]
    pub fn new(elements: PageElements) -> Self {
        Self { elements }
    }

    /// Returns the managed elements.
    #[must_use]
    pub fn elements(&self) -> &PageElements {
        &self.elements
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, patch: &DomPatch) {
        for op in patch {
            apply_op(&self.elements, op);
        }
    }
}

fn apply_op(elements: &PageElements, op: &PatchOp) {
    match op {
        PatchOp::SetText { target, text } => {
            if let Some(el) = elements.element(*target) {
                el.set_text_content(Some(text.as_str()));
            }
        }
        PatchOp::Pulse {
            target,
            scale,
            settle_ms,
        } => {
            if let Some(el) = elements.html_element(*target) {
                let _ = el.style().set_property("transform", &format!("scale({scale})"));
                let el = el.clone();
                timer::fire_once(*settle_ms, move || {
                    let _ = el.style().set_property("transform", "scale(1)");
                });
            }
        }
        PatchOp::AddClass { target, class } => {
            if let Some(el) = elements.element(*target) {
                let _ = el.class_list().add_1(class);
            }
        }
        PatchOp::RemoveClass { target, class } => {
            if let Some(el) = elements.element(*target) {
                let _ = el.class_list().remove_1(class);
            }
        }
        PatchOp::SetTransform { target, css } => {
            if let Some(el) = elements.html_element(*target) {
                let _ = el.style().set_property("transform", css);
            }
        }
        PatchOp::SetOpacity { target, opacity } => {
            if let Some(el) = elements.html_element(*target) {
                let _ = el.style().set_property("opacity", &format!("{opacity}"));
            }
        }
        PatchOp::SetDisplay { target, display } => {
            if let Some(el) = elements.html_element(*target) {
                let _ = el.style().set_property("display", display.as_css());
            }
        }
    }
}
