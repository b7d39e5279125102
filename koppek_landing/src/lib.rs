// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The KoppeK landing page script.
//!
//! Once the document is parsed this installs five independent behaviors:
//! the launch countdown, the logo video fallback, reveal-on-scroll, the
//! preview in-view marker and the preview parallax. Only the countdown is
//! required; every other behavior skips itself when its elements are missing.
//!
//! Build with: `wasm-pack build --target web koppek_landing`
//! Then load the generated module from the landing page.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod countdown;
mod media;
mod parallax;
mod preview;
mod reveal;

use alloc::rc::Rc;
use core::cell::RefCell;

use koppek_backend_web::page::{elements_with_class, optional_element, required_element};
use koppek_backend_web::{ConsoleSink, DomPresenter, PageElements, Presenter as _};
use koppek_core::config::LandingConfig;
use koppek_core::patch::DomPatch;
use koppek_core::trace::{Behavior, BehaviorEvent, InstallStatus, SkipReason, Tracer};
use wasm_bindgen::prelude::*;

static CONFIG: LandingConfig = LandingConfig::koppek();

/// State shared by every installed behavior.
#[derive(Clone)]
struct Shared {
    presenter: Rc<RefCell<DomPresenter>>,
    sink: Rc<RefCell<ConsoleSink>>,
}

impl Shared {
    fn new(presenter: DomPresenter, sink: ConsoleSink) -> Self {
        Self {
            presenter: Rc::new(RefCell::new(presenter)),
            sink: Rc::new(RefCell::new(sink)),
        }
    }

    fn apply(&self, patch: &DomPatch) {
        if !patch.is_empty() {
            self.presenter.borrow_mut().apply(patch);
        }
    }

    fn trace(&self, f: impl FnOnce(&mut Tracer<'_>)) {
        let mut sink = self.sink.borrow_mut();
        let mut tracer = Tracer::new(&mut *sink);
        f(&mut tracer);
    }

    fn installed(&self, behavior: Behavior, elements: usize) {
        let status = InstallStatus::Installed(u32::try_from(elements).unwrap_or(u32::MAX));
        self.trace(|t| t.behavior(&BehaviorEvent { behavior, status }));
    }

    fn skipped(&self, behavior: Behavior, reason: SkipReason) {
        let status = InstallStatus::Skipped(reason);
        self.trace(|t| t.behavior(&BehaviorEvent { behavior, status }));
    }
}

/// Entry point for the landing page.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    koppek_backend_web::on_ready(|| {
        if let Err(err) = install(&CONFIG) {
            wasm_bindgen::throw_val(err);
        }
    })
}

/// Looks up the page elements and installs every behavior.
///
/// Fails if a countdown slot is missing or a browser registration call
/// throws.
fn install(config: &'static LandingConfig) -> Result<(), JsValue> {
    let doc = koppek_backend_web::document()?;
    let ids = &config.ids;

    let slots = [
        required_element(&doc, ids.days)?,
        required_element(&doc, ids.hours)?,
        required_element(&doc, ids.minutes)?,
        required_element(&doc, ids.seconds)?,
    ];
    let elements = PageElements {
        slots,
        preview: optional_element(&doc, ids.preview),
        video: optional_element(&doc, ids.video),
        fallback: optional_element(&doc, ids.fallback),
        reveal: elements_with_class(&doc, config.reveal.reveal_class)?,
    };
    let shared = Shared::new(DomPresenter::new(elements), ConsoleSink::default());

    countdown::install(&shared, &doc, &config.countdown)?;
    media::install(&shared, ids, &config.media)?;
    reveal::install(&shared, &config.reveal)?;
    preview::install(&shared, ids, &config.preview)?;
    parallax::install(&shared, ids, &config.parallax)?;
    Ok(())
}
