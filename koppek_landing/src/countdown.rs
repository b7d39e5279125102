// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Launch countdown.

use koppek_backend_web::{Interval, page};
use koppek_core::config::CountdownConfig;
use koppek_core::countdown::{Countdown, Slot};
use koppek_core::trace::{Behavior, CountdownTickEvent};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::Shared;

/// Renders the countdown now, then once per tick for the page lifetime.
pub(crate) fn install(
    shared: &Shared,
    doc: &Document,
    config: &'static CountdownConfig,
) -> Result<(), JsValue> {
    let target = koppek_backend_web::resolve_launch(config.launch);
    let mut countdown = Countdown::new(target, config);
    {
        let presenter = shared.presenter.borrow();
        for slot in Slot::ALL {
            if let Some(text) = presenter.elements().slot_text(slot) {
                countdown.seed(slot, text);
            }
        }
    }

    let tick_shared = shared.clone();
    let mut tick = move || {
        let update = countdown.tick(koppek_backend_web::now());
        tick_shared.apply(&update.patch);
        tick_shared.trace(|t| t.countdown_tick(&CountdownTickEvent::from(&update)));
    };
    tick();
    core::mem::forget(Interval::new(config.tick_ms, tick));

    // The first pulse above is instant; later ones animate.
    page::style_class(doc, config.value_class, "transition", config.value_transition)?;
    shared.installed(Behavior::Countdown, Slot::ALL.len());
    Ok(())
}
