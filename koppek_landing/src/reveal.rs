// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal-on-scroll.

use koppek_backend_web::IntersectionWatcher;
use koppek_core::config::RevealConfig;
use koppek_core::patch::Target;
use koppek_core::reveal::RevealTracker;
use koppek_core::trace::{Behavior, RevealEvent};
use wasm_bindgen::prelude::*;

use crate::Shared;

/// Marks each revealable element visible the first time it scrolls in.
pub(crate) fn install(shared: &Shared, config: &'static RevealConfig) -> Result<(), JsValue> {
    let targets = shared.presenter.borrow().elements().reveal.clone();
    let total = targets.len();
    let mut tracker = RevealTracker::new(total, config.visible_class);

    let batch_shared = shared.clone();
    let watcher = IntersectionWatcher::new(&config.observer, targets, move |entries| {
        let before = tracker.revealed_count();
        let patch = tracker.observe(entries);
        batch_shared.apply(&patch);

        let indices = patch.iter().filter_map(|op| match op.target() {
            Target::Reveal(index) => Some(index),
            _ => None,
        });
        for (n, index) in indices.enumerate() {
            let event = RevealEvent {
                index,
                revealed: to_u32(before + n + 1),
                total: to_u32(total),
            };
            batch_shared.trace(|t| t.reveal(&event));
        }
    })?;
    core::mem::forget(watcher);

    shared.installed(Behavior::Reveal, total);
    Ok(())
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
