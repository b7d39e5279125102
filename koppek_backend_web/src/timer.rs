// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` / `setTimeout` wrappers.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, ms: i32) -> i32;
}

/// A repeating timer. Cleared on drop.
pub struct Interval {
    id: i32,
    period_ms: u32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Calls `callback` every `period_ms` milliseconds, starting one period
    /// from now.
    pub fn new(period_ms: u32, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = set_interval(closure.as_ref().unchecked_ref(), clamp_ms(period_ms));
        Self {
            id,
            period_ms,
            _closure: closure,
        }
    }

    /// The period in milliseconds.
    #[must_use]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        clear_interval(self.id);
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval")
            .field("id", &self.id)
            .field("period_ms", &self.period_ms)
            .finish_non_exhaustive()
    }
}

/// Calls `callback` once after `delay_ms` milliseconds.
///
/// The timer cannot be cancelled; the closure frees itself after running.
pub fn fire_once(delay_ms: u32, callback: impl FnOnce() + 'static) {
    let js = Closure::once_into_js(callback);
    set_timeout(&js, clamp_ms(delay_ms));
}

/// Browsers take a signed 32-bit delay; anything larger fires immediately.
fn clamp_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}
