// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttled `requestAnimationFrame` callbacks.
//!
//! [`ThrottledFrame`] turns a burst of [`request`](ThrottledFrame::request)
//! calls (typically one per scroll event) into a single animation-frame
//! callback. A [`FrameGate`] tracks whether a frame is already pending; the
//! gate is released as the frame starts, before the user callback runs, so a
//! scroll event during the callback schedules a fresh frame.
//!
//! [`FrameGate`]: koppek_core::parallax::FrameGate

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use koppek_core::parallax::FrameGate;

// Global bindings, so scroll handlers never fetch the `Window`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type RafClosure = Closure<dyn FnMut(f64)>;

/// Coalesces frame requests so at most one callback is outstanding.
///
/// Create with [`ThrottledFrame::new`], then call
/// [`request`](Self::request) as often as you like. Dropping the value
/// cancels a pending frame; leak it with [`core::mem::forget`] to keep it for
/// the page lifetime.
pub struct ThrottledFrame {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Built once and reused for every request.
    closure: RefCell<Option<RafClosure>>,

    /// The user-supplied callback, given the frame timestamp in milliseconds.
    callback: RefCell<Box<dyn FnMut(f64)>>,

    /// Whether a frame is pending.
    gate: Cell<FrameGate>,

    /// Frames that actually ran.
    frames: Cell<u64>,

    /// The ID returned by the most recent `requestAnimationFrame` call.
    raf_id: Cell<i32>,
}

impl ThrottledFrame {
    /// Creates a throttle with nothing pending.
    pub fn new(callback: impl FnMut(f64) + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            closure: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
            gate: Cell::new(FrameGate::new()),
            frames: Cell::new(0),
            raf_id: Cell::new(0),
        });

        let frame_inner = Rc::clone(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let mut gate = frame_inner.gate.get();
            gate.frame_fired();
            frame_inner.gate.set(gate);

            frame_inner.frames.set(frame_inner.frames.get() + 1);
            frame_inner.callback.borrow_mut()(timestamp_ms);
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Schedules the callback for the next frame unless one is already
    /// pending. Returns `true` if a frame was scheduled.
    pub fn request(&self) -> bool {
        let mut gate = self.inner.gate.get();
        if !gate.request() {
            return false;
        }
        self.inner.gate.set(gate);

        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(id);
        }
        true
    }

    /// Returns `true` while a frame is scheduled but has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.gate.get().is_pending()
    }
}

impl Drop for ThrottledFrame {
    fn drop(&mut self) {
        if self.is_pending() {
            cancel_animation_frame(self.inner.raf_id.get());
            self.inner.gate.set(FrameGate::new());
        }
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for ThrottledFrame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ThrottledFrame")
            .field("pending", &self.inner.gate.get().is_pending())
            .field("frames", &self.inner.frames.get())
            .finish()
    }
}
