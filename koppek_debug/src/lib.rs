// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for KoppeK traces.
//!
//! This crate provides [`TraceSink`](koppek_core::trace::TraceSink)
//! implementations for development and for tests that drive the page
//! behaviors off-browser:
//!
//! - [`pretty::PrettyPrintSink`]: one human-readable line per event.
//! - [`recorder::RecorderSink`]: keeps events in memory, with
//!   [`recorder::replay`] to feed them to another sink.
//! - [`json::export`]: writes recorded events as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;
