// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for vitrine
//! diagnostics.
//!
//! This crate provides [`TraceSink`](vitrine_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: timestamped in-memory recording, shareable
//!   between controllers through [`recorder::SharedRecorder`].
//! - [`timeline::export`]: writes Chrome Trace Event Format JSON from a
//!   recording.

pub mod pretty;
pub mod recorder;
pub mod timeline;
