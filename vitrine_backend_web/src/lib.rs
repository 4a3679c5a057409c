// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for vitrine.
//!
//! This crate binds the headless state machines in `vitrine_core` to
//! browser APIs:
//!
//! - [`DomElement`]: the core's `Element` contract over `web_sys::Element`
//! - [`PageBindings`] / [`Selectors`]: one-shot DOM lookup at startup
//! - [`WindowIntervals`]: `setInterval` / `clearInterval` interval timer
//! - [`BrowserStore`]: `localStorage`, with an in-memory fallback
//! - [`MediaQuery`] / [`Intersections`]: `matchMedia` and
//!   `IntersectionObserver` sources
//! - [`listen`] / [`listen_passive`]: event listeners as unsubscribe handles
//! - [`ConsoleSink`]: trace events on the developer console
//! - [`apply_playback`] / [`follow_videos`]: visibility-driven `<video>`
//!   playback

#![no_std]

extern crate alloc;

mod bindings;
mod console;
mod element;
mod events;
mod observe;
mod storage;
mod timer;
mod video;

pub use bindings::{BindError, PageBindings, Selectors};
pub use console::{ConsoleSink, describe, log_error};
pub use element::DomElement;
pub use events::{listen, listen_passive, touch_point};
pub use observe::{Intersections, MediaQuery};
pub use storage::BrowserStore;
pub use timer::WindowIntervals;
pub use video::{apply_playback, follow_videos};
pub use vitrine_core::element::Element;

use wasm_bindgen::prelude::*;

// Direct global binding, as for the interval timer: the clock is read for
// every trace event.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

/// Returns milliseconds since page load from `performance.now()`.
#[must_use]
pub fn now_ms() -> f64 {
    performance_now()
}

/// Media query matched when the user asks for reduced motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Media query matched when the system colour scheme is dark.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
