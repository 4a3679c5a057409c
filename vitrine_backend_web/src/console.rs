// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Developer-console logging.

use alloc::format;
use alloc::string::{String, ToString};

use vitrine_core::trace::{
    AutoplayEvent, ElevationEvent, SlideChangedEvent, StorageErrorEvent, ThemeEvent, TraceSink,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::console;

const PREFIX: &str = "[vitrine]";

/// A [`TraceSink`] printing one console line per event.
///
/// Storage failures go to `console.warn`, everything else to
/// `console.debug` so the output hides behind the "Verbose" filter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        let from = e.from.map_or_else(|| "-".to_string(), |i| i.to_string());
        debug(&format!(
            "slide {from} -> {} ({:?}, {:?})",
            e.to, e.cause, e.transition
        ));
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        let state = if e.running { "running" } else { "stopped" };
        debug(&format!("autoplay {state} ({:?})", e.reason));
    }

    fn on_theme_applied(&mut self, e: &ThemeEvent) {
        debug(&format!("theme {} ({:?})", e.theme, e.source));
    }

    fn on_elevation(&mut self, e: &ElevationEvent) {
        debug(&format!("header {:?} at {}px", e.elevation, e.offset));
    }

    fn on_storage_error(&mut self, e: &StorageErrorEvent<'_>) {
        console::warn_1(&JsValue::from_str(&format!(
            "{PREFIX} could not persist {:?}: {}",
            e.key, e.error
        )));
    }
}

fn debug(line: &str) {
    console::debug_1(&JsValue::from_str(&format!("{PREFIX} {line}")));
}

/// Logs `message` and the JS value that caused it with `console.log`.
pub fn log_error(message: &str, error: &JsValue) {
    console::log_2(&JsValue::from_str(&format!("{PREFIX} {message}:")), error);
}

/// Renders a thrown JS value as text.
///
/// `Error` objects yield `"Name: message"`; strings are returned as-is;
/// anything else is described by its type.
#[must_use]
pub fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{value:?}")
}
