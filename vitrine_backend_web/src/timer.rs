// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` interval timer.
//!
//! [`WindowIntervals`] implements the core's [`IntervalTimer`] with the
//! browser's `setInterval`. Each interval owns a JS closure that forwards
//! its tick, tagged with the interval's [`TimerHandle`], to the callback
//! given at construction.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::time::Duration;

use vitrine_core::autoplay::{IntervalTimer, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn window_set_interval(callback: &JsValue, millis: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn window_clear_interval(id: i32);
}

type TickClosure = Closure<dyn FnMut()>;

struct Live {
    /// Id returned by `setInterval`.
    js_id: i32,
    /// Kept alive until the interval is cleared.
    _closure: TickClosure,
}

/// An [`IntervalTimer`] backed by `window.setInterval`.
///
/// Dropping it clears every live interval.
pub struct WindowIntervals {
    on_tick: Rc<dyn Fn(TimerHandle)>,
    next: u32,
    live: BTreeMap<u32, Live>,
}

impl WindowIntervals {
    /// Creates a timer delivering every tick to `on_tick`.
    pub fn new(on_tick: impl Fn(TimerHandle) + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
            next: 0,
            live: BTreeMap::new(),
        }
    }
}

impl IntervalTimer for WindowIntervals {
    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        self.next = self.next.wrapping_add(1);
        let handle = TimerHandle(self.next);

        let on_tick = Rc::clone(&self.on_tick);
        let closure = Closure::wrap(Box::new(move || on_tick(handle)) as Box<dyn FnMut()>);
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let js_id = window_set_interval(closure.as_ref(), millis);
        self.live.insert(
            handle.0,
            Live {
                js_id,
                _closure: closure,
            },
        );
        handle
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        if let Some(live) = self.live.remove(&handle.0) {
            window_clear_interval(live.js_id);
        }
    }
}

impl Drop for WindowIntervals {
    fn drop(&mut self) {
        for live in self.live.values() {
            window_clear_interval(live.js_id);
        }
    }
}

impl core::fmt::Debug for WindowIntervals {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowIntervals")
            .field("live", &self.live.len())
            .finish_non_exhaustive()
    }
}
