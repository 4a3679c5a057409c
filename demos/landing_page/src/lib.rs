// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo: the landing page behaviors wired to a real document.
//!
//! Looks up the page once with [`PageBindings`], then mounts four
//! independent behaviors: the theme toggle, the carousel, the header
//! scroll shadow, and visibility-driven video playback. Every state
//! transition is logged to the console and recorded; the recording is
//! available from JavaScript through [`vitrine_trace_json`] (Chrome Trace
//! Event Format) and [`vitrine_trace_text`].
//!
//! Build with: `wasm-pack build --target web demos/landing_page`
//!
//! Then serve `demos/landing_page/` and open `index.html` in a browser.
//!
//! [`PageBindings`]: vitrine_backend_web::PageBindings

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, KeyboardEvent};

use vitrine_backend_web::{
    BrowserStore, ConsoleSink, DARK_SCHEME_QUERY, DomElement, Intersections, MediaQuery,
    PageBindings, REDUCED_MOTION_QUERY, Selectors, WindowIntervals, follow_videos, listen,
    listen_passive, touch_point,
};
use vitrine_core::carousel::{Carousel, Key, LinkAction, follow_viewport};
use vitrine_core::config::{CarouselConfig, ShadowConfig, ThemeConfig};
use vitrine_core::element::Element as _;
use vitrine_core::shadow::ScrollShadow;
use vitrine_core::subscription::MediaPreference as _;
use vitrine_core::theme::{ThemeStore, watch_system};
use vitrine_core::trace::Tee;
use vitrine_debug::recorder::{RecorderSink, SharedRecorder};
use vitrine_debug::{pretty, timeline};

type PageCarousel = Carousel<DomElement, WindowIntervals>;
type PageSink = Tee<ConsoleSink, SharedRecorder>;

thread_local! {
    static RECORDER: RefCell<Option<SharedRecorder>> = const { RefCell::new(None) };
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let page = PageBindings::query(&Selectors::landing())?;

    let recorder = SharedRecorder::new(RecorderSink::with_clock(vitrine_backend_web::now_ms));
    RECORDER.with_borrow_mut(|slot| *slot = Some(recorder.clone()));
    let sink = || Tee(ConsoleSink, recorder.clone());

    mount_theme(&page, sink());
    mount_carousel(&page, sink());
    mount_shadow(&page, sink());

    // Page-lifetime observers; there is no teardown on the web.
    for subscription in follow_videos(&page.videos) {
        subscription.detach();
    }

    Ok(())
}

/// Returns the interaction trace recorded so far as Chrome Trace Event
/// Format JSON.
#[wasm_bindgen]
#[must_use]
pub fn vitrine_trace_json() -> String {
    RECORDER.with_borrow(|slot| {
        let records = slot.as_ref().map(SharedRecorder::snapshot).unwrap_or_default();
        timeline::export_string(&records)
    })
}

/// Returns the interaction trace recorded so far, one line per event.
#[wasm_bindgen]
#[must_use]
pub fn vitrine_trace_text() -> String {
    RECORDER.with_borrow(|slot| {
        let records = slot.as_ref().map(SharedRecorder::snapshot).unwrap_or_default();
        pretty::render(&records)
    })
}

fn mount_theme(page: &PageBindings, sink: PageSink) {
    let dark = MediaQuery::new(&page.window, DARK_SCHEME_QUERY);
    let system_dark = dark.as_ref().is_some_and(|q| q.matches());

    let mut store = ThemeStore::new(
        BrowserStore::open(&page.window),
        page.root.clone(),
        ThemeConfig::landing(),
    );
    store.set_trace_sink(sink);
    store.init(system_dark);
    let store = Rc::new(RefCell::new(store));

    if let Some(dark) = &dark {
        watch_system(&store, dark).detach();
    }
    if let Some(toggle) = &page.theme_toggle {
        let store = Rc::clone(&store);
        listen(toggle.as_element(), "click", move |_| {
            store.borrow_mut().toggle();
        })
        .detach();
    }
}

fn mount_carousel(page: &PageBindings, sink: PageSink) {
    let reduced_motion = MediaQuery::snapshot(&page.window, REDUCED_MOTION_QUERY);

    // The interval callback needs the carousel that owns the interval timer.
    let carousel = Rc::new_cyclic(|weak: &Weak<RefCell<PageCarousel>>| {
        let weak = weak.clone();
        let timer = WindowIntervals::new(move |handle| {
            if let Some(carousel) = weak.upgrade()
                && let Ok(mut carousel) = carousel.try_borrow_mut()
            {
                carousel.autoplay_tick(handle);
            }
        });
        RefCell::new(Carousel::new(
            page.carousel.clone(),
            timer,
            CarouselConfig::landing(),
            reduced_motion,
        ))
    });
    {
        let mut c = carousel.borrow_mut();
        c.set_trace_sink(sink);
        c.mount();
    }
    if !carousel.borrow().is_enabled() {
        return;
    }

    let bindings = carousel.borrow().bindings().clone();

    if let Some(prev) = &bindings.prev_button {
        on(&carousel, prev.as_element(), "click", |c, _| {
            c.press_prev();
        });
    }
    if let Some(next) = &bindings.next_button {
        on(&carousel, next.as_element(), "click", |c, _| {
            c.press_next();
        });
    }
    for (position, indicator) in bindings.indicators.iter().enumerate() {
        on(&carousel, indicator.as_element(), "click", move |c, _| {
            c.select_indicator(position);
        });
    }
    for link in &bindings.nav_links {
        let href = link.attribute("href").unwrap_or_default();
        on(&carousel, link.as_element(), "click", move |c, event| {
            if let LinkAction::Navigate(_) = c.follow_link(&href) {
                event.prevent_default();
            }
        });
    }

    on(&carousel, &page.document, "keydown", |c, event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            c.key(Key::from_key_name(&event.key()));
        }
    });

    if let Some(track) = &bindings.track {
        on_passive(&carousel, track.as_element(), "touchstart", |c, event| {
            if let Some(at) = touch_point(event) {
                c.touch_start(at);
            }
        });
        on_passive(&carousel, track.as_element(), "touchend", |c, event| {
            if let Some(at) = touch_point(event) {
                c.touch_end(at);
            }
        });
    }

    if let Some(container) = &page.container {
        let region = container.as_element();
        on(&carousel, region, "mouseenter", |c, _| c.pointer_enter());
        on(&carousel, region, "mouseleave", |c, _| c.pointer_leave());
        on(&carousel, region, "focusin", |c, _| c.focus_in());
        on(&carousel, region, "focusout", |c, _| c.focus_out());
    }

    let document = page.document.clone();
    on(&carousel, &page.document, "visibilitychange", move |c, _| {
        c.set_page_visible(!document.hidden());
    });

    for subscription in follow_viewport(&carousel, &Intersections) {
        subscription.detach();
    }
}

fn mount_shadow(page: &PageBindings, sink: PageSink) {
    let mut shadow = ScrollShadow::new(page.header.clone(), ShadowConfig::landing());
    shadow.set_trace_sink(sink);

    let window = page.window.clone();
    listen_passive(&page.window, "scroll", move |_| {
        shadow.on_scroll(window.scroll_y().unwrap_or(0.0));
    })
    .detach();
}

/// Routes `kind` events on `target` into the carousel for the page lifetime.
fn on(
    carousel: &Rc<RefCell<PageCarousel>>,
    target: &EventTarget,
    kind: &'static str,
    mut handler: impl FnMut(&mut PageCarousel, &Event) + 'static,
) {
    let carousel = Rc::clone(carousel);
    listen(target, kind, move |event| {
        handler(&mut carousel.borrow_mut(), &event);
    })
    .detach();
}

/// Like [`on`], with a passive listener.
fn on_passive(
    carousel: &Rc<RefCell<PageCarousel>>,
    target: &EventTarget,
    kind: &'static str,
    mut handler: impl FnMut(&mut PageCarousel, &Event) + 'static,
) {
    let carousel = Rc::clone(carousel);
    listen_passive(target, kind, move |event| {
        handler(&mut carousel.borrow_mut(), &event);
    })
    .detach();
}
