// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless state machines for an interactive landing page.
//!
//! `vitrine_core` owns every piece of page state that outlives a single
//! event: the carousel's current slide, its autoplay timer, the persisted
//! colour theme, and the header's scroll elevation. It is `no_std`
//! compatible (with `alloc`) and never touches a browser API directly.
//! Platform access goes through the narrow traits in [`element`],
//! [`storage`], [`autoplay`] and [`subscription`], which the web backend
//! implements for real DOM objects and [`testing`] implements as doubles.
//!
//! # Architecture
//!
//! ```text
//!   Bindings<E> ──► Carousel::new ──► SlideRegistry (id → index)
//!                        │
//!   user input ──► press_next / follow_link / key / swipe ──┐
//!   IntervalTimer ──► autoplay_tick(handle) ────────────────┤
//!   VisibilitySource ──► follow_visible_slide (instant) ────┤
//!                                                           ▼
//!                                   go_to ──► track / indicators / links
//!
//!   MediaPreference ──► ThemeStore::on_system_change ──► data-theme
//!   scroll offset ──► ScrollShadow::on_scroll ──► box-shadow
//! ```
//!
//! **[`carousel`]** — The slide controller. One index, three views, and
//! every input modality funnelled through a single transition function.
//!
//! **[`slide`]** — Index wrapping and the id → index [`SlideRegistry`](slide::SlideRegistry).
//!
//! **[`autoplay`]** — Interval-driven advance with a single live timer.
//!
//! **[`gesture`]** — Horizontal swipe recognition.
//!
//! **[`theme`]** — Light/dark theme with sticky user choice.
//!
//! **[`shadow`]** — Header elevation derived from scroll offset.
//!
//! **[`video`]** — Visibility-driven playback decisions.
//!
//! **[`subscription`]** — Unsubscribe handles for observer-style platform
//! callbacks.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and events for
//! state-transition logging, with a zero-overhead [`Tracer`](trace::Tracer).
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` dispatch.
//! - `test-support` (disabled by default): Exposes [`testing`] doubles.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod element;
pub mod gesture;
pub mod shadow;
pub mod slide;
pub mod storage;
pub mod subscription;
pub mod theme;
pub mod trace;
pub mod video;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
