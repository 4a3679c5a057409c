// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing for page state transitions.
//!
//! This module provides a [`TraceSink`] trait with one method per event
//! kind. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing and installed sinks
//! are dropped immediately. When **on**, each method performs a single
//! `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

#[cfg(feature = "trace")]
use alloc::boxed::Box;

use crate::autoplay::AutoplayReason;
use crate::carousel::{ChangeCause, Transition};
use crate::shadow::Elevation;
use crate::storage::StorageError;
use crate::theme::{Theme, ThemeSource};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the carousel moves to a new slide and syncs its views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChangedEvent {
    /// Slide shown before the change; `None` for the initial render.
    pub from: Option<usize>,
    /// Slide shown now.
    pub to: usize,
    /// Which input caused the change.
    pub cause: ChangeCause,
    /// How the track moved.
    pub transition: Transition,
}

/// Emitted when autoplay starts or stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayEvent {
    /// `true` if autoplay is running after the transition.
    pub running: bool,
    /// What triggered the transition.
    pub reason: AutoplayReason,
}

/// Emitted when a theme is applied to the root element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeEvent {
    /// The theme now shown.
    pub theme: Theme,
    /// Where the choice came from.
    pub source: ThemeSource,
}

/// Emitted when the header crosses the elevation threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationEvent {
    /// The new elevation.
    pub elevation: Elevation,
    /// Scroll offset that caused the change, in CSS pixels.
    pub offset: f64,
}

/// Emitted when a storage write fails.
#[derive(Clone, Copy, Debug)]
pub struct StorageErrorEvent<'a> {
    /// Key being written.
    pub key: &'a str,
    /// The failure.
    pub error: &'a StorageError,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the page state machines.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after the carousel changes slide.
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        _ = e;
    }

    /// Called when autoplay starts or stops.
    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        _ = e;
    }

    /// Called when a theme is applied.
    fn on_theme_applied(&mut self, e: &ThemeEvent) {
        _ = e;
    }

    /// Called when the header elevation changes.
    fn on_elevation(&mut self, e: &ElevationEvent) {
        _ = e;
    }

    /// Called when persisting a value fails.
    fn on_storage_error(&mut self, e: &StorageErrorEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// Provided sinks
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Forwards every event to two sinks, first `.0` then `.1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<A, B> {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        self.0.on_slide_changed(e);
        self.1.on_slide_changed(e);
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.0.on_autoplay(e);
        self.1.on_autoplay(e);
    }

    fn on_theme_applied(&mut self, e: &ThemeEvent) {
        self.0.on_theme_applied(e);
        self.1.on_theme_applied(e);
    }

    fn on_elevation(&mut self, e: &ElevationEvent) {
        self.0.on_elevation(e);
        self.1.on_elevation(e);
    }

    fn on_storage_error(&mut self, e: &StorageErrorEvent<'_>) {
        self.0.on_storage_error(e);
        self.1.on_storage_error(e);
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: impl TraceSink + 'static) -> Self {
        let mut tracer = Self::none();
        tracer.set_sink(sink);
        tracer
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Replaces the sink.
    #[inline]
    pub fn set_sink(&mut self, sink: impl TraceSink + 'static) {
        #[cfg(feature = "trace")]
        {
            self.sink = Some(Box::new(sink));
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
        }
    }

    /// Returns `true` if events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`SlideChangedEvent`].
    #[inline]
    pub fn slide_changed(&mut self, e: &SlideChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_slide_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AutoplayEvent`].
    #[inline]
    pub fn autoplay(&mut self, e: &AutoplayEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_autoplay(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ThemeEvent`].
    #[inline]
    pub fn theme_applied(&mut self, e: &ThemeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_theme_applied(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ElevationEvent`].
    #[inline]
    pub fn elevation(&mut self, e: &ElevationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_elevation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StorageErrorEvent`].
    #[inline]
    pub fn storage_error(&mut self, e: &StorageErrorEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_storage_error(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slide() -> SlideChangedEvent {
        SlideChangedEvent {
            from: Some(1),
            to: 2,
            cause: ChangeCause::Button,
            transition: Transition::Smooth,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_slide_changed(&sample_slide());
        sink.on_autoplay(&AutoplayEvent {
            running: true,
            reason: AutoplayReason::Startup,
        });
        sink.on_storage_error(&StorageErrorEvent {
            key: "k",
            error: &StorageError::Rejected("SecurityError".into()),
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_enabled());
        tracer.slide_changed(&sample_slide());
        tracer.elevation(&ElevationEvent {
            elevation: Elevation::Elevated,
            offset: 120.0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_both_tee_halves() {
        use crate::testing::EventLog;

        let first = EventLog::new();
        let second = EventLog::new();
        let mut tracer = Tracer::new(Tee(first.clone(), second.clone()));
        assert!(tracer.is_enabled());
        tracer.slide_changed(&sample_slide());
        assert_eq!(first.slides(), &[sample_slide()]);
        assert_eq!(second.slides(), &[sample_slide()]);
    }
}
