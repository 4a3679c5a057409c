// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamped in-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! `Vec<Record>`, stamped with the milliseconds returned by its clock.
//! Several controllers usually trace into one recording, so
//! [`SharedRecorder`] wraps a recorder in `Rc<RefCell<_>>` and can be cloned
//! into each of them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use vitrine_core::storage::StorageError;
use vitrine_core::trace::{
    AutoplayEvent, ElevationEvent, SlideChangedEvent, StorageErrorEvent, ThemeEvent, TraceSink,
};

/// One recorded event, owning its data.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_slide_changed`].
    SlideChanged(SlideChangedEvent),
    /// See [`TraceSink::on_autoplay`].
    Autoplay(AutoplayEvent),
    /// See [`TraceSink::on_theme_applied`].
    Theme(ThemeEvent),
    /// See [`TraceSink::on_elevation`].
    Elevation(ElevationEvent),
    /// See [`TraceSink::on_storage_error`].
    StorageError {
        /// Key being written.
        key: String,
        /// The failure.
        error: StorageError,
    },
}

/// A [`RecordedEvent`] and when it happened.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Clock reading at record time, in milliseconds.
    pub at_ms: f64,
    /// The event.
    pub event: RecordedEvent,
}

/// A [`TraceSink`] that keeps every event in memory.
pub struct RecorderSink {
    clock: Box<dyn FnMut() -> f64>,
    records: Vec<Record>,
}

impl fmt::Debug for RecorderSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecorderSink")
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl Default for RecorderSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecorderSink {
    /// Creates a recorder that stamps every record with `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(|| 0.0)
    }

    /// Creates a recorder that reads `clock` (milliseconds) for each event.
    #[must_use]
    pub fn with_clock(clock: impl FnMut() -> f64 + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            records: Vec::new(),
        }
    }

    /// Returns the records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the recorder and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn push(&mut self, event: RecordedEvent) {
        let at_ms = (self.clock)();
        self.records.push(Record { at_ms, event });
    }
}

impl TraceSink for RecorderSink {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        self.push(RecordedEvent::SlideChanged(*e));
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.push(RecordedEvent::Autoplay(*e));
    }

    fn on_theme_applied(&mut self, e: &ThemeEvent) {
        self.push(RecordedEvent::Theme(*e));
    }

    fn on_elevation(&mut self, e: &ElevationEvent) {
        self.push(RecordedEvent::Elevation(*e));
    }

    fn on_storage_error(&mut self, e: &StorageErrorEvent<'_>) {
        self.push(RecordedEvent::StorageError {
            key: e.key.to_owned(),
            error: e.error.clone(),
        });
    }
}

/// A cloneable handle to one [`RecorderSink`].
#[derive(Clone, Debug, Default)]
pub struct SharedRecorder(Rc<RefCell<RecorderSink>>);

impl SharedRecorder {
    /// Wraps `recorder`.
    #[must_use]
    pub fn new(recorder: RecorderSink) -> Self {
        Self(Rc::new(RefCell::new(recorder)))
    }

    /// Returns a copy of the records, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Record> {
        self.0.borrow().records().to_vec()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().records().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every record.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl TraceSink for SharedRecorder {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        self.0.borrow_mut().on_slide_changed(e);
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.0.borrow_mut().on_autoplay(e);
    }

    fn on_theme_applied(&mut self, e: &ThemeEvent) {
        self.0.borrow_mut().on_theme_applied(e);
    }

    fn on_elevation(&mut self, e: &ElevationEvent) {
        self.0.borrow_mut().on_elevation(e);
    }

    fn on_storage_error(&mut self, e: &StorageErrorEvent<'_>) {
        self.0.borrow_mut().on_storage_error(e);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use vitrine_core::autoplay::AutoplayReason;
    use vitrine_core::carousel::{Bindings, Carousel, ChangeCause, Transition};
    use vitrine_core::config::CarouselConfig;
    use vitrine_core::testing::{FakeElement, VirtualTimer};

    use super::*;

    fn clocked() -> RecorderSink {
        let now = Rc::new(Cell::new(0.0));
        RecorderSink::with_clock(move || {
            now.set(now.get() + 10.0);
            now.get()
        })
    }

    #[test]
    fn records_are_stamped_in_order() {
        let mut rec = clocked();
        rec.on_autoplay(&AutoplayEvent {
            running: true,
            reason: AutoplayReason::Startup,
        });
        rec.on_storage_error(&StorageErrorEvent {
            key: "cenm-theme",
            error: &StorageError::Rejected("SecurityError".to_owned()),
        });

        let stamps: Vec<f64> = rec.records().iter().map(|r| r.at_ms).collect();
        assert_eq!(stamps, [10.0, 20.0]);
        assert_eq!(
            rec.records()[1].event,
            RecordedEvent::StorageError {
                key: "cenm-theme".to_owned(),
                error: StorageError::Rejected("SecurityError".to_owned()),
            }
        );
    }

    #[test]
    fn shared_recorder_collects_a_carousel_session() {
        let recorder = SharedRecorder::new(RecorderSink::new());
        let slides = ["a", "b", "c"].map(FakeElement::with_id).to_vec();
        let mut carousel = Carousel::new(
            Bindings {
                track: Some(FakeElement::new()),
                slides,
                ..Bindings::default()
            },
            VirtualTimer::new(),
            CarouselConfig::landing(),
            false,
        );
        carousel.set_trace_sink(recorder.clone());
        carousel.mount();
        carousel.press_prev();

        let slides: Vec<_> = recorder
            .snapshot()
            .into_iter()
            .filter_map(|r| match r.event {
                RecordedEvent::SlideChanged(e) => Some((e.to, e.cause, e.transition)),
                _ => None,
            })
            .collect();
        assert_eq!(
            slides,
            [
                (0, ChangeCause::Initial, Transition::Instant),
                (2, ChangeCause::Button, Transition::Smooth),
            ]
        );
        assert_eq!(recorder.len(), 4, "two slide and two autoplay events");

        recorder.clear();
        assert!(recorder.is_empty());
    }
}
