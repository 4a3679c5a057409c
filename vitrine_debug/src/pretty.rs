// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).
//! [`render`] formats a recording the same way, with timestamps.

use std::fmt::Write as _;
use std::io::Write;

use vitrine_core::trace::{
    AutoplayEvent, ElevationEvent, SlideChangedEvent, StorageErrorEvent, ThemeEvent, TraceSink,
};

use crate::recorder::{Record, RecordedEvent};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, event: &RecordedEvent) {
        let _ = writeln!(self.writer, "{}", describe(event));
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_slide_changed(&mut self, e: &SlideChangedEvent) {
        self.line(&RecordedEvent::SlideChanged(*e));
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.line(&RecordedEvent::Autoplay(*e));
    }

    fn on_theme_applied(&mut self, e: &ThemeEvent) {
        self.line(&RecordedEvent::Theme(*e));
    }

    fn on_elevation(&mut self, e: &ElevationEvent) {
        self.line(&RecordedEvent::Elevation(*e));
    }

    fn on_storage_error(&mut self, e: &StorageErrorEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[storage] key={:?} error={}",
            e.key, e.error
        );
    }
}

/// Formats one event without a timestamp.
#[must_use]
pub fn describe(event: &RecordedEvent) -> String {
    match event {
        RecordedEvent::SlideChanged(e) => {
            let from = e.from.map_or_else(|| "-".to_owned(), |i| i.to_string());
            format!(
                "[slide] {from}->{} cause={:?} transition={:?}",
                e.to, e.cause, e.transition
            )
        }
        RecordedEvent::Autoplay(e) => {
            let state = if e.running { "start" } else { "stop" };
            format!("[autoplay] {state} reason={:?}", e.reason)
        }
        RecordedEvent::Theme(e) => format!("[theme] {} source={:?}", e.theme, e.source),
        RecordedEvent::Elevation(e) => {
            format!("[shadow] {:?} offset={:.0}px", e.elevation, e.offset)
        }
        RecordedEvent::StorageError { key, error } => {
            format!("[storage] key={key:?} error={error}")
        }
    }
}

/// Formats a recording, one `"{ms} {event}"` line per record.
#[must_use]
pub fn render(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{:>9.1}ms {}", record.at_ms, describe(&record.event));
    }
    out
}

#[cfg(test)]
mod tests {
    use vitrine_core::carousel::{ChangeCause, Transition};
    use vitrine_core::shadow::Elevation;
    use vitrine_core::storage::StorageError;

    use super::*;

    #[test]
    fn pretty_print_slide() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_slide_changed(&SlideChangedEvent {
            from: Some(4),
            to: 0,
            cause: ChangeCause::Autoplay,
            transition: Transition::Smooth,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(
            output,
            "[slide] 4->0 cause=Autoplay transition=Smooth\n",
            "got: {output}"
        );
    }

    #[test]
    fn pretty_print_storage_error() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_storage_error(&StorageErrorEvent {
            key: "cenm-theme",
            error: &StorageError::Rejected("QuotaExceededError".to_owned()),
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.starts_with("[storage] key=\"cenm-theme\""), "got: {output}");
        assert!(output.contains("QuotaExceededError"), "got: {output}");
    }

    #[test]
    fn render_prefixes_timestamps() {
        let records = [
            Record {
                at_ms: 12.0,
                event: RecordedEvent::Elevation(ElevationEvent {
                    elevation: Elevation::Elevated,
                    offset: 140.0,
                }),
            },
            Record {
                at_ms: 1500.5,
                event: RecordedEvent::SlideChanged(SlideChangedEvent {
                    from: None,
                    to: 0,
                    cause: ChangeCause::Initial,
                    transition: Transition::Instant,
                }),
            },
        ];
        let text = render(&records);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "     12.0ms [shadow] Elevated offset=140px");
        assert_eq!(
            lines[1],
            "   1500.5ms [slide] -->0 cause=Initial transition=Instant"
        );
    }
}
