// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] turns a recording from a
//! [`RecorderSink`](super::recorder::RecorderSink) into
//! [Chrome Trace Event Format][format] JSON, loadable in `chrome://tracing`
//! or [Perfetto](https://ui.perfetto.dev/).
//!
//! Each controller gets its own track (`tid`). Autoplay running time is
//! drawn as `B`/`E` duration spans; every other event is an instant.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{Record, RecordedEvent};

const TID_CAROUSEL: u32 = 1;
const TID_AUTOPLAY: u32 = 2;
const TID_THEME: u32 = 3;
const TID_SHADOW: u32 = 4;
const TID_STORAGE: u32 = 5;

/// Builds the trace event array for `records`.
///
/// An autoplay span still open at the end of the recording is left open;
/// trace viewers draw it to the end of the timeline.
#[must_use]
pub fn events(records: &[Record]) -> Vec<Value> {
    let mut events = Vec::with_capacity(records.len());
    let mut autoplay_open = false;

    for record in records {
        let ts = ms_to_us(record.at_ms);
        match &record.event {
            RecordedEvent::SlideChanged(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("Slide {}", e.to),
                    "cat": "Carousel",
                    "ts": ts,
                    "pid": 0,
                    "tid": TID_CAROUSEL,
                    "s": "t",
                    "args": {
                        "from": e.from,
                        "to": e.to,
                        "cause": format!("{:?}", e.cause),
                        "transition": format!("{:?}", e.transition),
                    }
                }));
            }
            RecordedEvent::Autoplay(e) => {
                // A restart while running keeps the current span.
                let ph = match (e.running, autoplay_open) {
                    (true, false) => "B",
                    (false, true) => "E",
                    _ => continue,
                };
                autoplay_open = e.running;
                events.push(json!({
                    "ph": ph,
                    "name": "Autoplay",
                    "cat": "Carousel",
                    "ts": ts,
                    "pid": 0,
                    "tid": TID_AUTOPLAY,
                    "args": {
                        "reason": format!("{:?}", e.reason),
                    }
                }));
            }
            RecordedEvent::Theme(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("Theme {}", e.theme),
                    "cat": "Theme",
                    "ts": ts,
                    "pid": 0,
                    "tid": TID_THEME,
                    "s": "t",
                    "args": {
                        "source": format!("{:?}", e.source),
                    }
                }));
            }
            RecordedEvent::Elevation(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("{:?}", e.elevation),
                    "cat": "Shadow",
                    "ts": ts,
                    "pid": 0,
                    "tid": TID_SHADOW,
                    "s": "t",
                    "args": {
                        "offset_px": e.offset,
                    }
                }));
            }
            RecordedEvent::StorageError { key, error } => {
                events.push(json!({
                    "ph": "i",
                    "name": "StorageError",
                    "cat": "Storage",
                    "ts": ts,
                    "pid": 0,
                    "tid": TID_STORAGE,
                    "s": "g",
                    "args": {
                        "key": key,
                        "error": error.to_string(),
                    }
                }));
            }
        }
    }

    events
}

/// Writes `records` as a pretty-printed JSON array of trace events.
pub fn export(records: &[Record], writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &events(records))?;
    Ok(())
}

/// Returns `records` as a compact JSON string.
#[must_use]
pub fn export_string(records: &[Record]) -> String {
    Value::Array(events(records)).to_string()
}

fn ms_to_us(ms: f64) -> f64 {
    ms * 1000.0
}

#[cfg(test)]
mod tests {
    use vitrine_core::autoplay::AutoplayReason;
    use vitrine_core::carousel::{ChangeCause, Transition};
    use vitrine_core::storage::StorageError;
    use vitrine_core::theme::{Theme, ThemeSource};
    use vitrine_core::trace::{AutoplayEvent, SlideChangedEvent, ThemeEvent};

    use super::*;

    fn at(at_ms: f64, event: RecordedEvent) -> Record {
        Record { at_ms, event }
    }

    fn autoplay(running: bool, reason: AutoplayReason) -> RecordedEvent {
        RecordedEvent::Autoplay(AutoplayEvent { running, reason })
    }

    #[test]
    fn export_produces_valid_json() {
        let records = [
            at(
                0.5,
                RecordedEvent::Theme(ThemeEvent {
                    theme: Theme::Dark,
                    source: ThemeSource::System,
                }),
            ),
            at(
                1.0,
                RecordedEvent::SlideChanged(SlideChangedEvent {
                    from: Some(0),
                    to: 1,
                    cause: ChangeCause::Keyboard,
                    transition: Transition::Smooth,
                }),
            ),
        ];

        let mut out = Vec::new();
        export(&records, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0]["name"], "Theme dark");
        assert_eq!(parsed[0]["ts"], 500.0);

        assert_eq!(parsed[1]["ph"], "i");
        assert_eq!(parsed[1]["tid"], TID_CAROUSEL);
        assert_eq!(parsed[1]["args"]["cause"], "Keyboard");
        assert_eq!(parsed[1]["args"]["from"], 0);
    }

    #[test]
    fn autoplay_restarts_do_not_nest_spans() {
        let records = [
            at(0.0, autoplay(true, AutoplayReason::Startup)),
            at(10.0, autoplay(true, AutoplayReason::PointerLeave)),
            at(20.0, autoplay(false, AutoplayReason::PointerEnter)),
            at(30.0, autoplay(true, AutoplayReason::PointerLeave)),
        ];
        let phases: Vec<Value> = events(&records).iter().map(|e| e["ph"].clone()).collect();
        assert_eq!(phases, [json!("B"), json!("E"), json!("B")]);
    }

    #[test]
    fn storage_errors_carry_their_message() {
        let records = [at(
            3.0,
            RecordedEvent::StorageError {
                key: "cenm-theme".to_owned(),
                error: StorageError::Rejected("SecurityError".to_owned()),
            },
        )];
        let parsed: Vec<Value> = serde_json::from_str(&export_string(&records)).unwrap();
        assert_eq!(parsed[0]["args"]["key"], "cenm-theme");
        assert_eq!(
            parsed[0]["args"]["error"],
            "storage rejected operation: SecurityError"
        );
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }
}
