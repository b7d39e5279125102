// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON trace export.
//!
//! [`export`] writes events recorded by a
//! [`RecorderSink`](super::recorder::RecorderSink) as a JSON array, one object
//! per event. Each object carries a `"kind"` tag plus the event's fields;
//! times are wall-clock milliseconds.

use std::io::{self, Write};

use serde_json::{Value, json};

use koppek_core::media::MediaEvent;
use koppek_core::trace::{InstallStatus, SkipReason};

use crate::recorder::RecordedEvent;

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &values)?;
    writeln!(writer)
}

/// Converts one event to its JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Behavior(e) => {
            let (installed, detail) = match e.status {
                InstallStatus::Installed(n) => (true, json!({ "elements": n })),
                InstallStatus::Skipped(SkipReason::MissingElement(id)) => {
                    (false, json!({ "missing": id }))
                }
                InstallStatus::Skipped(SkipReason::ReducedMotion) => {
                    (false, json!({ "reduced_motion": true }))
                }
            };
            json!({
                "kind": "behavior",
                "behavior": e.behavior.as_str(),
                "installed": installed,
                "detail": detail,
            })
        }
        RecordedEvent::CountdownTick(e) => json!({
            "kind": "countdown_tick",
            "now_ms": e.now.millis(),
            "remaining_ms": e.remaining.map(|r| r.millis()),
            "changed_slots": e.changed_slots,
        }),
        RecordedEvent::Reveal(e) => json!({
            "kind": "reveal",
            "index": e.index,
            "revealed": e.revealed,
            "total": e.total,
        }),
        RecordedEvent::Preview(e) => json!({
            "kind": "preview",
            "ratio": e.ratio,
            "is_intersecting": e.is_intersecting,
            "in_view": e.in_view,
            "changed": e.changed,
        }),
        RecordedEvent::ParallaxFrame(e) => {
            let pose = e.pose.map(|p| {
                json!({
                    "rotate_x_deg": p.rotate_x_deg,
                    "translate_y_px": p.translate_y_px,
                    "opacity": p.opacity,
                })
            });
            json!({
                "kind": "parallax_frame",
                "progress": e.progress,
                "pose": pose,
            })
        }
        RecordedEvent::MediaTransition(e) => {
            let ready_state = match e.cause {
                MediaEvent::Timeout(ready) => Value::from(format!("{ready:?}")),
                MediaEvent::Error | MediaEvent::LoadedData => Value::Null,
            };
            json!({
                "kind": "media_transition",
                "cause": cause_name(e.cause),
                "ready_state": ready_state,
                "from": e.from.as_str(),
                "to": e.to.as_str(),
            })
        }
    }
}

fn cause_name(cause: MediaEvent) -> &'static str {
    match cause {
        MediaEvent::Error => "error",
        MediaEvent::LoadedData => "loadeddata",
        MediaEvent::Timeout(_) => "timeout",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koppek_core::media::{MediaState, ReadyState};
    use koppek_core::time::{Remaining, WallTime};
    use koppek_core::trace::{
        Behavior, BehaviorEvent, CountdownTickEvent, MediaTransitionEvent,
    };

    #[test]
    fn countdown_tick_fields() {
        let v = to_value(&RecordedEvent::CountdownTick(CountdownTickEvent {
            now: WallTime(10),
            remaining: Some(Remaining(61_000)),
            changed_slots: 2,
        }));
        assert_eq!(v["kind"], "countdown_tick");
        assert_eq!(v["remaining_ms"], 61_000);
        assert_eq!(v["changed_slots"], 2);
    }

    #[test]
    fn expired_tick_has_null_remaining() {
        let v = to_value(&RecordedEvent::CountdownTick(CountdownTickEvent {
            now: WallTime(10),
            remaining: None,
            changed_slots: 4,
        }));
        assert!(v["remaining_ms"].is_null());
    }

    #[test]
    fn skipped_behavior_names_missing_id() {
        let v = to_value(&RecordedEvent::Behavior(BehaviorEvent {
            behavior: Behavior::Preview,
            status: InstallStatus::Skipped(SkipReason::MissingElement("appPreview")),
        }));
        assert_eq!(v["behavior"], "preview");
        assert_eq!(v["installed"], false);
        assert_eq!(v["detail"]["missing"], "appPreview");
    }

    #[test]
    fn timeout_carries_ready_state() {
        let v = to_value(&RecordedEvent::MediaTransition(MediaTransitionEvent {
            cause: MediaEvent::Timeout(ReadyState::HaveNothing),
            from: MediaState::Pending,
            to: MediaState::FallbackShown,
        }));
        assert_eq!(v["cause"], "timeout");
        assert_eq!(v["ready_state"], "HaveNothing");
        assert_eq!(v["to"], "fallback");
    }

    #[test]
    fn export_writes_array() {
        let events = [
            RecordedEvent::Behavior(BehaviorEvent {
                behavior: Behavior::Countdown,
                status: InstallStatus::Installed(4),
            }),
            RecordedEvent::CountdownTick(CountdownTickEvent {
                now: WallTime(0),
                remaining: Some(Remaining(1_000)),
                changed_slots: 4,
            }),
        ];
        let mut out = Vec::new();
        export(&events, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[1]["kind"], "countdown_tick");
    }
}
