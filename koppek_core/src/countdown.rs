// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Countdown to the launch instant.
//!
//! [`CountdownParts`] decomposes a [`Remaining`] duration into days, hours,
//! minutes and seconds with plain integer division (days are always 24 hours).
//! [`Countdown`] remembers what each of the four [`Slot`]s currently shows and
//! turns a clock reading into a [`DomPatch`] that rewrites, and pulses, only
//! the slots whose text changed.

use alloc::format;
use alloc::string::String;

use crate::config::CountdownConfig;
use crate::patch::{DomPatch, PatchOp, Target};
use crate::time::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, Remaining, WallTime};

/// One of the four countdown display cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Whole days.
    Days,
    /// Hours within the day.
    Hours,
    /// Minutes within the hour.
    Minutes,
    /// Seconds within the minute.
    Seconds,
}

impl Slot {
    /// All slots, largest unit first.
    pub const ALL: [Self; 4] = [Self::Days, Self::Hours, Self::Minutes, Self::Seconds];

    /// Position in [`Slot::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Days => 0,
            Self::Hours => 1,
            Self::Minutes => 2,
            Self::Seconds => 3,
        }
    }
}

/// A duration split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CountdownParts {
    /// Whole days.
    pub days: u64,
    /// Hours within the day, `0..24`.
    pub hours: u64,
    /// Minutes within the hour, `0..60`.
    pub minutes: u64,
    /// Seconds within the minute, `0..60`.
    pub seconds: u64,
}

impl CountdownParts {
    /// All units zero; what the display shows once the launch has passed.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Splits a millisecond count. Sub-second remainders are dropped.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Splits the time left, or [`ZERO`](Self::ZERO) once it has run out.
    #[must_use]
    pub const fn from_remaining(remaining: Option<Remaining>) -> Self {
        match remaining {
            Some(r) => Self::from_millis(r.millis()),
            None => Self::ZERO,
        }
    }

    /// Reassembles the parts into whole milliseconds.
    #[must_use]
    pub const fn total_millis(self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    /// Returns the value shown in `slot`.
    #[must_use]
    pub const fn get(self, slot: Slot) -> u64 {
        match slot {
            Slot::Days => self.days,
            Slot::Hours => self.hours,
            Slot::Minutes => self.minutes,
            Slot::Seconds => self.seconds,
        }
    }

    /// Renders all four slots, largest unit first.
    #[must_use]
    pub fn slot_texts(self) -> [String; 4] {
        Slot::ALL.map(|slot| pad2(self.get(slot)))
    }
}

/// Zero-pads to two digits. Larger values keep all their digits.
#[must_use]
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// Result of a single [`Countdown::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct CountdownUpdate {
    /// Clock reading the tick was computed for.
    pub now: WallTime,
    /// Time left, or `None` once the launch instant has passed.
    pub remaining: Option<Remaining>,
    /// What the display now shows.
    pub parts: CountdownParts,
    /// DOM writes for the slots that changed.
    pub patch: DomPatch,
    /// Number of slots rewritten by this tick.
    pub changed_slots: u8,
}

/// Countdown display state.
#[derive(Clone, Debug)]
pub struct Countdown {
    target: WallTime,
    pulse_scale: f64,
    pulse_ms: u32,
    rendered: [Option<String>; 4],
}

impl Countdown {
    /// Creates a countdown to `target` that has not rendered anything yet.
    #[must_use]
    pub fn new(target: WallTime, config: &CountdownConfig) -> Self {
        Self {
            target,
            pulse_scale: config.pulse_scale,
            pulse_ms: config.pulse_ms,
            rendered: [None, None, None, None],
        }
    }

    /// Records the text a slot already shows, so the first tick only writes
    /// (and pulses) slots that actually differ from the served page.
    pub fn seed(&mut self, slot: Slot, text: impl Into<String>) {
        self.rendered[slot.index()] = Some(text.into());
    }

    /// The launch instant.
    #[must_use]
    pub const fn target(&self) -> WallTime {
        self.target
    }

    /// The text a slot currently shows, if known.
    #[must_use]
    pub fn rendered(&self, slot: Slot) -> Option<&str> {
        self.rendered[slot.index()].as_deref()
    }

    /// Computes the display for `now`.
    ///
    /// Before the target every changed slot gets a text write followed by a
    /// pulse. After the target every slot reads `"00"`; those writes are not
    /// pulsed. Slots whose text is unchanged are never touched.
    pub fn tick(&mut self, now: WallTime) -> CountdownUpdate {
        let remaining = Remaining::until(self.target, now);
        let parts = CountdownParts::from_remaining(remaining);
        let pulse = remaining.is_some();

        let mut patch = DomPatch::new();
        let mut changed_slots = 0_u8;
        for (slot, text) in Slot::ALL.into_iter().zip(parts.slot_texts()) {
            let current = &mut self.rendered[slot.index()];
            if current.as_deref() == Some(text.as_str()) {
                continue;
            }
            let target = Target::Slot(slot);
            if pulse {
                patch.push(PatchOp::Pulse {
                    target,
                    scale: self.pulse_scale,
                    settle_ms: self.pulse_ms,
                });
            }
            patch.push(PatchOp::SetText {
                target,
                text: text.clone(),
            });
            *current = Some(text);
            changed_slots += 1;
        }

        CountdownUpdate {
            now,
            remaining,
            parts,
            patch,
            changed_slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::config::LandingConfig;

    fn countdown(target: i64) -> Countdown {
        Countdown::new(WallTime(target), &LandingConfig::koppek().countdown)
    }

    fn texts(c: &Countdown) -> Vec<&str> {
        Slot::ALL
            .iter()
            .map(|&s| c.rendered(s).unwrap_or("<unset>"))
            .collect()
    }

    #[test]
    fn decomposes_one_of_each_unit() {
        let parts = CountdownParts::from_millis(90_061_000);
        assert_eq!(
            parts,
            CountdownParts {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(parts.slot_texts(), ["01", "01", "01", "01"].map(String::from));
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        let parts = CountdownParts::from_millis(59_999);
        assert_eq!(parts.seconds, 59);
        assert_eq!(parts.minutes, 0);
    }

    #[test]
    fn parts_reconstruct_within_a_second() {
        for ms in [0, 999, 1_000, 3_599_999, 86_399_999, 123_456_789, 9_876_543_210] {
            let parts = CountdownParts::from_millis(ms);
            let back = parts.total_millis();
            assert!(back <= ms && ms - back < 1_000, "{ms} rebuilt as {back}");
            for text in parts.slot_texts() {
                assert!(text.len() >= 2, "slot text {text:?} is padded");
            }
        }
    }

    #[test]
    fn triple_digit_days_are_not_truncated() {
        let parts = CountdownParts::from_millis(123 * MS_PER_DAY);
        assert_eq!(pad2(parts.days), "123");
        assert_eq!(pad2(7), "07");
    }

    #[test]
    fn first_tick_writes_and_pulses_every_slot() {
        let mut c = countdown(90_061_000);
        let update = c.tick(WallTime(0));
        assert_eq!(update.changed_slots, 4);
        assert_eq!(update.patch.len(), 8, "pulse + text per slot");
        assert!(matches!(
            update.patch.ops()[0],
            PatchOp::Pulse {
                target: Target::Slot(Slot::Days),
                settle_ms: 100,
                ..
            }
        ));
        assert_eq!(texts(&c), ["01", "01", "01", "01"]);
    }

    #[test]
    fn unchanged_tick_is_a_no_op() {
        let mut c = countdown(90_061_500);
        let _ = c.tick(WallTime(0));
        // Still inside the same whole second: nothing to redraw.
        let update = c.tick(WallTime(400));
        assert!(update.patch.is_empty(), "got {:?}", update.patch);
        assert_eq!(update.changed_slots, 0);

        let again = c.tick(WallTime(400));
        assert!(again.patch.is_empty(), "got {:?}", again.patch);
    }

    #[test]
    fn only_changed_slots_are_touched() {
        let mut c = countdown(90_061_000);
        let _ = c.tick(WallTime(0));
        let update = c.tick(WallTime(1_000));
        assert_eq!(update.changed_slots, 1);
        assert!(update.patch.touches(Target::Slot(Slot::Seconds)));
        assert!(!update.patch.touches(Target::Slot(Slot::Minutes)));
        assert_eq!(c.rendered(Slot::Seconds), Some("00"));
    }

    #[test]
    fn seeded_slots_skip_the_first_pulse() {
        let mut c = countdown(90_061_000);
        for slot in Slot::ALL {
            c.seed(slot, "01");
        }
        let update = c.tick(WallTime(0));
        assert!(update.patch.is_empty(), "page already shows 01:01:01:01");
    }

    #[test]
    fn after_target_every_slot_reads_zero_without_pulse() {
        let mut c = countdown(10_000);
        let _ = c.tick(WallTime(0));
        let update = c.tick(WallTime(10_001));
        assert_eq!(update.remaining, None);
        assert_eq!(update.parts, CountdownParts::ZERO);
        assert_eq!(texts(&c), ["00", "00", "00", "00"]);
        assert!(
            update
                .patch
                .iter()
                .all(|op| matches!(op, PatchOp::SetText { .. })),
            "expiry writes are not pulsed"
        );

        // Keeps reporting zero without further writes.
        let later = c.tick(WallTime(50_000));
        assert!(later.patch.is_empty(), "still zero, nothing to write");
    }

    #[test]
    fn exactly_at_target_reads_zero() {
        let mut c = countdown(10_000);
        let update = c.tick(WallTime(10_000));
        assert_eq!(update.remaining, Some(Remaining::ZERO));
        assert_eq!(texts(&c), ["00", "00", "00", "00"]);
    }
}
