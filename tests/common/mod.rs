//! Test doubles shared by the integration tests
//!
//! The recording driver and both simulated delays append to one timeline,
//! so tests see exactly how driver writes and waits interleave.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use qo100_beacon::{CwOutParams, RfTestDriver, ToneParams, Transmitter};

/// Something the core asked of the outside world
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// RF test subsystem initialized
    Init,
    /// Frequency register write
    SetFrequency { carrier_mhz: u16, offset_khz: i32 },
    /// Key switch
    ForceTx(bool),
    /// CW tone start
    StartTone(ToneParams),
    /// Full-power enable
    CwOut(CwOutParams),
    /// Busy-wait in microseconds
    Busy(u32),
    /// Scheduler-yielding wait in milliseconds
    Yield(u32),
}

/// Shared event log
#[derive(Clone, Debug, Default)]
pub struct Timeline(Rc<RefCell<Vec<Event>>>);

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Driver that records every call
pub struct RecordingDriver {
    timeline: Timeline,
}

impl RfTestDriver for RecordingDriver {
    fn init(&mut self) {
        self.timeline.push(Event::Init);
    }

    fn set_frequency(&mut self, carrier_mhz: u16, offset_khz: i32) {
        self.timeline.push(Event::SetFrequency {
            carrier_mhz,
            offset_khz,
        });
    }

    fn force_tx(&mut self, on: bool) {
        self.timeline.push(Event::ForceTx(on));
    }

    fn start_tx_tone(&mut self, params: ToneParams) {
        self.timeline.push(Event::StartTone(params));
    }

    fn cw_out(&mut self, params: &CwOutParams) {
        self.timeline.push(Event::CwOut(*params));
    }
}

/// Busy-wait delay that records instead of blocking
pub struct SimClock {
    timeline: Timeline,
}

impl embedded_hal::delay::DelayNs for SimClock {
    fn delay_ns(&mut self, ns: u32) {
        self.timeline.push(Event::Busy(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.timeline.push(Event::Busy(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timeline.push(Event::Busy(ms.saturating_mul(1000)));
    }
}

/// Yielding delay that records instead of sleeping
pub struct SimScheduler {
    timeline: Timeline,
}

impl embedded_hal_async::delay::DelayNs for SimScheduler {
    async fn delay_ns(&mut self, ns: u32) {
        self.timeline.push(Event::Yield(ns / 1_000_000));
    }

    async fn delay_us(&mut self, us: u32) {
        self.timeline.push(Event::Yield(us / 1000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.timeline.push(Event::Yield(ms));
    }
}

pub type SimTransmitter = Transmitter<RecordingDriver, SimClock>;

/// Transmitter wired to a fresh timeline
pub fn transmitter() -> (SimTransmitter, Timeline) {
    let timeline = Timeline::new();
    let tx = Transmitter::new(
        RecordingDriver {
            timeline: timeline.clone(),
        },
        SimClock {
            timeline: timeline.clone(),
        },
    );
    (tx, timeline)
}

/// Yielding delay on an existing timeline
pub fn scheduler(timeline: &Timeline) -> SimScheduler {
    SimScheduler {
        timeline: timeline.clone(),
    }
}

/// A keyed or silent interval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interval {
    /// Key down, microseconds
    Tone(u32),
    /// Key up, microseconds
    Gap(u32),
}

/// Reduce a timeline to its busy-wait intervals, split by key state
pub fn intervals(events: &[Event]) -> Vec<Interval> {
    let mut key_down = false;
    let mut out = Vec::new();
    for event in events {
        match *event {
            Event::ForceTx(on) => key_down = on,
            Event::Busy(us) if key_down => out.push(Interval::Tone(us)),
            Event::Busy(us) => out.push(Interval::Gap(us)),
            _ => {}
        }
    }
    out
}

/// Interval lengths in whole milliseconds
pub fn interval_ms(events: &[Event]) -> Vec<u32> {
    intervals(events)
        .into_iter()
        .map(|i| match i {
            Interval::Tone(us) | Interval::Gap(us) => us / 1000,
        })
        .collect()
}
