//! Tests for the waveform synthesis generators
//!
//! Checks iteration counts and register write sequences of the jam,
//! square-wave FM and sine-table AM generators.
//! Run with: cargo test --no-default-features --features std --test synth_tests

mod common;

use common::{transmitter, Event};
use qo100_beacon::synth::am::sample_attenuation;
use qo100_beacon::synth::lut::{AM_LUT, AM_LUT_LEN, JAM_LUT_LEN};
use qo100_beacon::synth::{JamPlan, SineAmPlan, SquareWavePlan};
use qo100_beacon::{Attenuation, CwOutParams, Error, Parameter, ToneParams};

const CARRIER: u16 = 2400;

fn freq(offset_khz: i32) -> Event {
    Event::SetFrequency {
        carrier_mhz: CARRIER,
        offset_khz,
    }
}

// ============================================================================
// Jam Generator Tests
// ============================================================================

#[test]
fn jam_short_duration_enables_power_without_sweeping() {
    let (mut tx, timeline) = transmitter();
    let plan = tx.jam(CARRIER, 10);

    assert_eq!(plan, JamPlan { repeat: 0 });
    assert_eq!(
        timeline.events(),
        vec![Event::CwOut(CwOutParams::full_power(6))]
    );
}

#[test]
fn jam_full_power_parameters() {
    assert_eq!(CwOutParams::full_power(6).to_raw(), [1, 6, 0]);
}

#[test]
fn jam_one_sweep_walks_the_table() {
    let (mut tx, timeline) = transmitter();
    let plan = tx.jam(CARRIER, 69);
    assert_eq!(plan.repeat, 1);

    let events = timeline.events();
    assert_eq!(events.len(), 1 + JAM_LUT_LEN);
    assert_eq!(events[0], Event::CwOut(CwOutParams::full_power(6)));
    assert_eq!(events[1], freq(500));
    assert_eq!(events[1 + 64], freq(1500));
    assert_eq!(events[1 + 128], freq(500));
    assert_eq!(events[1 + 192], freq(-500));
}

#[test]
fn jam_never_waits() {
    let (mut tx, timeline) = transmitter();
    let plan = tx.jam(CARRIER, 1000);
    assert_eq!(plan.repeat, 14);

    let events = timeline.events();
    assert_eq!(events.len(), 1 + 14 * JAM_LUT_LEN);
    assert!(events
        .iter()
        .all(|e| !matches!(e, Event::Busy(_) | Event::Yield(_))));
}

// ============================================================================
// Square-Wave FM Tests
// ============================================================================

#[test]
fn squarewave_plan_one_khz_ten_ms() {
    let plan = SquareWavePlan::new(1000, 10).unwrap();
    assert_eq!(
        plan,
        SquareWavePlan {
            half_period_us: 999,
            repeat: 3
        }
    );
}

#[test]
fn squarewave_writes_high_and_low_halves() {
    let (mut tx, timeline) = transmitter();
    tx.squarewave_fm(CARRIER, 1000, 10).unwrap();

    let cycle = [freq(100), Event::Busy(999), freq(0), Event::Busy(999)];
    let expected: Vec<Event> = cycle.iter().copied().cycle().take(4 * 3).collect();
    assert_eq!(timeline.events(), expected);
}

#[test]
fn squarewave_zero_signal_is_rejected() {
    let (mut tx, timeline) = transmitter();
    assert_eq!(
        tx.squarewave_fm(CARRIER, 0, 10),
        Err(Error::InvalidParameter(Parameter::SignalHz))
    );
    assert!(timeline.is_empty());
}

#[test]
fn squarewave_too_short_for_one_cycle() {
    let (mut tx, timeline) = transmitter();
    // 1000 / 1265 = 0
    let plan = tx.squarewave_fm(CARRIER, 1000, 1).unwrap();
    assert_eq!(plan.repeat, 0);
    assert!(timeline.is_empty());
}

#[test]
fn squarewave_init_keys_and_parks_carrier() {
    let (mut tx, timeline) = transmitter();
    tx.squarewave_fm_init(CARRIER, Attenuation::new(20));

    assert_eq!(
        timeline.events(),
        vec![
            Event::ForceTx(true),
            Event::StartTone(ToneParams::cw(Attenuation::new(20))),
            freq(0),
        ]
    );
}

// ============================================================================
// Sine-Table AM Tests
// ============================================================================

#[test]
fn sin_am_plan_one_khz_ten_ms() {
    let plan = SineAmPlan::new(1000, 10).unwrap();
    assert_eq!(
        plan,
        SineAmPlan {
            sample_delay_us: 15,
            repeat: 8
        }
    );
}

#[test]
fn sin_am_sets_carrier_once_then_steps_attenuation() {
    let (mut tx, timeline) = transmitter();
    tx.sin_am(CARRIER, 1000, 10).unwrap();

    let events = timeline.events();
    assert_eq!(events[0], freq(0));
    assert_eq!(events.len(), 1 + 8 * AM_LUT_LEN * 2);

    for (j, pair) in events[1..].chunks(2).take(AM_LUT_LEN).enumerate() {
        let expected = Attenuation::new((100 - i16::from(AM_LUT[j])) as u8);
        assert_eq!(pair[0], Event::StartTone(ToneParams::cw(expected)));
        assert_eq!(pair[1], Event::Busy(15));
    }
    assert!(events[1..]
        .iter()
        .all(|e| !matches!(e, Event::SetFrequency { .. } | Event::ForceTx(_))));
}

#[test]
fn sin_am_attenuation_range() {
    let levels: Vec<u8> = AM_LUT
        .iter()
        .map(|&s| sample_attenuation(s).raw())
        .collect();
    assert_eq!(levels.iter().min(), Some(&68));
    assert_eq!(levels.iter().max(), Some(&132));
    assert_eq!(levels[0], 100);
}

#[test]
fn sin_am_zero_signal_is_rejected() {
    let (mut tx, timeline) = transmitter();
    assert_eq!(
        tx.sin_am(CARRIER, 0, 10),
        Err(Error::InvalidParameter(Parameter::SignalHz))
    );
    assert!(timeline.is_empty());
}

#[test]
fn sin_am_zero_duration_only_sets_carrier() {
    let (mut tx, timeline) = transmitter();
    let plan = tx.sin_am(CARRIER, 1000, 0).unwrap();
    assert_eq!(plan.repeat, 0);
    assert_eq!(timeline.events(), vec![freq(0)]);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn generators_repeat_identically() {
    let (mut tx, timeline) = transmitter();

    tx.jam(CARRIER, 200);
    tx.squarewave_fm(CARRIER, 440, 50).unwrap();
    tx.sin_am(CARRIER, 600, 40).unwrap();
    let first = timeline.take();

    tx.jam(CARRIER, 200);
    tx.squarewave_fm(CARRIER, 440, 50).unwrap();
    tx.sin_am(CARRIER, 600, 40).unwrap();
    assert_eq!(first, timeline.take());
}
