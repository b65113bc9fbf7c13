// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `tactile_slider` crate.
//!
//! These drive whole drags through the controller the way a host pointer
//! dispatcher would, covering the value-mapping contract, dual-knob
//! selection, snapping, and the listener life cycle.

use tactile_gesture::{Modality, PointerSample, TrackRect};
use tactile_slider::{KnobId, Slider, SliderChange, SliderDomain};

fn at(x: f64) -> PointerSample {
    PointerSample::new(x, 5.0, 0.0, 1)
}

fn track() -> TrackRect {
    TrackRect::new(0.0, 1000.0, 0.0)
}

#[test]
fn value_mapping_contract_holds_at_the_endpoints() {
    let domain = SliderDomain::new(-20.0, 80.0, 5.0);
    assert_eq!(domain.ratio_to_value(0.0), -20);
    assert_eq!(domain.ratio_to_value(1.0), 80);
    assert_eq!(domain.value_to_ratio(-20.0), 0.0);
    assert_eq!(domain.value_to_ratio(80.0), 1.0);
}

#[test]
fn unit_step_round_trip_stays_within_one_step() {
    let domain = SliderDomain::default();
    let mut r = 0.0;
    while r <= 1.0 {
        let back = domain.value_to_ratio(domain.ratio_to_value(r) as f64);
        assert!((back - r).abs() <= 0.01, "ratio {r} drifted to {back}");
        r += 0.013;
    }
}

#[test]
fn full_drag_produces_ordered_changes() {
    let mut slider = Slider::new(SliderDomain::default());

    let down = slider
        .on_pointer_down(&at(250.0), track(), Modality::Touch)
        .unwrap();
    assert_eq!(down.change, Some(SliderChange::Single(25)));
    assert_eq!(down.listen, Modality::Touch);

    let mut changes = Vec::new();
    for x in [300.0, 350.0, 350.0, 420.0] {
        if let Some(change) = slider.on_pointer_move(&at(x)).change {
            changes.push(change);
        }
    }
    // The repeated 350px sample produces no duplicate change.
    assert_eq!(
        changes,
        vec![
            SliderChange::Single(30),
            SliderChange::Single(35),
            SliderChange::Single(42),
        ]
    );

    let up = slider.on_pointer_up(&at(500.0));
    assert_eq!(up.change, Some(SliderChange::Single(50)));
    assert_eq!(slider.value(), SliderChange::Single(50));
}

#[test]
fn dual_knob_drag_selects_the_closer_knob_and_keeps_the_other() {
    let mut slider = Slider::new(SliderDomain::default());
    slider.set_dual_knobs(true);
    slider.write_value(SliderChange::Dual {
        lower: 10,
        upper: 90,
    });

    // Ratio 0.3 is closer to the lower knob (0.1) than the upper (0.9).
    slider
        .on_pointer_down(&at(300.0), track(), Modality::Pointer)
        .unwrap();
    assert_eq!(slider.active_knob(), Some(KnobId::A));
    assert_eq!(
        slider.value(),
        SliderChange::Dual {
            lower: 30,
            upper: 90,
        }
    );
    assert_eq!(slider.knob(KnobId::B).value(), 90);
}

#[test]
fn snapping_scenario_with_a_coarse_domain() {
    let mut slider = Slider::new(SliderDomain::new(1000.0, 2000.0, 100.0));
    slider.set_snaps(true);

    slider.write_value(SliderChange::Single(1500));
    assert_eq!(slider.value(), SliderChange::Single(1500));

    let ticks = slider.ticks();
    assert_eq!(ticks.len(), 11);
    let midpoint = ticks.iter().find(|t| t.ratio == 0.5).expect("midpoint tick");
    assert!(midpoint.active);
    for tick in ticks {
        assert_eq!(tick.active, tick.ratio <= 0.5, "tick at {}", tick.ratio);
    }
}

#[test]
fn external_injection_does_not_echo_a_change() {
    let mut slider = Slider::new(SliderDomain::default());
    slider.write_value(SliderChange::Single(70));

    // The next drag reports changes relative to the injected value; the
    // injection itself surfaced nothing (write_value has no outcome).
    let down = slider
        .on_pointer_down(&at(700.0), track(), Modality::Pointer)
        .unwrap();
    assert_eq!(down.change, None);
}

#[test]
fn listener_life_cycle_follows_the_drag() {
    let mut slider = Slider::new(SliderDomain::default());
    assert_eq!(slider.listening(), None);

    slider
        .on_pointer_down(&at(100.0), track(), Modality::Touch)
        .unwrap();
    assert_eq!(slider.listening(), Some(Modality::Touch));

    slider.on_pointer_up(&at(100.0));
    assert_eq!(slider.listening(), None);

    // Listeners that fire after teardown are told to clear themselves.
    let out = slider.on_pointer_move(&at(400.0));
    assert!(out.clear_listeners);
}

#[test]
fn invalid_configuration_is_silently_ignored() {
    let mut slider = Slider::new(SliderDomain::default());
    slider.set_step(f64::NAN);
    slider.set_step(-2.0);
    slider.set_min(f64::INFINITY);
    assert_eq!(slider.domain().step(), 1);
    assert_eq!(slider.domain().min(), 0);

    // The control still works after rejected assignments.
    let down = slider
        .on_pointer_down(&at(500.0), track(), Modality::Pointer)
        .unwrap();
    assert_eq!(down.change, Some(SliderChange::Single(50)));
}
