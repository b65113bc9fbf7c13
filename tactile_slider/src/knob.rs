// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One draggable slider handle.

use tactile_gesture::{clamp_unit, percent};

use crate::SliderDomain;

/// Position instruction for one knob, in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobPlacement {
    /// Distance of the knob center from the track's left edge.
    pub left_pct: f64,
    /// Vertical placement; constant for a horizontal track (knobs ride the
    /// track centerline), carried for feedback layers that position both
    /// axes.
    pub top_pct: f64,
}

/// One draggable handle of a slider.
///
/// A knob keeps its position fraction and its derived domain value in sync:
/// `ratio` is clamped to `[0, 1]` before being stored, and `value` is always
/// derived from `ratio` through the domain (never set independently, except
/// that external value injection immediately recomputes the ratio from the
/// injected value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knob {
    ratio: f64,
    value: i64,
    pressed: bool,
    is_upper: bool,
}

impl Knob {
    /// Creates a knob at the given initial ratio.
    ///
    /// The lower knob starts at `0.0` and the upper knob at `1.0` absent an
    /// explicitly injected value.
    #[must_use]
    pub(crate) fn new(domain: &SliderDomain, is_upper: bool) -> Self {
        let mut knob = Self {
            ratio: 0.0,
            value: 0,
            pressed: false,
            is_upper,
        };
        knob.set_ratio(domain, if is_upper { 1.0 } else { 0.0 });
        knob
    }

    /// Current position fraction along the track, in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Current domain value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Whether this knob is actively being dragged.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Identifies the second knob of a dual-knob slider.
    #[must_use]
    pub fn is_upper(&self) -> bool {
        self.is_upper
    }

    /// Position instruction for the feedback layer.
    #[must_use]
    pub fn placement(&self) -> KnobPlacement {
        KnobPlacement {
            left_pct: percent(self.ratio),
            top_pct: 0.0,
        }
    }

    /// Moves the knob to a position fraction.
    ///
    /// The ratio is clamped into `[0, 1]` and the value derived through the
    /// domain. When the domain snaps, the ratio is then re-derived from that
    /// value so the displayed position lands exactly on a tick.
    pub(crate) fn set_ratio(&mut self, domain: &SliderDomain, ratio: f64) {
        self.ratio = clamp_unit(ratio);
        self.value = domain.ratio_to_value(self.ratio);
        if domain.snaps() {
            self.ratio = clamp_unit(domain.value_to_ratio(self.value as f64));
        }
    }

    /// Injects a value directly, recomputing the ratio from it and then
    /// normalizing the value back through the ratio mapping.
    pub(crate) fn set_value(&mut self, domain: &SliderDomain, value: i64) {
        self.ratio = clamp_unit(domain.value_to_ratio(value as f64));
        self.value = domain.ratio_to_value(self.ratio);
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}
