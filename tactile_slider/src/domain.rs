// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider's range configuration and ratio↔value mapping.

/// Shared range configuration of a slider: integer bounds, a positive
/// integer step, and the snapping/dual-knob mode flags.
///
/// Numeric setters take `f64` (hosts often hand through loosely typed
/// attribute values), round to integers, and silently retain the prior value
/// for non-finite input or a non-positive step. The `min < max` invariant is
/// the host's responsibility; a degenerate domain maps every ratio to `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderDomain {
    min: i64,
    max: i64,
    step: i64,
    snaps: bool,
    dual_knobs: bool,
}

impl Default for SliderDomain {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            step: 1,
            snaps: false,
            dual_knobs: false,
        }
    }
}

impl SliderDomain {
    /// Creates a domain with the given bounds and step, rejecting invalid
    /// components the same way the setters do.
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let mut domain = Self::default();
        domain.set_min(min);
        domain.set_max(max);
        domain.set_step(step);
        domain
    }

    /// Lower bound of the value range.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Sets the lower bound. Non-finite values are rejected.
    pub fn set_min(&mut self, min: f64) {
        if min.is_finite() {
            self.min = round_i64(min);
        }
    }

    /// Upper bound of the value range.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Sets the upper bound. Non-finite values are rejected.
    pub fn set_max(&mut self, max: f64) {
        if max.is_finite() {
            self.max = round_i64(max);
        }
    }

    /// Quantization step between selectable values.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Sets the step, rounding to the nearest integer. Non-finite input and
    /// anything that rounds below `1` is rejected.
    pub fn set_step(&mut self, step: f64) {
        if !step.is_finite() {
            return;
        }
        let rounded = round_i64(step);
        if rounded >= 1 {
            self.step = rounded;
        }
    }

    /// Whether knobs snap to step-aligned ticks.
    #[must_use]
    pub fn snaps(&self) -> bool {
        self.snaps
    }

    /// Enables or disables snapping.
    pub fn set_snaps(&mut self, snaps: bool) {
        self.snaps = snaps;
    }

    /// Whether the slider has two knobs selecting a range.
    #[must_use]
    pub fn dual_knobs(&self) -> bool {
        self.dual_knobs
    }

    /// Enables or disables dual-knob mode.
    pub fn set_dual_knobs(&mut self, dual_knobs: bool) {
        self.dual_knobs = dual_knobs;
    }

    /// Maps a position fraction to a domain value.
    ///
    /// Two-stage rounding: first to the nearest integer domain value, then
    /// to the nearest multiple of `step`. Downstream tick and bar math
    /// assumes exactly this behavior, and [`Self::value_to_ratio`] is *not*
    /// its inverse for `step > 1`.
    #[must_use]
    pub fn ratio_to_value(&self, ratio: f64) -> i64 {
        let value = round_i64((self.max - self.min) as f64 * ratio + self.min as f64);
        let step = self.step as f64;
        round_i64(value as f64 / step) * self.step
    }

    /// Maps a domain value to a position fraction.
    ///
    /// The value is clamped to `[min, max]`, snapped to the nearest step
    /// multiple, then normalized over the range.
    #[must_use]
    pub fn value_to_ratio(&self, value: f64) -> f64 {
        // Not `f64::clamp`: bounds may be transiently inverted while a host
        // assigns min and max one at a time, and clamp panics on that.
        let clamped = value.max(self.min as f64).min(self.max as f64);
        let step = self.step as f64;
        let snapped = round_i64(clamped / step) as f64 * step;
        (snapped - self.min as f64) / (self.max - self.min) as f64
    }
}

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// `f64::round` lives behind `std`/`libm` and rounds halves away from zero
/// besides; this crate stays on core float ops, and the mapping contract
/// wants exactly `-0.5 -> 0`, so rounding goes through truncation plus a
/// fraction test that is strict on the negative side.
fn round_i64(value: f64) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Domain values are small integers by contract; the cast truncates toward zero on purpose"
    )]
    let truncated = value as i64;
    let fraction = value - truncated as f64;
    if fraction >= 0.5 {
        truncated + 1
    } else if fraction < -0.5 {
        truncated - 1
    } else {
        truncated
    }
}
