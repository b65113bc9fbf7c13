// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static per-instance refresher configuration.

/// Static configuration of a [`Refresher`](crate::Refresher).
///
/// Numeric setters validate their input and silently retain the prior value
/// when given a non-finite or non-positive number; no event is emitted for a
/// rejected assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefresherConfig {
    pull_min: f64,
    pull_delta: f64,
    snapback_duration_ms: u64,
    enabled: bool,
}

impl Default for RefresherConfig {
    fn default() -> Self {
        Self {
            pull_min: 60.0,
            pull_delta: 60.0,
            snapback_duration_ms: 280,
            enabled: false,
        }
    }
}

impl RefresherConfig {
    /// Pull distance at which releasing commits a refresh, in pixels.
    #[must_use]
    pub fn pull_min(&self) -> f64 {
        self.pull_min
    }

    /// Sets the commit threshold. Non-finite or non-positive values are
    /// rejected and the prior value retained.
    pub fn set_pull_min(&mut self, pull_min: f64) {
        if pull_min.is_finite() && pull_min > 0.0 {
            self.pull_min = pull_min;
        }
    }

    /// Extra pull distance past the threshold before the maximum pull is
    /// considered overshot, in pixels.
    #[must_use]
    pub fn pull_delta(&self) -> f64 {
        self.pull_delta
    }

    /// Sets the overshoot margin. Non-finite or non-positive values are
    /// rejected and the prior value retained.
    pub fn set_pull_delta(&mut self, pull_delta: f64) {
        if pull_delta.is_finite() && pull_delta > 0.0 {
            self.pull_delta = pull_delta;
        }
    }

    /// Duration of the snap-back transition, in milliseconds.
    #[must_use]
    pub fn snapback_duration_ms(&self) -> u64 {
        self.snapback_duration_ms
    }

    /// Sets the snap-back transition duration.
    pub fn set_snapback_duration_ms(&mut self, duration_ms: u64) {
        self.snapback_duration_ms = duration_ms;
    }

    /// Whether the control accepts pulls at all.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the control. See
    /// [`Refresher::set_enabled`](crate::Refresher::set_enabled) for the
    /// mid-session behavior.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
