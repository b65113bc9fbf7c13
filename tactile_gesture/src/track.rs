// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding geometry of a horizontal control track.

use kurbo::Rect;

/// Bounding geometry of a horizontal control track.
///
/// Captured once at drag start (from a host layout query) and held for the
/// duration of the drag, so that every move sample maps to the same
/// coordinate frame even if the host relayouts mid-drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    /// Left edge of the track, in host coordinates.
    pub left: f64,
    /// Right edge of the track, in host coordinates.
    pub right: f64,
    /// Top edge of the track, in host coordinates.
    pub top: f64,
}

impl TrackRect {
    /// Creates a track rect from its left/right/top edges.
    #[must_use]
    pub fn new(left: f64, right: f64, top: f64) -> Self {
        Self { left, right, top }
    }

    /// Creates a track rect from a host bounding rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            left: rect.x0,
            right: rect.x1,
            top: rect.y0,
        }
    }

    /// Width of the track.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Converts an absolute X coordinate into a position fraction along the
    /// track.
    ///
    /// The result is deliberately unclamped; callers clamp it into `[0, 1]`
    /// themselves (knobs clamp on assignment). A zero-width track yields a
    /// non-finite ratio, which [`crate::clamp_unit`] maps to `0.0`.
    #[must_use]
    pub fn ratio_of(&self, x: f64) -> f64 {
        (x - self.left) / self.width()
    }
}

impl From<Rect> for TrackRect {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
