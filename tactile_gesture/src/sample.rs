// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized pointer samples and input modality.

use kurbo::Point;

/// One normalized pointer/touch sample from a host gesture session.
///
/// Hosts deliver one sample per start/move/end callback, already reduced
/// from the platform event: absolute coordinates, the vertical delta since
/// the drag started, and the number of simultaneous touch points (always `1`
/// for mouse/pen input).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Absolute X coordinate of the pointer.
    pub x: f64,
    /// Absolute Y coordinate of the pointer.
    pub y: f64,
    /// Vertical distance travelled since the drag started. Positive values
    /// mean the pointer moved downward.
    pub delta_y: f64,
    /// Number of simultaneous touch points in this sample.
    pub touch_count: u32,
}

impl PointerSample {
    /// Creates a sample from raw components.
    #[must_use]
    pub fn new(x: f64, y: f64, delta_y: f64, touch_count: u32) -> Self {
        Self {
            x,
            y,
            delta_y,
            touch_count,
        }
    }

    /// The sample position as a point.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns `true` if more than one touch point is present.
    ///
    /// Engines treat multi-touch samples as no-ops; only single-pointer
    /// drags drive state transitions.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.touch_count > 1
    }
}

/// Which listener family a host must attach for the rest of a drag.
///
/// A drag that starts from a touch must be followed through touch move/end
/// listeners, and a pointer-button drag through pointer listeners. Engines
/// report the modality of the starting sample so hosts attach the matching
/// pair, replacing any previously attached listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// Touch-derived samples (`touchmove` / `touchend` family).
    Touch,
    /// Pointer-button-derived samples (`pointermove` / `pointerup` family).
    Pointer,
}
