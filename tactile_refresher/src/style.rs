// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style write instructions for the visual feedback layer.

/// One style write for the refresher's visual feedback layer.
///
/// Writes are idempotent last-write-wins instructions; the engine only ever
/// produces them and never reads the visual layer back. Hosts translate an
/// instruction into whatever their styling system understands (a transform
/// plus transition properties plus an overflow flag, typically).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefresherStyle {
    /// Vertical offset to apply to the host content, in pixels.
    pub offset_px: f64,
    /// Transition duration for reaching the offset, in milliseconds.
    /// Zero means the offset applies immediately.
    pub duration_ms: u64,
    /// Delay before the transition starts, in milliseconds.
    pub delay_ms: u64,
    /// Whether the host region should hide overflowing content while offset.
    pub overflow_hidden: bool,
}

impl RefresherStyle {
    /// The fully neutral style: zero offset, no transition, overflow
    /// visible. Applied at the end of every close sequence and when a pull
    /// reverses before committing.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            offset_px: 0.0,
            duration_ms: 0,
            delay_ms: 0,
            overflow_hidden: false,
        }
    }

    /// Continuous 1:1 tracking of the pointer while dragging: immediate
    /// offset, overflow hidden.
    #[must_use]
    pub fn tracking(offset_px: f64) -> Self {
        Self {
            offset_px,
            duration_ms: 0,
            delay_ms: 0,
            overflow_hidden: true,
        }
    }

    /// An animated settle to the given offset.
    #[must_use]
    pub fn settle(offset_px: f64, duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            offset_px,
            duration_ms,
            delay_ms,
            overflow_hidden: true,
        }
    }
}
