// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refresher session phases.

/// Phase of a pull-to-refresh session.
///
/// `Inactive` is both the initial and the terminal phase. The three closing
/// phases (`Refreshing`, `Cancelling`, `Completing`) form the *busy* group:
/// while in any of them, gesture-driven transitions are ignored and only the
/// close sequence can move the machine forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefresherPhase {
    /// No pull in progress.
    #[default]
    Inactive,
    /// Pointer is pulling down, below the commit threshold.
    Pulling,
    /// Threshold reached; releasing now commits a refresh.
    Ready,
    /// Refresh committed; waiting for the host to finish its work.
    Refreshing,
    /// Snapping back after a pull that did not reach the threshold.
    Cancelling,
    /// Snapping back after a completed refresh.
    Completing,
}

impl RefresherPhase {
    /// Returns `true` for the busy phases, during which gesture input is
    /// ignored pending an external or timed completion signal.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Refreshing | Self::Cancelling | Self::Completing)
    }
}
