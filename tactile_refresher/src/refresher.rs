// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pull-to-refresh engine.

use smallvec::SmallVec;
use tactile_gesture::PointerSample;

use crate::{RefresherConfig, RefresherPhase, RefresherStyle};

/// Fallback deadline distance for the close sequence, in milliseconds.
///
/// If the visual layer never reports that its snap-back transition finished,
/// the timer arm of the close race forces the terminal reset this long after
/// the close began.
const CLOSE_FALLBACK_MS: u64 = 600;

/// Transition delay used by [`Refresher::complete`], in milliseconds.
///
/// A short pause before snapping back, so the host's completion state is
/// visible for a beat. [`Refresher::cancel`] snaps back with no delay.
const COMPLETE_DELAY_MS: u64 = 120;

/// Semantic event surfaced to the hosting application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefresherEvent {
    /// First move sample of a pull session.
    Start,
    /// A move sample advanced the pull; carries the current progress
    /// (`1.0` = commit threshold reached).
    Pull(f64),
    /// The refresh committed. The host must perform its work and eventually
    /// call [`Refresher::complete`] or [`Refresher::cancel`].
    Refresh,
}

/// Why a move sample was ignored.
///
/// Rejections are diagnostics for tests and telemetry; they are not surfaced
/// to the hosting application as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// More than one simultaneous touch point.
    MultiTouch,
    /// The engine is in a busy phase.
    Busy,
    /// The host region is scrolled away from its top boundary.
    Scrolled,
}

/// Outcome of a move sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoveOutcome {
    /// Semantic events to surface, in order.
    pub events: SmallVec<[RefresherEvent; 2]>,
    /// Style write to apply to the visual feedback layer, if any.
    pub style: Option<RefresherStyle>,
    /// Whether the host must suppress its default scroll behavior for this
    /// sample.
    pub suppress_scroll: bool,
    /// Set when the sample was ignored outright.
    pub rejected: Option<RejectReason>,
}

impl MoveOutcome {
    fn rejected(reason: RejectReason) -> Self {
        Self {
            rejected: Some(reason),
            ..Self::default()
        }
    }
}

/// Outcome of a drag-end sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndOutcome {
    /// Semantic events to surface, in order.
    pub events: SmallVec<[RefresherEvent; 1]>,
    /// Style write to apply, if any.
    pub style: Option<RefresherStyle>,
    /// Fallback deadline armed by a cancel close, for host scheduling.
    pub deadline: Option<u64>,
}

/// Outcome of [`Refresher::complete`] / [`Refresher::cancel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseOutcome {
    /// Style write starting the snap-back transition.
    pub style: RefresherStyle,
    /// Fallback deadline; the host should call [`Refresher::on_timer`] at or
    /// after this timestamp if no transition-finished signal arrived.
    pub deadline: u64,
}

/// An armed close sequence. `Some` exactly while a closing phase waits for
/// the transition-finished signal or the fallback deadline; taken by
/// whichever arrives first, so the terminal reset runs exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CloseRecord {
    deadline: u64,
}

/// Pull-to-refresh gesture state machine.
///
/// See the [crate documentation](crate) for the phase diagram and a usage
/// example. One `Refresher` holds the state of at most one pull session at a
/// time; it is reset to [`RefresherPhase::Inactive`] by every successful
/// close.
#[derive(Debug, Clone, PartialEq)]
pub struct Refresher {
    config: RefresherConfig,
    phase: RefresherPhase,
    progress: f64,
    style_applied: bool,
    has_emitted_start: bool,
    closing: Option<CloseRecord>,
}

impl Refresher {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: RefresherConfig) -> Self {
        Self {
            config,
            phase: RefresherPhase::Inactive,
            progress: 0.0,
            style_applied: false,
            has_emitted_start: false,
            closing: None,
        }
    }

    /// Current session phase.
    #[must_use]
    pub fn phase(&self) -> RefresherPhase {
        self.phase
    }

    /// Current pull progress. `0.0` = no pull, `>= 1.0` = releasing now
    /// would commit a refresh. Always recomputed from the latest drag delta,
    /// never accumulated.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &RefresherConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut RefresherConfig {
        &mut self.config
    }

    /// Start gate: may a drag begin?
    ///
    /// `false` when the control is disabled, more than one touch point is
    /// present, a session is already underway, or the host region is
    /// scrolled away from its top boundary. This is a pure query; it does
    /// not mutate state.
    #[must_use]
    pub fn can_start(&self, touch_count: u32, scroll_offset: f64) -> bool {
        self.config.enabled()
            && touch_count <= 1
            && self.phase == RefresherPhase::Inactive
            && scroll_offset <= 0.0
    }

    /// Handles the start of a drag.
    ///
    /// Defensive reset: a drag may begin while state from an abandoned
    /// session lingers.
    pub fn on_drag_start(&mut self) {
        self.progress = 0.0;
        self.phase = RefresherPhase::Inactive;
    }

    /// Handles one move sample.
    ///
    /// Called at high frequency; cheap and idempotent under repeated no-op
    /// samples. `scroll_offset` is the host region's current scroll
    /// position, re-queried per sample because content may have scrolled
    /// under the pointer since the drag began.
    pub fn on_drag_move(&mut self, sample: &PointerSample, scroll_offset: f64) -> MoveOutcome {
        if sample.is_multi_touch() {
            return MoveOutcome::rejected(RejectReason::MultiTouch);
        }
        if self.phase.is_busy() {
            return MoveOutcome::rejected(RejectReason::Busy);
        }

        let delta_y = sample.delta_y;

        // Pointer moving up (or not down at all) is normal scrolling, not a
        // pull. This is the one path that must actively undo a previously
        // applied offset.
        if delta_y <= 0.0 {
            self.progress = 0.0;
            self.phase = RefresherPhase::Inactive;
            let style = self.style_applied.then(|| {
                self.style_applied = false;
                RefresherStyle::neutral()
            });
            return MoveOutcome {
                style,
                ..MoveOutcome::default()
            };
        }

        if self.phase == RefresherPhase::Inactive {
            // The region may have scrolled since the drag began; the pull is
            // only valid when still at the top boundary.
            if scroll_offset > 0.0 {
                self.progress = 0.0;
                return MoveOutcome::rejected(RejectReason::Scrolled);
            }
            self.phase = RefresherPhase::Pulling;
        }

        let mut outcome = MoveOutcome {
            suppress_scroll: true,
            style: Some(RefresherStyle::tracking(delta_y)),
            ..MoveOutcome::default()
        };
        self.style_applied = true;

        if delta_y == 0.0 {
            self.progress = 0.0;
            return outcome;
        }

        let pull_min = self.config.pull_min();
        self.progress = delta_y / pull_min;

        if !self.has_emitted_start {
            self.has_emitted_start = true;
            outcome.events.push(RefresherEvent::Start);
        }
        outcome.events.push(RefresherEvent::Pull(self.progress));

        if delta_y < pull_min {
            // Short of the threshold, whether still approaching it or having
            // retreated from Ready; either way a release from here cancels.
            self.phase = RefresherPhase::Pulling;
            return outcome;
        }

        if delta_y > pull_min + self.config.pull_delta() {
            // Overshot the maximum pull distance: refresh immediately,
            // bypassing Ready.
            let (event, style) = self.begin_refreshing();
            outcome.events.push(event);
            outcome.style = Some(style);
            return outcome;
        }

        self.phase = RefresherPhase::Ready;
        outcome
    }

    /// Handles the end of a drag.
    ///
    /// Releasing in `Ready` commits the refresh; releasing in `Pulling`
    /// cancels (the pull never reached the threshold). Busy phases are only
    /// exited by explicit completion, so anything else is a no-op.
    pub fn on_drag_end(&mut self, now: u64) -> EndOutcome {
        match self.phase {
            RefresherPhase::Ready => {
                let (event, style) = self.begin_refreshing();
                let mut events = SmallVec::new();
                events.push(event);
                EndOutcome {
                    events,
                    style: Some(style),
                    deadline: None,
                }
            }
            RefresherPhase::Pulling => {
                let close = self.close(RefresherPhase::Cancelling, 0, now);
                EndOutcome {
                    events: SmallVec::new(),
                    style: Some(close.style),
                    deadline: Some(close.deadline),
                }
            }
            _ => EndOutcome::default(),
        }
    }

    /// Finishes a refresh, snapping the control back after a short delay.
    ///
    /// Valid any time: calling it outside `Refreshing` is permitted and
    /// idempotently resets, though in intended usage it answers a
    /// [`RefresherEvent::Refresh`].
    pub fn complete(&mut self, now: u64) -> CloseOutcome {
        self.close(RefresherPhase::Completing, COMPLETE_DELAY_MS, now)
    }

    /// Abandons a refresh, snapping the control back with no delay.
    pub fn cancel(&mut self, now: u64) -> CloseOutcome {
        self.close(RefresherPhase::Cancelling, 0, now)
    }

    /// The armed fallback deadline, if a close sequence is in flight.
    ///
    /// Hosts use this to schedule the [`Self::on_timer`] wake-up.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.closing.map(|c| c.deadline)
    }

    /// Signal from the visual layer that the snap-back transition finished.
    ///
    /// First arm of the close race to arrive wins: returns the fully neutral
    /// style to apply and disarms the fallback timer. Returns `None` when no
    /// close sequence is in flight (including when the race already
    /// settled).
    pub fn on_transition_end(&mut self) -> Option<RefresherStyle> {
        self.closing.take().map(|_| self.finish_close())
    }

    /// Timer arm of the close race.
    ///
    /// Fires only once `now` has reached the armed deadline and the
    /// transition-finished signal has not already settled the race.
    pub fn on_timer(&mut self, now: u64) -> Option<RefresherStyle> {
        match self.closing {
            Some(record) if now >= record.deadline => {
                self.closing = None;
                Some(self.finish_close())
            }
            _ => None,
        }
    }

    /// Enables or disables the control.
    ///
    /// Disabling mid-session abandons the session: state resets to
    /// `Inactive`, any close sequence is disarmed, and if an offset was
    /// applied the neutral style to revert it is returned.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<RefresherStyle> {
        self.config.set_enabled(enabled);
        if enabled {
            return None;
        }
        self.closing = None;
        let had_style = self.style_applied;
        let _ = self.finish_close();
        had_style.then(RefresherStyle::neutral)
    }

    /// Commits the refresh: settle at the threshold offset and ask the host
    /// to do its work.
    fn begin_refreshing(&mut self) -> (RefresherEvent, RefresherStyle) {
        self.phase = RefresherPhase::Refreshing;
        self.style_applied = true;
        let style = RefresherStyle::settle(
            self.config.pull_min(),
            self.config.snapback_duration_ms(),
            0,
        );
        (RefresherEvent::Refresh, style)
    }

    /// Shared close sequence: enter the target busy phase, start the
    /// snap-back transition, and arm the fallback deadline.
    fn close(&mut self, target: RefresherPhase, delay_ms: u64, now: u64) -> CloseOutcome {
        let deadline = now + CLOSE_FALLBACK_MS;
        self.closing = Some(CloseRecord { deadline });
        self.phase = target;
        self.style_applied = true;
        CloseOutcome {
            style: RefresherStyle::settle(0.0, self.config.snapback_duration_ms(), delay_ms),
            deadline,
        }
    }

    /// Terminal reset shared by both arms of the close race.
    fn finish_close(&mut self) -> RefresherStyle {
        self.phase = RefresherPhase::Inactive;
        self.progress = 0.0;
        self.has_emitted_start = false;
        self.style_applied = false;
        RefresherStyle::neutral()
    }
}
