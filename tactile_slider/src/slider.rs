// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider pointer-tracking controller.

use alloc::vec::Vec;

use kurbo::Point;
use tactile_gesture::{Modality, PointerSample, TrackRect, clamp_unit, percent};

use crate::{Knob, SliderDomain};

/// Identifies one of the two physical knobs.
///
/// `A` is the only knob of a single-knob slider and the initially-lower knob
/// of a dual-knob slider. Knobs may cross during a drag; the exposed
/// lower/upper values are derived from numeric comparison, not from physical
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobId {
    /// The first knob.
    A,
    /// The second knob (dual-knob mode only).
    B,
}

/// Exposed slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderChange {
    /// Single-knob value.
    Single(i64),
    /// Dual-knob range; `lower <= upper` always holds.
    Dual {
        /// Numerically smaller of the two knob values.
        lower: i64,
        /// Numerically larger of the two knob values.
        upper: i64,
    },
}

/// Extent of the active-range bar highlight, in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarExtent {
    /// Inset of the bar's left edge from the track's left edge.
    pub left_pct: f64,
    /// Inset of the bar's right edge from the track's right edge.
    pub right_pct: f64,
}

/// One snap point on the track, for a step-aligned domain value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Position fraction of the tick along the track.
    pub ratio: f64,
    /// `ratio` in percent, for direct feedback-layer consumption.
    pub position_pct: f64,
    /// Whether the tick lies within the selected range.
    pub active: bool,
}

/// Outcome of an accepted pointer-down sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DownOutcome {
    /// The host must suppress its default scroll behavior for this drag.
    pub suppress_scroll: bool,
    /// Listener family to attach for the rest of the drag, replacing any
    /// previously attached listeners.
    pub listen: Modality,
    /// Change produced by the immediate first-sample update, if the value
    /// moved.
    pub change: Option<SliderChange>,
}

/// Outcome of a pointer-move sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Change to surface, when the active knob's value moved.
    pub change: Option<SliderChange>,
    /// Set when the move arrived with no drag in progress (listeners fired
    /// after teardown); the host must detach its move/up listeners.
    pub clear_listeners: bool,
}

/// Outcome of a pointer-up sample. Listeners are always released on up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpOutcome {
    /// Change produced by the final update from the release coordinate.
    pub change: Option<SliderChange>,
}

/// Per-drag tracking state, held from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragRecord {
    start: Point,
    active: KnobId,
    rect: TrackRect,
    /// Correction applied when the pointer went down outside the track's
    /// left/right bounds, so the drag begins without a jump.
    x_offset: f64,
}

/// Dual-knob slider controller.
///
/// Owns the range domain, one or two knob models, the per-drag tracking
/// record, and the derived bar/tick state, and keeps them consistent under
/// continuous pointer updates. See the [crate documentation](crate) for an
/// example.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    domain: SliderDomain,
    knob_a: Knob,
    knob_b: Knob,
    pin: bool,
    disabled: bool,
    drag: Option<DragRecord>,
    listening: Option<Modality>,
    ticks: Vec<Tick>,
    bar: BarExtent,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(SliderDomain::default())
    }
}

impl Slider {
    /// Creates a slider over the given domain, with the lower knob at the
    /// range start and the upper knob at the range end.
    #[must_use]
    pub fn new(domain: SliderDomain) -> Self {
        let mut slider = Self {
            domain,
            knob_a: Knob::new(&domain, false),
            knob_b: Knob::new(&domain, true),
            pin: false,
            disabled: false,
            drag: None,
            listening: None,
            ticks: Vec::new(),
            bar: BarExtent {
                left_pct: 0.0,
                right_pct: 0.0,
            },
        };
        slider.rebuild_ticks();
        slider.refresh_derived();
        slider
    }

    /// The slider's range domain.
    #[must_use]
    pub fn domain(&self) -> &SliderDomain {
        &self.domain
    }

    /// Sets the lower bound; see [`SliderDomain::set_min`].
    pub fn set_min(&mut self, min: f64) {
        self.domain.set_min(min);
        self.domain_changed();
    }

    /// Sets the upper bound; see [`SliderDomain::set_max`].
    pub fn set_max(&mut self, max: f64) {
        self.domain.set_max(max);
        self.domain_changed();
    }

    /// Sets the step; see [`SliderDomain::set_step`].
    pub fn set_step(&mut self, step: f64) {
        self.domain.set_step(step);
        self.domain_changed();
    }

    /// Enables or disables snapping to step-aligned ticks.
    pub fn set_snaps(&mut self, snaps: bool) {
        self.domain.set_snaps(snaps);
        self.domain_changed();
    }

    /// Switches between single-knob and dual-knob mode.
    pub fn set_dual_knobs(&mut self, dual_knobs: bool) {
        self.domain.set_dual_knobs(dual_knobs);
        self.domain_changed();
    }

    /// Whether the feedback layer should show a value pin over the pressed
    /// knob. Surfaced to the host only; no engine-side behavior.
    #[must_use]
    pub fn pin(&self) -> bool {
        self.pin
    }

    /// Sets the pin flag.
    pub fn set_pin(&mut self, pin: bool) {
        self.pin = pin;
    }

    /// Whether pointer input is ignored.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables pointer input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The knob with the given identity.
    #[must_use]
    pub fn knob(&self, id: KnobId) -> &Knob {
        match id {
            KnobId::A => &self.knob_a,
            KnobId::B => &self.knob_b,
        }
    }

    /// Identity of the knob being dragged, if a drag is in progress.
    #[must_use]
    pub fn active_knob(&self) -> Option<KnobId> {
        self.drag.map(|d| d.active)
    }

    /// Coordinate where the current drag started, if one is in progress.
    #[must_use]
    pub fn drag_start(&self) -> Option<Point> {
        self.drag.map(|d| d.start)
    }

    /// Listener family currently requested from the host, if any.
    #[must_use]
    pub fn listening(&self) -> Option<Modality> {
        self.listening
    }

    /// The current exposed value.
    ///
    /// Dual-knob mode derives lower/upper from numeric comparison of the two
    /// knob values; the physical knobs may have crossed.
    #[must_use]
    pub fn value(&self) -> SliderChange {
        if self.domain.dual_knobs() {
            let a = self.knob_a.value();
            let b = self.knob_b.value();
            SliderChange::Dual {
                lower: a.min(b),
                upper: a.max(b),
            }
        } else {
            SliderChange::Single(self.knob_a.value())
        }
    }

    /// Current extent of the active-range bar highlight.
    #[must_use]
    pub fn bar(&self) -> BarExtent {
        self.bar
    }

    /// Snap ticks for the current domain. Empty unless snapping is enabled.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Handles a pointer-down sample on the track.
    ///
    /// Returns `None` when the slider is disabled. Otherwise selects the
    /// active knob (closest by ratio in dual-knob mode, with the first knob
    /// winning exact ties), records the drag geometry, applies the first
    /// sample immediately, and asks the host to attach move/up listeners for
    /// the sample's modality, replacing any previously attached pair.
    pub fn on_pointer_down(
        &mut self,
        sample: &PointerSample,
        rect: TrackRect,
        modality: Modality,
    ) -> Option<DownOutcome> {
        if self.disabled {
            return None;
        }

        // The pointer may land slightly left or right of the track; record
        // the overshoot so the drag starts without a jump.
        let x_offset = if sample.x < rect.left {
            sample.x - rect.left
        } else if sample.x > rect.right {
            sample.x - rect.right
        } else {
            0.0
        };

        let pointer_ratio = clamp_unit(rect.ratio_of(sample.x));
        let active = if self.domain.dual_knobs() {
            // The first knob is compared first with a non-strict inequality,
            // so it wins exact ties.
            let a_dist = (self.knob_a.ratio() - pointer_ratio).abs();
            let b_dist = (self.knob_b.ratio() - pointer_ratio).abs();
            if a_dist <= b_dist { KnobId::A } else { KnobId::B }
        } else {
            KnobId::A
        };

        self.knob_a.set_pressed(false);
        self.knob_b.set_pressed(false);
        match active {
            KnobId::A => self.knob_a.set_pressed(true),
            KnobId::B => self.knob_b.set_pressed(true),
        }

        self.drag = Some(DragRecord {
            start: sample.point(),
            active,
            rect,
            x_offset,
        });
        self.listening = Some(modality);

        let change = self.update_from_x(sample.x);
        Some(DownOutcome {
            suppress_scroll: true,
            listen: modality,
            change,
        })
    }

    /// Handles a pointer-move sample.
    ///
    /// A move with no drag in progress means the host's listeners outlived
    /// their teardown; the outcome asks for them to be force-cleared.
    pub fn on_pointer_move(&mut self, sample: &PointerSample) -> MoveOutcome {
        if self.drag.is_none() {
            self.listening = None;
            return MoveOutcome {
                change: None,
                clear_listeners: true,
            };
        }
        MoveOutcome {
            change: self.update_from_x(sample.x),
            clear_listeners: false,
        }
    }

    /// Handles a pointer-up sample: one final update from the release
    /// coordinate, then the drag record, pressed flags, and listeners are
    /// all cleared.
    pub fn on_pointer_up(&mut self, sample: &PointerSample) -> UpOutcome {
        let change = if self.drag.is_some() {
            self.update_from_x(sample.x)
        } else {
            None
        };
        self.drag = None;
        self.listening = None;
        self.knob_a.set_pressed(false);
        self.knob_b.set_pressed(false);
        UpOutcome { change }
    }

    /// Injects a value from outside a drag.
    ///
    /// Knobs are repositioned and the bar/ticks recomputed, but no change is
    /// surfaced: external injection is not user-driven and must not echo
    /// back. A `Dual` value assigns `lower` to the first knob and `upper`
    /// to the second.
    pub fn write_value(&mut self, value: SliderChange) {
        match value {
            SliderChange::Single(v) => self.knob_a.set_value(&self.domain, v),
            SliderChange::Dual { lower, upper } => {
                self.knob_a.set_value(&self.domain, lower);
                self.knob_b.set_value(&self.domain, upper);
            }
        }
        self.refresh_derived();
    }

    /// Moves the active knob to the given absolute X coordinate, returning
    /// the change to surface when its value moved.
    fn update_from_x(&mut self, x: f64) -> Option<SliderChange> {
        let drag = self.drag?;
        let domain = self.domain;
        let ratio = drag.rect.ratio_of(x - drag.x_offset);
        let knob = match drag.active {
            KnobId::A => &mut self.knob_a,
            KnobId::B => &mut self.knob_b,
        };
        let previous = knob.value();
        knob.set_ratio(&domain, ratio);
        let change = (knob.value() != previous).then(|| self.value());
        self.refresh_derived();
        change
    }

    /// Re-normalizes knobs and rebuilds the tick table after any domain
    /// mutation.
    fn domain_changed(&mut self) {
        let domain = self.domain;
        self.knob_a.set_value(&domain, self.knob_a.value());
        self.knob_b.set_value(&domain, self.knob_b.value());
        self.rebuild_ticks();
        self.refresh_derived();
    }

    /// Rebuilds the tick table for the current domain.
    fn rebuild_ticks(&mut self) {
        self.ticks.clear();
        if !self.domain.snaps() {
            return;
        }
        let mut value = self.domain.min();
        while value <= self.domain.max() {
            let ratio = clamp_unit(self.domain.value_to_ratio(value as f64));
            self.ticks.push(Tick {
                ratio,
                position_pct: percent(ratio),
                active: false,
            });
            value += self.domain.step();
        }
    }

    /// Recomputes the bar extent and tick active flags from the current
    /// knob ratios. Idempotent; called after every knob movement.
    fn refresh_derived(&mut self) {
        self.bar = if self.domain.dual_knobs() {
            let lower = self.knob_a.ratio().min(self.knob_b.ratio());
            let upper = self.knob_a.ratio().max(self.knob_b.ratio());
            BarExtent {
                left_pct: percent(lower),
                right_pct: 100.0 - percent(upper),
            }
        } else {
            BarExtent {
                left_pct: 0.0,
                right_pct: 100.0 - percent(self.knob_a.ratio()),
            }
        };

        if self.domain.snaps() {
            if self.domain.dual_knobs() {
                let lower = self.knob_a.ratio().min(self.knob_b.ratio());
                let upper = self.knob_a.ratio().max(self.knob_b.ratio());
                for tick in &mut self.ticks {
                    tick.active = lower <= tick.ratio && tick.ratio <= upper;
                }
            } else {
                let current = self.knob_a.ratio();
                for tick in &mut self.ticks {
                    tick.active = tick.ratio <= current;
                }
            }
        }
    }
}
