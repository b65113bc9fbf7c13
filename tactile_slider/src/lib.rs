// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Slider: a dual-knob slider pointer-tracking and value-mapping
//! engine.
//!
//! This crate turns a stream of normalized pointer samples into slider value
//! changes. It owns the numeric heart of a slider control (ratio/value
//! conversion with step quantization, knob selection under dual-knob
//! ambiguity, snap-tick computation, and bar-extent bookkeeping) and leaves
//! rendering, layout, and event plumbing to the host. Entry points return
//! *outcome* values (change events, listener requests, control signals); the
//! derived visual state (knob placements, bar extent, tick table) is read
//! back through accessors after each sample.
//!
//! ## Pieces
//!
//! - [`SliderDomain`]: integer `min`/`max`/`step` plus the snapping and
//!   dual-knob mode flags, with the two-stage ratio/value mapping.
//! - [`Knob`]: one draggable handle, keeping its `[0, 1]` position fraction
//!   and derived value in sync.
//! - [`Slider`]: the controller, consuming pointer-down/move/up samples and
//!   keeping knobs, bar, and ticks consistent under continuous updates.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_gesture::{Modality, PointerSample, TrackRect};
//! use tactile_slider::{Slider, SliderChange, SliderDomain};
//!
//! let mut slider = Slider::new(SliderDomain::default());
//! let track = TrackRect::new(0.0, 200.0, 0.0);
//!
//! // Press the middle of a 200px track: the knob jumps there immediately.
//! let down = slider
//!     .on_pointer_down(&PointerSample::new(100.0, 10.0, 0.0, 1), track, Modality::Pointer)
//!     .unwrap();
//! assert_eq!(down.change, Some(SliderChange::Single(50)));
//!
//! // Release further right: one final update, then listeners are dropped.
//! let up = slider.on_pointer_up(&PointerSample::new(150.0, 10.0, 0.0, 1));
//! assert_eq!(up.change, Some(SliderChange::Single(75)));
//! assert_eq!(slider.listening(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod domain;
mod knob;
mod slider;

pub use domain::SliderDomain;
pub use knob::{Knob, KnobPlacement};
pub use slider::{
    BarExtent, DownOutcome, KnobId, MoveOutcome, Slider, SliderChange, Tick, UpOutcome,
};
