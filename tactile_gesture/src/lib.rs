// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Gesture: shared pointer-sample and track-geometry primitives.
//!
//! This crate holds the small vocabulary shared by the Tactile control
//! engines (`tactile_refresher`, `tactile_slider`):
//!
//! - [`PointerSample`]: one normalized pointer/touch sample as delivered by a
//!   host gesture session.
//! - [`Modality`]: which listener family (touch vs. pointer-button) a host
//!   must attach for the remainder of a drag.
//! - [`TrackRect`]: the bounding geometry of a horizontal control track, with
//!   position→ratio conversion.
//! - [`clamp_unit`] / [`percent`]: unit-interval numeric helpers.
//!
//! The crate does not normalize raw platform events itself; hosts are
//! expected to deliver samples already reduced to coordinates, a vertical
//! delta, and a touch count. Engines consume these samples serially and
//! never retain references into them.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_gesture::{PointerSample, TrackRect, clamp_unit};
//!
//! let track = TrackRect::new(100.0, 300.0, 40.0);
//! let sample = PointerSample::new(250.0, 48.0, 0.0, 1);
//!
//! // Pointer sits three quarters of the way along the track.
//! let ratio = clamp_unit(track.ratio_of(sample.x));
//! assert_eq!(ratio, 0.75);
//! assert!(!sample.is_multi_touch());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod sample;
mod track;
mod unit;

pub use sample::{Modality, PointerSample};
pub use track::TrackRect;
pub use unit::{clamp_unit, percent};
