// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Refresher: a pull-to-refresh gesture state machine.
//!
//! This crate turns a stream of normalized pointer samples into the semantic
//! life cycle of a pull-to-refresh control: a pull starts, progresses toward
//! a threshold, and either commits a refresh or cancels. The engine is a
//! plain state machine; it does not render, schedule, or listen to platform
//! events. Every entry point returns an *outcome* value carrying the
//! semantic events to surface, the style instruction to hand to a visual
//! feedback layer, and control signals, and the host applies them in order.
//!
//! ## Phases
//!
//! A session moves through [`RefresherPhase`]: `Inactive` → `Pulling` →
//! `Ready` → `Refreshing` → `Completing` → `Inactive`, with `Cancelling`
//! replacing the refresh leg when the pull is released early. `Refreshing`,
//! `Cancelling`, and `Completing` are *busy* phases: gesture input is
//! ignored until the close sequence finishes.
//!
//! ## Time and the close race
//!
//! The engine never reads a clock. Temporal entry points take an explicit
//! caller-supplied millisecond timestamp, which makes the close sequence (an
//! explicit transition-finished signal racing a fallback deadline) fully
//! deterministic: [`Refresher::complete`] and [`Refresher::cancel`] arm a
//! deadline, and whichever of [`Refresher::on_transition_end`] or
//! [`Refresher::on_timer`] arrives first performs the terminal reset and
//! disarms the other. The control therefore never sticks in a busy phase,
//! even when the visual layer fails to report that its transition finished.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_gesture::PointerSample;
//! use tactile_refresher::{Refresher, RefresherConfig, RefresherEvent, RefresherPhase};
//!
//! let mut config = RefresherConfig::default();
//! config.set_enabled(true);
//! let mut refresher = Refresher::new(config);
//!
//! // Scrolled to the top with a single touch: a pull may begin.
//! assert!(refresher.can_start(1, 0.0));
//! refresher.on_drag_start();
//!
//! // Drag 60px down: threshold reached, release would refresh.
//! let out = refresher.on_drag_move(&PointerSample::new(0.0, 60.0, 60.0, 1), 0.0);
//! assert!(out.events.contains(&RefresherEvent::Start));
//! assert_eq!(refresher.phase(), RefresherPhase::Ready);
//!
//! // Release: the refresh commits and the host is asked to do its work.
//! let end = refresher.on_drag_end(1_000);
//! assert!(end.events.contains(&RefresherEvent::Refresh));
//!
//! // Host work done; close, then the visual layer reports the transition.
//! refresher.complete(2_000);
//! let style = refresher.on_transition_end().unwrap();
//! assert_eq!(style.offset_px, 0.0);
//! assert_eq!(refresher.phase(), RefresherPhase::Inactive);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod phase;
mod refresher;
mod style;

pub use config::RefresherConfig;
pub use phase::RefresherPhase;
pub use refresher::{
    CloseOutcome, EndOutcome, MoveOutcome, Refresher, RefresherEvent, RejectReason,
};
pub use style::RefresherStyle;
