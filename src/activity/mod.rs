// SPDX-License-Identifier: MPL-2.0
//! Session activity tracking.
//!
//! The slider itself is a pure value; whatever presentation layer sits on
//! top (transition effects, highlights) observes selection changes rather
//! than being called by the navigator. This module is that seam: the
//! front-end records user inputs and index transitions into a bounded log,
//! which can be exported as JSON for later inspection.

pub mod events;
pub mod export;
pub mod log;

pub use events::{ActivityEvent, ActivityKind, UserAction};
pub use log::ActivityLog;
