// SPDX-License-Identifier: MPL-2.0
//! Event types for session activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated inputs that drive the slider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Advance to the next drink.
    StepNext,

    /// Go back to the previous drink.
    StepPrevious,

    /// Select a tab directly by its position.
    SelectTab {
        /// Zero-based tab position.
        index: usize,
    },

    /// Jump to an absolute index, as requested (before wrapping).
    JumpTo {
        /// Requested index; may be negative or beyond the menu.
        index: i64,
    },

    /// Export the activity log to disk.
    ExportLog,

    /// Leave the application.
    Quit,
}

/// A session event with a monotonic timestamp.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    /// When the event occurred (monotonic clock for duration calculations).
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: ActivityKind,
}

impl ActivityEvent {
    /// Creates a new event with the current timestamp.
    #[must_use]
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: ActivityKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a session event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    /// User-initiated input.
    UserAction {
        /// The specific input performed.
        action: UserAction,
        /// Optional additional context (e.g. the drink id selected).
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// The selection moved from one index to another.
    /// This is what a presentation layer would react to.
    Transition {
        /// Index before the input was applied.
        from: usize,
        /// Index after wrapping.
        to: usize,
    },

    /// Non-critical issue worth keeping alongside the session trace.
    Warning {
        /// Brief description of the warning.
        message: String,
    },

    /// Failure that interrupted an operation.
    Error {
        /// Brief description of the error.
        message: String,
    },
}
