// SPDX-License-Identifier: MPL-2.0
//! Bounded, in-memory storage for session events.
//!
//! The log is a ring buffer: when capacity is reached, pushing a new event
//! evicts the oldest one, so a long browsing session stays memory-bounded.
//! Events are kept in chronological order (oldest first).

use std::collections::VecDeque;
use std::time::Instant;

use crate::activity::events::{ActivityEvent, ActivityKind, UserAction};
use crate::config::{DEFAULT_ACTIVITY_CAPACITY, MAX_ACTIVITY_CAPACITY, MIN_ACTIVITY_CAPACITY};

/// Fixed-capacity event log for one browsing session.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    events: VecDeque<ActivityEvent>,
    capacity: usize,
    started: Instant,
}

impl ActivityLog {
    /// Creates a log with the given capacity, clamped to the valid range.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_ACTIVITY_CAPACITY, MAX_ACTIVITY_CAPACITY);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            started: Instant::now(),
        }
    }

    /// Records a user input.
    pub fn record_action(&mut self, action: UserAction) {
        self.push(ActivityKind::UserAction {
            action,
            details: None,
        });
    }

    /// Records a user input with additional context.
    pub fn record_action_with_details(&mut self, action: UserAction, details: impl Into<String>) {
        self.push(ActivityKind::UserAction {
            action,
            details: Some(details.into()),
        });
    }

    /// Records a selection change.
    ///
    /// Inputs that land on the current index are not transitions; they are
    /// dropped here so a replay only contains actual movement.
    pub fn record_transition(&mut self, from: usize, to: usize) {
        if from != to {
            self.push(ActivityKind::Transition { from, to });
        }
    }

    /// Records a non-critical issue.
    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.push(ActivityKind::Warning {
            message: message.into(),
        });
    }

    /// Records a failure.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.push(ActivityKind::Error {
            message: message.into(),
        });
    }

    fn push(&mut self, kind: ActivityKind) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(ActivityEvent::new(kind));
    }

    /// Returns the events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.events.iter()
    }

    /// Returns the number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the maximum number of events kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// When this session's log was created.
    #[must_use]
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Clears all stored events. Capacity and session start are unchanged.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_clamped_to_the_valid_range() {
        assert_eq!(ActivityLog::new(0).capacity(), MIN_ACTIVITY_CAPACITY);
        assert_eq!(ActivityLog::new(100_000).capacity(), MAX_ACTIVITY_CAPACITY);
        assert_eq!(ActivityLog::new(100).capacity(), 100);
    }

    #[test]
    fn default_log_uses_the_default_capacity() {
        assert_eq!(ActivityLog::default().capacity(), DEFAULT_ACTIVITY_CAPACITY);
    }

    #[test]
    fn events_are_stored_in_chronological_order() {
        let mut log = ActivityLog::new(MIN_ACTIVITY_CAPACITY);
        log.record_action(UserAction::StepNext);
        log.record_transition(0, 1);
        log.record_action(UserAction::StepPrevious);

        let kinds: Vec<_> = log.events().map(|e| e.kind.clone()).collect();
        assert_eq!(kinds.len(), 3);
        assert_eq!(
            kinds[1],
            ActivityKind::Transition { from: 0, to: 1 }
        );
    }

    #[test]
    fn overflow_evicts_the_oldest_events() {
        let mut log = ActivityLog::new(MIN_ACTIVITY_CAPACITY);
        for i in 0..(MIN_ACTIVITY_CAPACITY + 4) {
            log.record_action(UserAction::SelectTab { index: i });
        }

        assert_eq!(log.len(), MIN_ACTIVITY_CAPACITY);
        match &log.events().next().expect("log is not empty").kind {
            ActivityKind::UserAction {
                action: UserAction::SelectTab { index },
                ..
            } => assert_eq!(*index, 4),
            other => panic!("expected a select_tab action, got {other:?}"),
        };
    }

    #[test]
    fn transitions_to_the_same_index_are_dropped() {
        let mut log = ActivityLog::default();
        log.record_transition(2, 2);
        assert!(log.is_empty());

        log.record_transition(2, 3);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn details_are_attached_to_actions() {
        let mut log = ActivityLog::default();
        log.record_action_with_details(UserAction::StepNext, "raspberry-mojito");

        match &log.events().next().expect("log is not empty").kind {
            ActivityKind::UserAction { details, .. } => {
                assert_eq!(details.as_deref(), Some("raspberry-mojito"));
            }
            other => panic!("expected a user action, got {other:?}"),
        };
    }

    #[test]
    fn clear_keeps_capacity_and_session_start() {
        let mut log = ActivityLog::new(100);
        let started = log.started();
        log.record_error("terminal resize failed");
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.capacity(), 100);
        assert_eq!(log.started(), started);
    }
}
