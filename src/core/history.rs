//! Transition logging.
//!
//! Every completed external or self transition is recorded with its
//! triggering event and a UTC timestamp. The log is the crate's
//! observability surface: it serializes, travels inside checkpoints, and
//! reconstructs the path a machine took. Internal and unhandled events
//! leave no trace here because the state never changed.

use crate::core::event::EventId;
use crate::core::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a recorded transition related source and target.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Source and target differ.
    External,
    /// Source and target are the same state; the full exit/entry cycle ran.
    SelfTransition,
}

/// Record of a single completed transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state that was current when the event arrived.
    pub from: StateId,
    /// The state that became current.
    pub to: StateId,
    /// The event that triggered the transition.
    pub event: EventId,
    /// External or self transition.
    pub kind: TransitionKind,
    /// When the transition completed.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of completed transitions.
///
/// The log is immutable — [`record`](MachineHistory::record) returns a new
/// log with the transition appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use flatstate::core::{
///     EventId, MachineHistory, StateId, TransitionKind, TransitionRecord,
/// };
///
/// let history = MachineHistory::new();
/// let history = history.record(TransitionRecord {
///     from: StateId::new(0),
///     to: StateId::new(2),
///     event: EventId::new(0),
///     kind: TransitionKind::External,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.transitions().len(), 1);
/// assert_eq!(history.get_path(), vec![StateId::new(0), StateId::new(2)]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MachineHistory {
    transitions: Vec<TransitionRecord>,
}

impl MachineHistory {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, returning a new log.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// The path of states traversed: the first record's source, then every
    /// record's target in order. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// `None` when the log is empty; zero for a single record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }
}
