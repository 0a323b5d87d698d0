//! The dispatch engine.

use crate::checkpoint::MachineMetadata;
use crate::core::{
    EventId, MachineHistory, StateId, StateTable, TransitionKind, TransitionOutcome,
    TransitionRecord,
};
use crate::engine::error::MachineError;
use chrono::Utc;
use std::sync::Arc;

/// Result of delivering one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The machine has no current state; the event was dropped.
    NotActive,

    /// The current state was retained. Covers both an unhandled event and
    /// an internal transition — the two are indistinguishable from outside.
    Unchanged(StateId),

    /// A transition ran; `from` and `to` are equal for a self transition.
    Transitioned { from: StateId, to: StateId },
}

impl SendOutcome {
    /// The current state after delivery, `None` if the machine is inactive.
    pub fn state(self) -> Option<StateId> {
        match self {
            SendOutcome::NotActive => None,
            SendOutcome::Unchanged(state) => Some(state),
            SendOutcome::Transitioned { to, .. } => Some(to),
        }
    }

    /// Whether a transition (external or self) ran.
    pub fn is_transition(self) -> bool {
        matches!(self, SendOutcome::Transitioned { .. })
    }
}

/// A state machine instance: a shared state table, the current state, and
/// caller-owned context data.
///
/// A machine is either *uninitialized* (no current state, rejects events)
/// or *active* (exactly one current state, always a valid id for its
/// table). [`initialize`](Machine::initialize) activates it,
/// [`send`](Machine::send) dispatches events, and
/// [`terminate`](Machine::terminate) deactivates it again.
///
/// All callbacks receive `&mut C` — the context — and never the machine,
/// so a callback cannot re-enter `send` on the instance that invoked it;
/// the `&mut self` receiver is the re-entrancy guard. Dispatch is
/// synchronous and runs to completion on the caller's thread.
pub struct Machine<C, P = ()> {
    table: Arc<StateTable<C, P>>,
    current: Option<StateId>,
    context: C,
    history: MachineHistory,
    metadata: MachineMetadata,
}

impl<C, P> Machine<C, P> {
    /// Create an uninitialized machine over `table`, owning `context`.
    pub fn new(table: Arc<StateTable<C, P>>, context: C) -> Self {
        Self {
            table,
            current: None,
            context,
            history: MachineHistory::new(),
            metadata: MachineMetadata::default(),
        }
    }

    pub(crate) fn from_parts(
        table: Arc<StateTable<C, P>>,
        current: Option<StateId>,
        context: C,
        history: MachineHistory,
        metadata: MachineMetadata,
    ) -> Self {
        Self {
            table,
            current,
            context,
            history,
            metadata,
        }
    }

    /// Activate the machine in `initial`.
    ///
    /// Runs the initial state's entry action with [`EventId::INIT`] and no
    /// payload, then records the state as current. Fails without side
    /// effects if the machine is already active or `initial` does not
    /// belong to the table.
    pub fn initialize(&mut self, initial: StateId) -> Result<StateId, MachineError> {
        if let Some(current) = self.current {
            let name = self.table.name(current).unwrap_or("?").to_string();
            return Err(MachineError::AlreadyActive { current: name });
        }

        let Some(descriptor) = self.table.descriptor(initial) else {
            return Err(MachineError::UnknownState {
                index: initial.index(),
                states: self.table.len(),
            });
        };

        if let Some(entry) = descriptor.entry() {
            entry(&mut self.context, EventId::INIT, None);
        }

        self.current = Some(initial);
        self.metadata.updated_at = Utc::now();

        Ok(initial)
    }

    /// Deliver one event to the current state.
    ///
    /// The current state's transition function (if any) decides the
    /// outcome. When it returns a target — the current state included, a
    /// self transition — the engine runs, in this order and nothing else:
    ///
    /// 1. the source state's exit action,
    /// 2. the transition effect carried in the outcome,
    /// 3. the current-state update,
    /// 4. the target state's entry action.
    ///
    /// Otherwise the current state is retained and no action runs. An
    /// inactive machine drops the event and reports
    /// [`SendOutcome::NotActive`]. A target id that does not belong to
    /// this machine's table is dropped before any action runs.
    pub fn send(&mut self, event: EventId, payload: Option<&P>) -> SendOutcome {
        let Some(source) = self.current else {
            return SendOutcome::NotActive;
        };

        self.metadata.events_received += 1;
        self.metadata.updated_at = Utc::now();

        let outcome = match self.table.descriptor(source).and_then(|d| d.handler()) {
            Some(handler) => handler(&mut self.context, event, payload),
            None => TransitionOutcome::Unhandled,
        };

        let TransitionOutcome::Transition { target, effect } = outcome else {
            return SendOutcome::Unchanged(source);
        };

        if self.table.descriptor(target).is_none() {
            return SendOutcome::Unchanged(source);
        }

        if let Some(exit) = self.table.descriptor(source).and_then(|d| d.exit()) {
            exit(&mut self.context, event, payload);
        }

        if let Some(effect) = effect {
            effect(&mut self.context, event, payload);
        }

        self.current = Some(target);

        if let Some(entry) = self.table.descriptor(target).and_then(|d| d.entry()) {
            entry(&mut self.context, event, payload);
        }

        let kind = if target == source {
            TransitionKind::SelfTransition
        } else {
            TransitionKind::External
        };
        self.history = self.history.record(TransitionRecord {
            from: source,
            to: target,
            event,
            kind,
            timestamp: Utc::now(),
        });
        self.metadata.transitions_taken += 1;

        SendOutcome::Transitioned {
            from: source,
            to: target,
        }
    }

    /// Deactivate the machine.
    ///
    /// Runs the current state's exit action with [`EventId::EXIT`] and no
    /// payload, then clears the current state. No-op when already
    /// inactive.
    pub fn terminate(&mut self) {
        let Some(current) = self.current else {
            return;
        };

        if let Some(exit) = self.table.descriptor(current).and_then(|d| d.exit()) {
            exit(&mut self.context, EventId::EXIT, None);
        }

        self.current = None;
        self.metadata.updated_at = Utc::now();
    }

    /// The current state, `None` when uninitialized or terminated.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Name tag of the current state, if active.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current.and_then(|id| self.table.name(id))
    }

    /// Whether the machine has a current state.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// The caller context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable access to the caller context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// The log of completed transitions.
    pub fn history(&self) -> &MachineHistory {
        &self.history
    }

    /// Lifetime counters and timestamps for this instance.
    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    /// The table this machine dispatches over.
    pub fn table(&self) -> &StateTable<C, P> {
        &self.table
    }
}
