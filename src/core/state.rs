//! The state-table contract: descriptors, identifiers, and the outcome
//! type transition functions return.
//!
//! A [`StateTable`] is an ordered, fixed sequence of [`StateDescriptor`]s,
//! built once and shared (read-only) by every machine that references it.
//! States are identified by a [`StateId`] naming their position in the
//! table, carried alongside a human-readable name tag.

use crate::core::event::EventId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a state within its [`StateTable`].
///
/// A state's identity is its position in the table it was built into:
/// the first state added is `StateId::new(0)`, the second `StateId::new(1)`,
/// and so on. `const` construction lets callers declare their table layout
/// up front and reference target states from transition functions:
///
/// ```rust
/// use flatstate::core::StateId;
///
/// const IDLE: StateId = StateId::new(0);
/// const BUSY: StateId = StateId::new(1);
///
/// assert_eq!(BUSY.index(), 1);
/// assert_ne!(IDLE, BUSY);
/// ```
///
/// A `StateId` is only meaningful for the table it was declared against;
/// the engine ignores targets that fall outside its own table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    /// Create a state identifier for the state at `index`.
    pub const fn new(index: usize) -> Self {
        StateId(index)
    }

    /// The position this identifier names.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry and exit actions bound to a state.
///
/// Invoked with the machine context, the event that caused the state
/// change (a reserved lifecycle identifier during `initialize` and
/// `terminate`), and the event payload if any.
pub type Action<C, P = ()> = Box<dyn Fn(&mut C, EventId, Option<&P>) + Send + Sync>;

/// Transition function bound to a state.
///
/// Invoked for every event delivered while the state is current; decides
/// what the event means by returning a [`TransitionOutcome`].
pub type Handler<C, P = ()> =
    Box<dyn Fn(&mut C, EventId, Option<&P>) -> TransitionOutcome<C, P> + Send + Sync>;

/// One-shot action tied to a specific transition instance.
///
/// Runs exactly once, between the source state's exit action and the
/// target state's entry action, then is consumed.
pub type TransitionEffect<C, P = ()> = Box<dyn FnOnce(&mut C, EventId, Option<&P>) + Send + Sync>;

/// What a transition function decided about an event.
///
/// `Unhandled` and `Internal` behave identically from the engine's point of
/// view: the current state is retained and no entry, exit, or effect
/// callback runs. Both exist so tables can state intent — an internal
/// transition performs its side effects inside the transition function
/// itself before returning. Any returned target, including the current
/// state, runs the full exit/effect/entry protocol.
pub enum TransitionOutcome<C, P = ()> {
    /// The event means nothing in the current state.
    Unhandled,

    /// The event was consumed without leaving the current state.
    Internal,

    /// Move to `target`, optionally running `effect` between the source's
    /// exit action and the target's entry action.
    Transition {
        target: StateId,
        effect: Option<TransitionEffect<C, P>>,
    },
}

impl<C, P> TransitionOutcome<C, P> {
    /// A transition to `target` with no effect.
    pub fn transition(target: StateId) -> Self {
        TransitionOutcome::Transition {
            target,
            effect: None,
        }
    }

    /// A transition to `target` with a one-shot effect.
    ///
    /// ```rust
    /// use flatstate::core::{StateId, TransitionOutcome};
    ///
    /// const DONE: StateId = StateId::new(1);
    ///
    /// let outcome: TransitionOutcome<Vec<String>> =
    ///     TransitionOutcome::transition_with(DONE, |log: &mut Vec<String>, _event, _payload| {
    ///         log.push("effect".to_string());
    ///     });
    /// assert_eq!(outcome.target(), Some(DONE));
    /// ```
    pub fn transition_with<F>(target: StateId, effect: F) -> Self
    where
        F: FnOnce(&mut C, EventId, Option<&P>) + Send + Sync + 'static,
    {
        TransitionOutcome::Transition {
            target,
            effect: Some(Box::new(effect)),
        }
    }

    /// The target state, if this outcome is a transition.
    pub fn target(&self) -> Option<StateId> {
        match self {
            TransitionOutcome::Transition { target, .. } => Some(*target),
            _ => None,
        }
    }
}

impl<C, P> fmt::Debug for TransitionOutcome<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionOutcome::Unhandled => f.write_str("Unhandled"),
            TransitionOutcome::Internal => f.write_str("Internal"),
            TransitionOutcome::Transition { target, effect } => f
                .debug_struct("Transition")
                .field("target", target)
                .field("effect", &effect.is_some())
                .finish(),
        }
    }
}

/// Immutable descriptor of a single state.
///
/// Holds a name tag plus up to three callbacks, all optional: an entry
/// action, a transition function, and an exit action. Absence of a callback
/// is a no-op. Descriptors hold no mutable data; everything a state machine
/// mutates lives in the machine's context.
pub struct StateDescriptor<C, P = ()> {
    pub(crate) name: String,
    pub(crate) entry: Option<Action<C, P>>,
    pub(crate) handler: Option<Handler<C, P>>,
    pub(crate) exit: Option<Action<C, P>>,
}

impl<C, P> StateDescriptor<C, P> {
    /// The state's name tag, for display and error reporting.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn entry(&self) -> Option<&Action<C, P>> {
        self.entry.as_ref()
    }

    pub(crate) fn handler(&self) -> Option<&Handler<C, P>> {
        self.handler.as_ref()
    }

    pub(crate) fn exit(&self) -> Option<&Action<C, P>> {
        self.exit.as_ref()
    }
}

impl<C, P> fmt::Debug for StateDescriptor<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDescriptor")
            .field("name", &self.name)
            .field("entry", &self.entry.is_some())
            .field("handler", &self.handler.is_some())
            .field("exit", &self.exit.is_some())
            .finish()
    }
}

/// An ordered, fixed collection of state descriptors.
///
/// Built once via [`StateTableBuilder`](crate::builder::StateTableBuilder),
/// immutable afterwards. Tables are typically wrapped in an `Arc` and shared
/// by any number of machine instances.
pub struct StateTable<C, P = ()> {
    pub(crate) states: Vec<StateDescriptor<C, P>>,
}

impl<C, P> StateTable<C, P> {
    /// Number of states in the table.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the table holds no states. Never true for a built table.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Look up a state's identifier by its name tag.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name == name)
            .map(StateId::new)
    }

    /// The descriptor for `id`, if it belongs to this table.
    pub fn descriptor(&self, id: StateId) -> Option<&StateDescriptor<C, P>> {
        self.states.get(id.index())
    }

    /// The name tag of the state identified by `id`.
    pub fn name(&self, id: StateId) -> Option<&str> {
        self.descriptor(id).map(StateDescriptor::name)
    }
}

impl<C, P> fmt::Debug for StateTable<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.states.iter().map(|s| &s.name))
            .finish()
    }
}
