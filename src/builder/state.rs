//! Builder for a single state descriptor.

use crate::core::{Action, EventId, Handler, StateDescriptor, TransitionOutcome};

/// Builder for one state's descriptor: a name plus up to three callbacks.
///
/// Every callback slot is optional; a state built from a bare
/// `StateBuilder::named(..)` ignores all events and has no entry or exit
/// behavior.
pub struct StateBuilder<C, P = ()> {
    name: String,
    entry: Option<Action<C, P>>,
    handler: Option<Handler<C, P>>,
    exit: Option<Action<C, P>>,
}

impl<C, P> StateBuilder<C, P> {
    /// Start a descriptor for a state named `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry: None,
            handler: None,
            exit: None,
        }
    }

    /// Set the entry action, run whenever the state becomes current.
    pub fn on_entry<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C, EventId, Option<&P>) + Send + Sync + 'static,
    {
        self.entry = Some(Box::new(action));
        self
    }

    /// Set the transition function, run for every event delivered while
    /// the state is current.
    pub fn on_event<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut C, EventId, Option<&P>) -> TransitionOutcome<C, P> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Set the exit action, run whenever the state stops being current.
    pub fn on_exit<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C, EventId, Option<&P>) + Send + Sync + 'static,
    {
        self.exit = Some(Box::new(action));
        self
    }

    pub(crate) fn build(self) -> StateDescriptor<C, P> {
        StateDescriptor {
            name: self.name,
            entry: self.entry,
            handler: self.handler,
            exit: self.exit,
        }
    }
}
