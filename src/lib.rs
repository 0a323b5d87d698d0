//! Flatstate: a table-driven flat finite state machine engine
//!
//! A state machine is described by a [`StateTable`]: an ordered, fixed
//! collection of state descriptors, each with an optional entry action, an
//! optional transition function, and an optional exit action. A
//! [`Machine`] binds a shared table to one current state and one
//! caller-owned context value, and dispatches events synchronously: the
//! current state's transition function decides the outcome, and on a real
//! state change the engine runs exit action, transition effect, state
//! update, and entry action, strictly in that order.
//!
//! # Core Concepts
//!
//! - **Events**: opaque [`EventId`] values with reserved `INIT`/`EXIT`
//!   lifecycle sentinels and optional borrowed payloads
//! - **States**: positionally identified descriptors built once via the
//!   [`builder`] API and shared read-only by any number of machines
//! - **Transitions**: external, self (full exit/entry cycle), or internal
//!   (state retained, no actions), chosen by the transition function via
//!   [`TransitionOutcome`]
//! - **Transition effects**: one-shot actions carried inside the outcome,
//!   run between exit and entry
//!
//! # Example
//!
//! ```rust
//! use flatstate::builder::{StateBuilder, StateTableBuilder};
//! use flatstate::core::{EventId, StateId, TransitionOutcome};
//! use flatstate::engine::Machine;
//! use std::sync::Arc;
//!
//! const CLOSED: StateId = StateId::new(0);
//! const OPEN: StateId = StateId::new(1);
//!
//! const EV_OPEN: EventId = EventId::new(0);
//! const EV_CLOSE: EventId = EventId::new(1);
//!
//! let table = StateTableBuilder::<Vec<String>>::new()
//!     .state(
//!         StateBuilder::named("closed").on_event(|_log, event, _payload| match event {
//!             EV_OPEN => TransitionOutcome::transition(OPEN),
//!             _ => TransitionOutcome::Unhandled,
//!         }),
//!     )
//!     .state(
//!         StateBuilder::named("open")
//!             .on_entry(|log: &mut Vec<String>, _event, _payload| {
//!                 log.push("opened".to_string())
//!             })
//!             .on_event(|_log, event, _payload| match event {
//!                 EV_CLOSE => TransitionOutcome::transition(CLOSED),
//!                 _ => TransitionOutcome::Unhandled,
//!             }),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(Arc::new(table), Vec::new());
//! machine.initialize(CLOSED).unwrap();
//!
//! machine.send(EV_OPEN, None);
//! assert_eq!(machine.current_state(), Some(OPEN));
//! assert_eq!(machine.context(), &vec!["opened".to_string()]);
//!
//! machine.terminate();
//! assert!(!machine.is_active());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    EventId, Guard, MachineHistory, StateId, StateTable, TransitionKind, TransitionOutcome,
    TransitionRecord,
};
pub use builder::{BuildError, StateBuilder, StateTableBuilder};
pub use checkpoint::{Checkpoint, CheckpointError, MachineMetadata};
pub use engine::{Machine, MachineError, SendOutcome};
