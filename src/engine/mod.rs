//! Event dispatch.
//!
//! A [`Machine`] binds a shared [`StateTable`](crate::core::StateTable) to
//! one current state and one caller context, and drives the transition
//! protocol: on every real state change the source's exit action, the
//! transition effect, the current-state update, and the target's entry
//! action run in that order, synchronously, on the caller's thread.

mod error;
mod machine;

pub use error::MachineError;
pub use machine::{Machine, SendOutcome};
