//! Engine error types.

use thiserror::Error;

/// Errors reported by machine lifecycle operations.
///
/// Event delivery itself never fails loudly — `send` reports through
/// [`SendOutcome`](crate::engine::SendOutcome), where an inactive machine
/// or an unhandled event is a normal outcome rather than an error.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("Machine is already active in state '{current}'. Terminate it before re-initializing")]
    AlreadyActive { current: String },

    #[error("State {index} is not part of this machine's table ({states} states)")]
    UnknownState { index: usize, states: usize },
}
