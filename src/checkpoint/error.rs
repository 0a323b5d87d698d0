//! Checkpoint error types.

use thiserror::Error;

/// Errors reported while encoding, decoding, or restoring a snapshot.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The snapshot could not be encoded to JSON or binary
    #[error("Failed to encode checkpoint: {0}")]
    Encode(String),

    /// The snapshot could not be decoded from JSON or binary
    #[error("Failed to decode checkpoint: {0}")]
    Decode(String),

    /// The snapshot was written in a format this build does not read
    #[error("Checkpoint format v{found} is not supported (this build reads v{supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot's current state does not fit the table it is being
    /// restored against
    #[error("Checkpointed state {state} is not part of the table ({states} states)")]
    StateOutOfRange { state: usize, states: usize },
}
