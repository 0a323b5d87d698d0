//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint is a serializable snapshot of one machine instance —
//! current state, context, transition log, and metadata — letting
//! long-lived machines survive process restarts. The state table is not
//! part of the snapshot (callbacks are not serializable); restoring
//! re-binds the snapshot to a table the caller provides.

use crate::core::{MachineHistory, StateId, StateTable};
use crate::engine::Machine;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Lifetime counters and timestamps maintained by a machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When the machine was created
    pub created_at: DateTime<Utc>,

    /// Last lifecycle or dispatch activity
    pub updated_at: DateTime<Utc>,

    /// Events delivered while the machine was active
    pub events_received: u64,

    /// External and self transitions completed
    pub transitions_taken: u64,
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            events_received: 0,
            transitions_taken: 0,
        }
    }
}

/// Serializable snapshot of a machine instance.
/// Does NOT include the state table (callbacks are not serializable).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<C> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current state at capture time, `None` for an inactive machine
    pub current_state: Option<StateId>,

    /// The machine's context data
    pub context: C,

    /// Complete transition log
    pub history: MachineHistory,

    /// Machine metadata
    pub metadata: MachineMetadata,
}

impl<C> Checkpoint<C>
where
    C: Serialize + DeserializeOwned,
{
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Serialize to a compact binary representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Deserialize from the binary representation, rejecting unsupported
    /// versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

impl<C: Clone, P> Machine<C, P> {
    /// Snapshot this machine's state, context, log, and metadata.
    pub fn checkpoint(&self) -> Checkpoint<C> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            current_state: self.current_state(),
            context: self.context().clone(),
            history: self.history().clone(),
            metadata: self.metadata().clone(),
        }
    }
}

impl<C, P> Machine<C, P> {
    /// Rebuild a machine from a checkpoint and the table it ran against.
    ///
    /// The checkpointed state was already entered when captured, so no
    /// entry action runs here. Fails when the checkpoint version is
    /// unsupported or its state id does not fit `table`.
    pub fn restore(
        table: Arc<StateTable<C, P>>,
        checkpoint: Checkpoint<C>,
    ) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if let Some(state) = checkpoint.current_state {
            if table.descriptor(state).is_none() {
                return Err(CheckpointError::StateOutOfRange {
                    state: state.index(),
                    states: table.len(),
                });
            }
        }

        Ok(Machine::from_parts(
            table,
            checkpoint.current_state,
            checkpoint.context,
            checkpoint.history,
            checkpoint.metadata,
        ))
    }
}
