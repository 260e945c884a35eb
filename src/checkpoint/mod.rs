//! Checkpoint and resume functionality for machine runs.
//!
//! Long runs can be paused (usually after exhausting a step budget), saved
//! and later resumed against the same table. Tables are not part of a
//! checkpoint: they are regenerated from their composer and matched by state
//! name.

use crate::engine::{Machine, MachineState, Tape};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Name of the current state
    pub state: String,

    /// Tape contents, one character per cell
    pub tape: String,

    pub cursor: usize,

    /// Transitions executed so far
    pub steps: u64,
}

impl Checkpoint {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(text)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version == CHECKPOINT_VERSION {
            Ok(())
        } else {
            Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        }
    }
}

impl Machine<'_> {
    /// Snapshot the current run.
    pub fn checkpoint(&self) -> Checkpoint {
        let state = self.state();
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: self.table().state_name(state.current).to_string(),
            tape: state.tape.render(),
            cursor: state.cursor,
            steps: state.steps,
        }
    }

    /// Replace the current run with the one saved in `checkpoint`.
    pub fn restore(&mut self, checkpoint: &Checkpoint) -> Result<(), CheckpointError> {
        checkpoint.check_version()?;

        let current = self
            .table()
            .names()
            .get(&checkpoint.state)
            .ok_or_else(|| CheckpointError::UnknownState(checkpoint.state.clone()))?;
        let mut tape = Tape::parse(&checkpoint.tape, self.table().alphabet())?;
        tape.reach(checkpoint.cursor)?;

        debug!(
            id = %checkpoint.id,
            state = %checkpoint.state,
            steps = checkpoint.steps,
            "restoring checkpoint"
        );
        self.restore_state(MachineState {
            tape,
            cursor: checkpoint.cursor,
            current,
            steps: checkpoint.steps,
        });
        Ok(())
    }
}
