//! Versioned records of generated combos.
//!
//! A `ComboRecord` is a self-describing snapshot of one generation run that
//! can be handed to other programs as JSON or compact binary. Nothing here
//! touches the filesystem.

use crate::combo::Combo;
use crate::trick::TrickView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ExportError;

/// Version identifier for the record format
pub const RECORD_VERSION: u32 = 1;

/// Serializable snapshot of one generated combo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboRecord {
    /// Record format version
    pub version: u32,

    /// Unique record identifier
    pub id: Uuid,

    /// When the combo was generated
    pub generated_at: DateTime<Utc>,

    /// Length asked for, if the caller named one
    pub requested: Option<usize>,

    /// Length the walk aimed for, asked for or drawn
    pub target: usize,

    /// Stage limit the combo was drawn under
    pub max_stage: u32,

    /// The tricks, in order
    pub tricks: Vec<TrickView>,
}

impl ComboRecord {
    /// Capture a combo with a fresh id and the current time.
    pub fn new(combo: &Combo, requested: Option<usize>, max_stage: u32) -> Self {
        Self {
            version: RECORD_VERSION,
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            requested,
            target: combo.target(),
            max_stage,
            tricks: combo.views(),
        }
    }

    /// Check whether the walk ended before reaching its target.
    pub fn is_short(&self) -> bool {
        self.tricks.len() < self.target
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let record: Self = serde_json::from_str(json)
            .map_err(|e| ExportError::DeserializationFailed(e.to_string()))?;
        record.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        bincode::serialize(self).map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let record: Self = bincode::deserialize(bytes)
            .map_err(|e| ExportError::DeserializationFailed(e.to_string()))?;
        record.check_version()
    }

    fn check_version(self) -> Result<Self, ExportError> {
        if self.version != RECORD_VERSION {
            return Err(ExportError::UnsupportedVersion {
                found: self.version,
                supported: RECORD_VERSION,
            });
        }
        Ok(self)
    }
}
