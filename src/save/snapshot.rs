use crate::game::types::{FactionStanding, QuestEntry};
use crate::inventory::InventoryItem;
use crate::stats::PlayerStats;
use serde::{Deserialize, Serialize};

/// Current snapshot format version
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

/// Everything needed to resume a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    /// RFC 3339 local timestamp, for humans reading the file
    pub saved_at: String,
    pub player_position: (f32, f32),
    pub stats: PlayerStats,
    pub inventory: Vec<InventoryItem>,
    pub quest_progress: Vec<QuestEntry>,
    pub faction_standings: Vec<FactionStanding>,
}

/// Error types for snapshot operations
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
    /// Snapshot was written by a newer build
    InvalidVersion(u32),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Serialization(e) => write!(f, "Serialization error: {}", e),
            SaveError::InvalidVersion(v) => write!(f, "Unsupported snapshot version: {}", v),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::Io(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::Serialization(err)
    }
}
