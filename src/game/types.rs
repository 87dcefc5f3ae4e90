// Shared session types: simulation events and the quest/faction records
// the UI panels and save snapshots read.

use crate::crystal::Element;
use serde::{Deserialize, Serialize};

/// Facts the simulation reports each frame
///
/// The main loop turns these into side effects (synth notes, notifications);
/// simulation code itself never touches SDL.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    CrystalCollected { element: Element, power: u32 },
    InventoryFull,
    LevelUp { level: u32 },
    PlayerFell,
}

/// One quest log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestEntry {
    pub title: String,
    pub detail: String,
    /// Completion as 0.0..=1.0
    pub progress: f32,
}

/// Disposition of a faction toward the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    Neutral,
    Cautious,
    Hostile,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Standing::Neutral => "Neutral",
            Standing::Cautious => "Cautious",
            Standing::Hostile => "Hostile",
        }
    }

    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Standing::Neutral => (99, 179, 237),
            Standing::Cautious => (236, 201, 75),
            Standing::Hostile => (245, 101, 101),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionStanding {
    pub name: String,
    pub standing: Standing,
}

/// The opening quest log
pub fn starting_quests() -> Vec<QuestEntry> {
    vec![QuestEntry {
        title: "Main Quest: The Echo Crystal".to_string(),
        detail: "Find the first Echo Crystal in the Ember Wastes".to_string(),
        progress: 0.25,
    }]
}

/// The three factions and their starting dispositions
pub fn starting_factions() -> Vec<FactionStanding> {
    vec![
        FactionStanding {
            name: "Skyborn Guardians".to_string(),
            standing: Standing::Neutral,
        },
        FactionStanding {
            name: "Shardwalkers".to_string(),
            standing: Standing::Cautious,
        },
        FactionStanding {
            name: "Echo Cultists".to_string(),
            standing: Standing::Hostile,
        },
    ]
}
