//! World data: floating islands and the JSON level loader
//!
//! Islands are static axis-aligned rectangles loaded once at startup from a
//! JSON document. They are immutable for the lifetime of the session; every
//! other system (collision, crystal spawning, rendering) borrows them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Surface material of an island
///
/// Terrain drives rendering colors and crystal spawning: only `Crystal`
/// islands grow crystals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Stone,
    Grass,
    Crystal,
}

/// A static rectangular platform the player can stand on or collide with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Island {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,

    #[serde(rename = "type")]
    pub terrain: Terrain,

    /// One-way platform: only collides when landed on from above
    #[serde(default, alias = "passThrough")]
    pub pass_through: bool,

    /// Texture name from the level file. Parsed for forward compatibility,
    /// ignored by the procedural renderer.
    #[serde(default)]
    pub texture: Option<String>,
}

impl Island {
    #[allow(dead_code)] // Levels come from JSON; tests build islands directly
    pub fn new(x: f32, y: f32, width: f32, height: f32, terrain: Terrain) -> Self {
        Island {
            x,
            y,
            width,
            height,
            terrain,
            pass_through: false,
            texture: None,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Root structure of the level file
#[derive(Debug, Deserialize)]
struct LevelFile {
    islands: Vec<Island>,
}

/// Errors raised while loading a level file
#[derive(Debug)]
pub enum LevelError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "IO error: {}", e),
            LevelError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

impl From<std::io::Error> for LevelError {
    fn from(err: std::io::Error) -> Self {
        LevelError::Io(err)
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        LevelError::Parse(err)
    }
}

/// Loads island data from a JSON level file
///
/// Coordinates in the file are relative to the world origin; callers offset
/// them to the viewport center before handing them to the session. A missing
/// or malformed file is an error — the caller decides whether to fall back
/// to an empty world.
pub fn load_islands(path: impl AsRef<Path>) -> Result<Vec<Island>, LevelError> {
    let json = fs::read_to_string(path)?;
    let level: LevelFile = serde_json::from_str(&json)?;
    Ok(level.islands)
}

/// Offsets every island so file coordinates become world coordinates
/// centered on the viewport
pub fn recenter_islands(islands: &mut [Island], center_x: f32, center_y: f32) {
    for island in islands.iter_mut() {
        island.x += center_x;
        island.y += center_y;
    }
}
