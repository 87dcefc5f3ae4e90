//! Panel view models and the cache-and-diff guard
//!
//! A panel model is plain data: a title, some progress bars, some text
//! lines. Builders derive models from session state; `CachedPanel::sync`
//! swaps the cached model only when the fresh build differs, so unchanged
//! state costs one comparison and no allocation churn downstream.

use crate::game::types::{FactionStanding, QuestEntry};
use crate::inventory::Inventory;
use crate::stats::PlayerStats;

const HP_COLOR: (u8, u8, u8) = (229, 62, 62);
const MP_COLOR: (u8, u8, u8) = (66, 153, 225);
const XP_COLOR: (u8, u8, u8) = (236, 201, 75);
const BODY_COLOR: (u8, u8, u8) = (226, 232, 240);
const DIM_COLOR: (u8, u8, u8) = (148, 163, 184);

/// A labeled progress bar
#[derive(Debug, Clone, PartialEq)]
pub struct BarLine {
    pub label: String,
    pub fraction: f32,
    pub color: (u8, u8, u8),
}

/// A colored line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub color: (u8, u8, u8),
}

impl TextLine {
    fn body(text: impl Into<String>) -> Self {
        TextLine {
            text: text.into(),
            color: BODY_COLOR,
        }
    }

    fn dim(text: impl Into<String>) -> Self {
        TextLine {
            text: text.into(),
            color: DIM_COLOR,
        }
    }
}

/// Everything the HUD needs to draw one panel
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelModel {
    pub title: String,
    pub bars: Vec<BarLine>,
    pub lines: Vec<TextLine>,
}

/// Holds the last-built model and skips replacement when nothing changed
#[derive(Debug, Default)]
pub struct CachedPanel {
    model: PanelModel,
}

impl CachedPanel {
    #[allow(dead_code)]
    pub fn new() -> Self {
        CachedPanel::default()
    }

    /// Returns true if the fresh model replaced the cache
    pub fn sync(&mut self, fresh: PanelModel) -> bool {
        if fresh == self.model {
            false
        } else {
            self.model = fresh;
            true
        }
    }

    pub fn model(&self) -> &PanelModel {
        &self.model
    }
}

/// Player stats: HP/MP/XP bars plus the attribute line
pub fn build_stats_panel(stats: &PlayerStats) -> PanelModel {
    PanelModel {
        title: format!("LV {} {}", stats.level, stats.class_name.to_uppercase()),
        bars: vec![
            BarLine {
                label: format!(
                    "HP {}/{}",
                    stats.health.current() as i32,
                    stats.health.max() as i32
                ),
                fraction: stats.health.fraction(),
                color: HP_COLOR,
            },
            BarLine {
                label: format!(
                    "MP {}/{}",
                    stats.mana.current() as i32,
                    stats.mana.max() as i32
                ),
                fraction: stats.mana.fraction(),
                color: MP_COLOR,
            },
            BarLine {
                label: format!(
                    "XP {}/{}",
                    stats.experience as i32, stats.max_experience as i32
                ),
                fraction: (stats.experience / stats.max_experience).clamp(0.0, 1.0),
                color: XP_COLOR,
            },
        ],
        lines: vec![TextLine::body(format!(
            "STR {}  INT {}  DEX {}",
            stats.strength, stats.intelligence, stats.dexterity
        ))],
    }
}

pub fn build_quest_panel(quests: &[QuestEntry]) -> PanelModel {
    let mut bars = Vec::new();
    let mut lines = Vec::new();
    for quest in quests {
        lines.push(TextLine::body(quest.title.to_uppercase()));
        lines.push(TextLine::dim(quest.detail.to_uppercase()));
        bars.push(BarLine {
            label: String::new(),
            fraction: quest.progress.clamp(0.0, 1.0),
            color: XP_COLOR,
        });
    }

    PanelModel {
        title: "QUEST LOG".to_string(),
        bars,
        lines,
    }
}

pub fn build_faction_panel(factions: &[FactionStanding]) -> PanelModel {
    PanelModel {
        title: "FACTIONS".to_string(),
        bars: Vec::new(),
        lines: factions
            .iter()
            .flat_map(|faction| {
                [
                    TextLine::body(faction.name.to_uppercase()),
                    TextLine {
                        text: faction.standing.label().to_uppercase(),
                        color: faction.standing.color(),
                    },
                ]
            })
            .collect(),
    }
}

pub fn build_inventory_panel(inventory: &Inventory) -> PanelModel {
    let mut lines: Vec<TextLine> = inventory
        .items()
        .iter()
        .map(|item| {
            let color = item
                .element
                .map(|element| element.colors()[0])
                .unwrap_or(BODY_COLOR);
            let mut text = item.name.to_uppercase();
            if item.power > 0 {
                text.push_str(&format!(" P{}", item.power));
            }
            if item.quantity > 1 {
                text.push_str(&format!(" X{}", item.quantity));
            }
            TextLine { text, color }
        })
        .collect();

    if lines.is_empty() {
        lines.push(TextLine::dim("EMPTY"));
    }
    lines.push(TextLine::dim("PRESS E TO CLOSE"));

    PanelModel {
        title: format!("INVENTORY ({}/{})", inventory.len(), inventory.capacity()),
        bars: Vec::new(),
        lines,
    }
}

/// The full set of HUD panels plus inventory visibility
#[derive(Debug, Default)]
pub struct PanelSet {
    pub stats: CachedPanel,
    pub quest: CachedPanel,
    pub factions: CachedPanel,
    pub inventory: CachedPanel,
    pub inventory_open: bool,
}

impl PanelSet {
    pub fn new() -> Self {
        PanelSet::default()
    }

    pub fn toggle_inventory(&mut self) {
        self.inventory_open = !self.inventory_open;
    }

    /// Rebuilds every panel model, keeping caches for unchanged ones.
    /// Returns how many panels actually changed.
    pub fn sync(
        &mut self,
        stats: &PlayerStats,
        quests: &[QuestEntry],
        factions: &[FactionStanding],
        inventory: &Inventory,
    ) -> u32 {
        let mut changed = 0;
        changed += self.stats.sync(build_stats_panel(stats)) as u32;
        changed += self.quest.sync(build_quest_panel(quests)) as u32;
        changed += self.factions.sync(build_faction_panel(factions)) as u32;
        changed += self.inventory.sync(build_inventory_panel(inventory)) as u32;
        changed
    }
}
