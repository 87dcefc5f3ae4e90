// GameWorld: the explicit session-state struct
//
// Owns every mutable piece of the session (player, crystals, inventory,
// camera, notifications, quest/faction data) and advances all of it in one
// update call. Subsystems receive what they need as arguments; nothing in
// the crate reaches for a global.

use rand::Rng;

use super::types::{self, FactionStanding, GameEvent, QuestEntry};
use crate::audio::{EIGHTH_NOTE, ToneSynth};
use crate::camera::Camera;
use crate::crystal::CrystalManager;
use crate::inventory::{Inventory, InventoryError, InventoryItem};
use crate::level::Island;
use crate::player::{MoveInput, Player};
use crate::save::{CURRENT_SNAPSHOT_VERSION, SessionSnapshot};
use crate::ui::{NotificationKind, NotificationLog};

/// Falling this far past the viewport bottom triggers a respawn
const FALL_LIMIT_FACTOR: f32 = 1.5;

pub struct GameWorld {
    pub player: Player,
    pub islands: Vec<Island>,
    pub crystals: CrystalManager,
    pub inventory: Inventory,
    pub camera: Camera,
    pub notifications: NotificationLog,
    pub quests: Vec<QuestEntry>,
    pub factions: Vec<FactionStanding>,
    spawn_point: (f32, f32),
    fall_limit: f32,
}

impl GameWorld {
    /// Builds a fresh session with the player at the viewport center
    pub fn new(view_width: u32, view_height: u32, islands: Vec<Island>) -> Self {
        let spawn_point = (view_width as f32 / 2.0, view_height as f32 / 2.0);
        let mut camera = Camera::new(view_width as f32, view_height as f32);
        camera.snap_to(spawn_point);

        GameWorld {
            player: Player::new(spawn_point.0, spawn_point.1),
            islands,
            crystals: CrystalManager::new(),
            inventory: Inventory::default(),
            camera,
            notifications: NotificationLog::new(),
            quests: types::starting_quests(),
            factions: types::starting_factions(),
            spawn_point,
            fall_limit: view_height as f32 * FALL_LIMIT_FACTOR,
        }
    }

    /// Advances the whole session one frame
    ///
    /// Order matches the frame contract: integrate + collide, fall check,
    /// camera, crystal spawn/collect, inventory/stat application, UI aging.
    /// Returned events carry the facts the main loop turns into audio.
    pub fn update(
        &mut self,
        dt: f32,
        input: MoveInput,
        glide: bool,
        rng: &mut impl Rng,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if glide {
            self.player.start_glide();
        }
        self.player.step(input, &self.islands, dt);

        if self.player.y > self.fall_limit {
            self.player.respawn(self.spawn_point.0, self.spawn_point.1);
            log::debug!("player fell out of the world, respawning");
            events.push(GameEvent::PlayerFell);
        }

        self.camera.follow(self.player.position());

        let collected =
            self.crystals
                .update(dt, self.player.position(), &self.islands, rng);
        for crystal in collected {
            events.push(GameEvent::CrystalCollected {
                element: crystal.element,
                power: crystal.power,
            });
            self.notifications.push(
                NotificationKind::Success,
                format!("Collected {} crystal!", crystal.element.name()),
            );

            match self
                .inventory
                .add(InventoryItem::echo_crystal(crystal.element, crystal.power))
            {
                Ok(()) => {}
                Err(InventoryError::InventoryFull) => {
                    events.push(GameEvent::InventoryFull);
                    self.notifications
                        .push(NotificationKind::Error, "Inventory full!");
                }
                Err(e) => log::warn!("failed to store crystal: {}", e),
            }

            let levels = self.player.stats.gain_experience(crystal.power as f32);
            if levels > 0 {
                events.push(GameEvent::LevelUp {
                    level: self.player.stats.level,
                });
                self.notifications.push(
                    NotificationKind::Info,
                    format!("Reached level {}!", self.player.stats.level),
                );
            }
        }

        self.notifications.update(dt);
        events
    }

    /// Uses one item from the inventory stack at `index`
    pub fn use_inventory_item(&mut self, index: usize) {
        match self.inventory.use_item(index, &mut self.player.stats) {
            Ok(true) => {}
            Ok(false) => {
                self.notifications
                    .push(NotificationKind::Info, "Nothing happens.");
            }
            Err(e) => log::warn!("use item failed: {}", e),
        }
    }

    /// Captures the session for a save slot
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            version: CURRENT_SNAPSHOT_VERSION,
            saved_at: chrono::Local::now().to_rfc3339(),
            player_position: self.player.position(),
            stats: self.player.stats.clone(),
            inventory: self.inventory.items().to_vec(),
            quest_progress: self.quests.clone(),
            faction_standings: self.factions.clone(),
        }
    }

    /// Restores a loaded snapshot over the running session
    ///
    /// The static world (islands) is untouched; crystals in flight keep
    /// ticking. A snapshot holding more stacks than fit (hand-edited file)
    /// drops the overflow with a warning.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.player
            .respawn(snapshot.player_position.0, snapshot.player_position.1);
        self.player.stats = snapshot.stats;

        self.inventory = Inventory::default();
        for item in snapshot.inventory {
            if let Err(e) = self.inventory.add(item) {
                log::warn!("dropping stack from snapshot: {}", e);
            }
        }

        self.quests = snapshot.quest_progress;
        self.factions = snapshot.faction_standings;
        self.camera.snap_to(self.player.position());
    }

    /// Routes one simulation event to the synth
    pub fn play_event_cue(event: &GameEvent, synth: &mut dyn ToneSynth) {
        match event {
            GameEvent::CrystalCollected { element, .. } => {
                synth.play(element.note(), EIGHTH_NOTE);
            }
            GameEvent::LevelUp { .. } => synth.play("C5", EIGHTH_NOTE),
            GameEvent::InventoryFull | GameEvent::PlayerFell => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crystal::{Crystal, Element};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VIEW: (u32, u32) = (960, 540);
    const DT: f32 = 0.1;

    fn world_with_crystal_at(x: f32, y: f32) -> GameWorld {
        let mut world = GameWorld::new(VIEW.0, VIEW.1, Vec::new());
        world.crystals.place(Crystal {
            x,
            y,
            element: Element::Ice,
            power: 4,
            collected: false,
            pulse_phase: 0.0,
        });
        world
    }

    #[test]
    fn test_fall_respawns_at_viewport_center() {
        let mut world = GameWorld::new(VIEW.0, VIEW.1, Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        world.player.y = 900.0; // beyond 540 * 1.5

        let events = world.update(DT, MoveInput::default(), false, &mut rng);

        assert!(events.contains(&GameEvent::PlayerFell));
        assert_eq!(world.player.position(), (480.0, 270.0));
        assert_eq!(world.player.vy, 0.0);
    }

    #[test]
    fn test_collection_stores_item_and_grants_experience() {
        let (px, py) = (480.0, 270.0);
        let mut world = world_with_crystal_at(px, py);
        world.player.respawn(px, py); // hold still on the crystal
        let mut rng = StdRng::seed_from_u64(0);

        let events = world.update(DT, MoveInput::default(), false, &mut rng);

        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::CrystalCollected { element: Element::Ice, power: 4 }
        )));
        assert_eq!(world.inventory.len(), 1);
        assert_eq!(world.inventory.items()[0].name, "Ice Echo Crystal");
        assert_eq!(world.player.stats.experience, 4.0);
        assert!(!world.notifications.is_empty());
    }

    #[test]
    fn test_full_inventory_reports_and_keeps_contents() {
        let (px, py) = (480.0, 270.0);
        let mut world = world_with_crystal_at(px, py);
        world.player.respawn(px, py);
        let mut rng = StdRng::seed_from_u64(0);

        // Fill all 20 stacks with keys the incoming Ice/4 crystal won't match
        for power in 1..=4u32 {
            for element in Element::ALL {
                let item = InventoryItem::echo_crystal(element, power * 100);
                world.inventory.add(item).unwrap();
            }
        }
        assert!(world.inventory.is_full());

        let events = world.update(DT, MoveInput::default(), false, &mut rng);

        assert!(events.contains(&GameEvent::InventoryFull));
        assert_eq!(world.inventory.len(), 20);
        // The crystal is still gone from the world
        assert!(world.crystals.crystals()[0].collected);
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let (px, py) = (480.0, 270.0);
        let mut world = world_with_crystal_at(px, py);
        world.player.respawn(px, py);
        let mut rng = StdRng::seed_from_u64(0);
        world.update(DT, MoveInput::default(), false, &mut rng);

        let snapshot = world.snapshot();

        let mut other = GameWorld::new(VIEW.0, VIEW.1, Vec::new());
        other.restore(snapshot);

        assert_eq!(other.player.position(), (px, py));
        assert_eq!(other.inventory.len(), 1);
        assert_eq!(other.player.stats.experience, 4.0);
        assert_eq!(other.quests[0].progress, 0.25);
        assert_eq!(other.factions.len(), 3);
    }

    #[test]
    fn test_use_consumable_through_world() {
        let mut world = GameWorld::new(VIEW.0, VIEW.1, Vec::new());
        world.player.stats.health.deplete(30.0);
        world
            .inventory
            .add(InventoryItem::consumable(
                "Minor Tonic",
                crate::inventory::ConsumableEffect::RestoreHealth(25),
            ))
            .unwrap();

        world.use_inventory_item(0);

        assert_eq!(world.player.stats.health.current(), 95.0);
        assert!(world.inventory.is_empty());
    }
}
