//! Elemental crystals: timed spawning and queued collection
//!
//! A fixed-interval spawner grows crystals on `Crystal`-terrain islands,
//! capped at a fixed active count. Collection runs on a 100 ms tick rather
//! than every frame: crystals inside the pickup radius are marked collected
//! immediately and pushed onto a FIFO queue, which drains strictly in
//! discovery order at one crystal per 100 ms. Marking at enqueue time is
//! what makes double discovery in one tick window impossible.

use crate::level::{Island, Terrain};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Seconds between spawn waves
pub const SPAWN_INTERVAL: f32 = 10.0;
/// Active (uncollected) crystal cap across the whole world
pub const MAX_ACTIVE_CRYSTALS: usize = 10;
/// Pickup radius around the player, in world units
pub const COLLECTION_RADIUS: f32 = 40.0;

/// Collection scan cadence
const COLLECTION_TICK: f32 = 0.1;
/// Delay between consecutive queue items
const COLLECTION_DELAY: f32 = 0.1;

/// Crystals spawn this far inside the island's right edge
const SPAWN_MARGIN: f32 = 20.0;
/// Crystals float this far above the island surface
const SPAWN_HEIGHT: f32 = 30.0;

/// Pulse phase advance per collection tick
const PULSE_STEP: f32 = 0.05;

/// The five crystal elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Ice,
    Nature,
    Arcane,
    Void,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Ice,
        Element::Nature,
        Element::Arcane,
        Element::Void,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Ice => "ice",
            Element::Nature => "nature",
            Element::Arcane => "arcane",
            Element::Void => "void",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Ice => "Ice",
            Element::Nature => "Nature",
            Element::Arcane => "Arcane",
            Element::Void => "Void",
        }
    }

    /// Synth pitch played when a crystal of this element is collected
    pub fn note(&self) -> &'static str {
        match self {
            Element::Fire => "C4",
            Element::Ice => "E4",
            Element::Nature => "G4",
            Element::Arcane => "B4",
            Element::Void => "C2",
        }
    }

    /// [core, edge] render colors
    pub fn colors(&self) -> [(u8, u8, u8); 2] {
        match self {
            Element::Fire => [(0xff, 0x8a, 0x00), (0xff, 0x00, 0x00)],
            Element::Ice => [(0x00, 0xc6, 0xff), (0x00, 0x72, 0xff)],
            Element::Nature => [(0x00, 0xff, 0x87), (0x60, 0xef, 0xff)],
            Element::Arcane => [(0xda, 0x22, 0xff), (0x97, 0x33, 0xee)],
            Element::Void => [(0x14, 0x1e, 0x30), (0x24, 0x3b, 0x55)],
        }
    }
}

/// A transient pickup floating above a crystal island
#[derive(Debug, Clone)]
pub struct Crystal {
    pub x: f32,
    pub y: f32,
    pub element: Element,
    pub power: u32,
    pub collected: bool,
    pub pulse_phase: f32,
}

/// Output of a drained collection: what the player actually picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectedCrystal {
    pub element: Element,
    pub power: u32,
}

/// Rarity weights for powers 1..=10; commons dominate, 10 is rare
const POWER_WEIGHTS: [u32; 10] = [30, 22, 16, 11, 8, 6, 3, 2, 1, 1];

/// Flattens the rarity weights into a frequency list: each power appears
/// `weight` times, so a uniform index draw becomes a weighted draw
pub fn flattened_power_table() -> Vec<u32> {
    let mut table = Vec::with_capacity(POWER_WEIGHTS.iter().sum::<u32>() as usize);
    for (i, &weight) in POWER_WEIGHTS.iter().enumerate() {
        for _ in 0..weight {
            table.push(i as u32 + 1);
        }
    }
    table
}

/// Owns the active crystal set, the spawn timer, and the collection queue
pub struct CrystalManager {
    crystals: Vec<Crystal>,
    power_table: Vec<u32>,
    spawn_timer: f32,
    tick_timer: f32,
    drain_timer: f32,
    pending: VecDeque<CollectedCrystal>,
}

impl CrystalManager {
    pub fn new() -> Self {
        CrystalManager {
            crystals: Vec::new(),
            power_table: flattened_power_table(),
            spawn_timer: 0.0,
            tick_timer: 0.0,
            drain_timer: 0.0,
            pending: VecDeque::new(),
        }
    }

    /// Crystals for rendering (includes collected ones awaiting purge)
    pub fn crystals(&self) -> &[Crystal] {
        &self.crystals
    }

    #[allow(dead_code)] // Reserved for a HUD crystal counter
    pub fn active_count(&self) -> usize {
        self.crystals.iter().filter(|c| !c.collected).count()
    }

    /// Queued pickups not yet handed to the player
    #[allow(dead_code)] // Reserved for a HUD crystal counter
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advances spawner, pulse animation, discovery, and queue drain.
    /// Returns the crystals whose collection completed this frame, in
    /// discovery order.
    pub fn update(
        &mut self,
        dt: f32,
        player_pos: (f32, f32),
        islands: &[Island],
        rng: &mut impl Rng,
    ) -> Vec<CollectedCrystal> {
        self.spawn_timer += dt;
        if self.spawn_timer >= SPAWN_INTERVAL {
            self.spawn_timer = 0.0;
            self.spawn_wave(islands, rng);
        }

        self.tick_timer += dt;
        if self.tick_timer >= COLLECTION_TICK {
            self.tick_timer = 0.0;
            self.advance_pulses();
            self.discover(player_pos);
        }

        let mut completed = Vec::new();
        if self.pending.is_empty() {
            self.drain_timer = 0.0;
        } else {
            self.drain_timer += dt;
            while self.drain_timer >= COLLECTION_DELAY {
                match self.pending.pop_front() {
                    Some(item) => {
                        self.drain_timer -= COLLECTION_DELAY;
                        completed.push(item);
                    }
                    None => break,
                }
            }
        }

        completed
    }

    /// Purges collected crystals, then grows one crystal per crystal-terrain
    /// island while under the active cap
    fn spawn_wave(&mut self, islands: &[Island], rng: &mut impl Rng) {
        self.crystals.retain(|c| !c.collected);

        for island in islands {
            if island.terrain != Terrain::Crystal {
                continue;
            }
            if self.crystals.len() >= MAX_ACTIVE_CRYSTALS {
                break;
            }
            let crystal = self.grow_crystal(island, rng);
            self.crystals.push(crystal);
        }
    }

    fn grow_crystal(&self, island: &Island, rng: &mut impl Rng) -> Crystal {
        // Uniform in [x, x + width - margin); islands narrower than the
        // margin collapse to their left edge
        let span = (island.width - SPAWN_MARGIN).max(f32::EPSILON);
        let x = island.x + rng.gen_range(0.0..span);
        let y = island.y - SPAWN_HEIGHT;
        let element = Element::ALL[rng.gen_range(0..Element::ALL.len())];
        let power = self.power_table[rng.gen_range(0..self.power_table.len())];

        Crystal {
            x,
            y,
            element,
            power,
            collected: false,
            pulse_phase: 0.0,
        }
    }

    fn advance_pulses(&mut self) {
        for crystal in self.crystals.iter_mut() {
            if !crystal.collected {
                crystal.pulse_phase =
                    (crystal.pulse_phase + PULSE_STEP) % (std::f32::consts::PI * 2.0);
            }
        }
    }

    /// Marks every uncollected crystal within the pickup radius and queues
    /// it. The collected flag flips here, at enqueue time, so a crystal can
    /// never enter the queue twice.
    fn discover(&mut self, (px, py): (f32, f32)) {
        for crystal in self.crystals.iter_mut() {
            if crystal.collected {
                continue;
            }
            let dx = px - crystal.x;
            let dy = py - crystal.y;
            if (dx * dx + dy * dy).sqrt() < COLLECTION_RADIUS {
                crystal.collected = true;
                self.pending.push_back(CollectedCrystal {
                    element: crystal.element,
                    power: crystal.power,
                });
            }
        }
    }

    /// Test hook: drops a crystal straight into the active set
    #[cfg(test)]
    pub(crate) fn place(&mut self, crystal: Crystal) {
        self.crystals.push(crystal);
    }
}

impl Default for CrystalManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn crystal_island() -> Island {
        Island::new(100.0, 100.0, 180.0, 50.0, Terrain::Crystal)
    }

    fn test_crystal(x: f32, y: f32) -> Crystal {
        Crystal {
            x,
            y,
            element: Element::Fire,
            power: 3,
            collected: false,
            pulse_phase: 0.0,
        }
    }

    // Player parked far away from everything
    const FAR: (f32, f32) = (-10_000.0, -10_000.0);

    #[test]
    fn test_flattened_table_shape() {
        let table = flattened_power_table();
        assert_eq!(table.len(), 100);
        assert_eq!(table.iter().filter(|&&p| p == 1).count(), 30);
        assert_eq!(table.iter().filter(|&&p| p == 10).count(), 1);
        assert!(table.iter().all(|&p| (1..=10).contains(&p)));
    }

    #[test]
    fn test_spawn_placement_bounds() {
        let islands = vec![crystal_island()];
        let mut rng = StdRng::seed_from_u64(7);

        for seed_round in 0..50 {
            let mut manager = CrystalManager::new();
            manager.update(SPAWN_INTERVAL, FAR, &islands, &mut rng);

            assert_eq!(manager.crystals().len(), 1, "round {}", seed_round);
            let crystal = &manager.crystals()[0];
            assert!(crystal.x >= 100.0 && crystal.x < 260.0);
            assert_eq!(crystal.y, 70.0);
            assert!((1..=10).contains(&crystal.power));
        }
    }

    #[test]
    fn test_spawn_respects_active_cap() {
        let islands: Vec<Island> = (0..15)
            .map(|i| Island::new(i as f32 * 300.0, 100.0, 180.0, 50.0, Terrain::Crystal))
            .collect();
        let mut rng = StdRng::seed_from_u64(3);
        let mut manager = CrystalManager::new();

        manager.update(SPAWN_INTERVAL, FAR, &islands, &mut rng);
        assert_eq!(manager.active_count(), MAX_ACTIVE_CRYSTALS);

        // A second wave has nothing to add while the cap is full
        manager.update(SPAWN_INTERVAL, FAR, &islands, &mut rng);
        assert_eq!(manager.active_count(), MAX_ACTIVE_CRYSTALS);
    }

    #[test]
    fn test_non_crystal_islands_grow_nothing() {
        let islands = vec![
            Island::new(0.0, 100.0, 180.0, 50.0, Terrain::Grass),
            Island::new(300.0, 100.0, 180.0, 50.0, Terrain::Stone),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let mut manager = CrystalManager::new();

        manager.update(SPAWN_INTERVAL, FAR, &islands, &mut rng);
        assert_eq!(manager.crystals().len(), 0);
    }

    #[test]
    fn test_collection_happens_exactly_once() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut manager = CrystalManager::new();
        manager.place(test_crystal(0.0, 0.0));

        // Two full tick windows with the player on top of the crystal
        let first = manager.update(COLLECTION_TICK, (0.0, 0.0), &[], &mut rng);
        let second = manager.update(COLLECTION_TICK, (0.0, 0.0), &[], &mut rng);

        let total = first.len() + second.len();
        assert_eq!(total, 1);
        assert_eq!(manager.pending_count(), 0);
        assert!(manager.crystals()[0].collected);
    }

    #[test]
    fn test_queue_drains_one_per_delay_in_discovery_order() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut manager = CrystalManager::new();
        let mut near = test_crystal(0.0, 0.0);
        near.power = 1;
        let mut mid = test_crystal(10.0, 0.0);
        mid.power = 2;
        let mut far = test_crystal(20.0, 0.0);
        far.power = 3;
        manager.place(near);
        manager.place(mid);
        manager.place(far);

        let mut drained = Vec::new();
        for _ in 0..4 {
            drained.extend(manager.update(COLLECTION_TICK, (0.0, 0.0), &[], &mut rng));
        }

        let powers: Vec<u32> = drained.iter().map(|c| c.power).collect();
        assert_eq!(powers, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_radius_crystal_stays() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut manager = CrystalManager::new();
        manager.place(test_crystal(100.0, 0.0)); // distance 100 > radius 40

        let collected = manager.update(COLLECTION_TICK, (0.0, 0.0), &[], &mut rng);
        assert!(collected.is_empty());
        assert!(!manager.crystals()[0].collected);
    }

    #[test]
    fn test_spawn_wave_purges_collected() {
        let islands = vec![crystal_island()];
        let mut rng = StdRng::seed_from_u64(9);
        let mut manager = CrystalManager::new();
        let mut old = test_crystal(0.0, 0.0);
        old.collected = true;
        manager.place(old);

        manager.update(SPAWN_INTERVAL, FAR, &islands, &mut rng);

        assert_eq!(manager.crystals().len(), 1);
        assert!(!manager.crystals()[0].collected);
    }

    #[test]
    fn test_element_note_mapping() {
        assert_eq!(Element::Fire.note(), "C4");
        assert_eq!(Element::Ice.note(), "E4");
        assert_eq!(Element::Nature.note(), "G4");
        assert_eq!(Element::Arcane.note(), "B4");
        assert_eq!(Element::Void.note(), "C2");
    }
}
