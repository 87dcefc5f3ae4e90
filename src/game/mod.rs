// Game module - session state and the per-frame simulation step
//
// - world.rs: GameWorld, the explicit session-state struct every subsystem
//   call receives (there are no globals)
// - types.rs: events emitted by the simulation plus quest/faction records
// - rendering.rs: world-space drawing (islands, crystals, player)

pub mod rendering;
pub mod types;
pub mod world;

pub use types::{FactionStanding, GameEvent, QuestEntry, Standing};
pub use world::GameWorld;
