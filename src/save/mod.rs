//! Session snapshots
//!
//! F5 writes the running session to a JSON snapshot, F9 restores the most
//! recent one. Snapshots capture what defines a session beyond the static
//! world: player position, stats, inventory, quest progress, and faction
//! standings. Failures are logged and surfaced as notifications, never
//! fatal.

pub mod manager;
pub mod snapshot;

pub use manager::SaveManager;
pub use snapshot::{CURRENT_SNAPSHOT_VERSION, SaveError, SessionSnapshot};
