//! Screen-space UI
//!
//! The simulation never draws its own UI. Each frame the panel set derives
//! declarative view models from the session state, and the HUD renderer
//! draws whatever models are cached. A cache-and-diff guard keeps models
//! from being replaced when the derived value is unchanged.
//!
//! - `panels`: view models + the diff guard
//! - `notifications`: transient on-screen notices
//! - `hud`: procedural rendering of models (rectangles + bitmap text)

pub mod hud;
pub mod notifications;
pub mod panels;

pub use notifications::{Notification, NotificationKind, NotificationLog};
pub use panels::{BarLine, CachedPanel, PanelModel, PanelSet, TextLine};
