use rand::SeedableRng;
use rand::rngs::StdRng;

mod audio;
mod camera;
mod collision;
// Turn-based encounters; no overworld trigger spawns one yet
#[allow(dead_code)]
mod combat;
mod crystal;
mod game;
mod input;
mod inventory;
mod level;
mod player;
mod save;
mod stats;
mod text;
mod ui;

use audio::{NullSynth, SdlSynth, ToneSynth};
use game::GameWorld;
use game::rendering::render_world;
use input::GameAction;
use save::SaveManager;
use ui::hud::render_hud;
use ui::{NotificationKind, PanelSet};

// Viewport constants
const VIEW_WIDTH: u32 = 960;
const VIEW_HEIGHT: u32 = 540;
const FRAME_DT: f32 = 1.0 / 60.0;

const LEVEL_PATH: &str = "assets/data/islands.json";

/// Loads the island layout, falling back to an empty world
///
/// Failures are reported through the notification log once the world
/// exists; an empty island list is a playable (if bleak) session.
fn load_world_islands() -> (Vec<level::Island>, Option<String>) {
    match level::load_islands(LEVEL_PATH) {
        Ok(mut islands) => {
            level::recenter_islands(
                &mut islands,
                VIEW_WIDTH as f32 / 2.0,
                VIEW_HEIGHT as f32 / 2.0,
            );
            log::info!("loaded {} islands from {}", islands.len(), LEVEL_PATH);
            (islands, None)
        }
        Err(e) => {
            log::error!("failed to load islands: {}", e);
            (Vec::new(), Some("Error loading game world".to_string()))
        }
    }
}

fn save_session(manager: Option<&SaveManager>, world: &mut GameWorld) {
    let Some(manager) = manager else {
        world
            .notifications
            .push(NotificationKind::Error, "Saving is unavailable");
        return;
    };

    match manager.save(&world.snapshot()) {
        Ok(_) => world
            .notifications
            .push(NotificationKind::Success, "Game saved"),
        Err(e) => {
            log::error!("save failed: {}", e);
            world
                .notifications
                .push(NotificationKind::Error, "Failed to save game");
        }
    }
}

fn load_session(manager: Option<&SaveManager>, world: &mut GameWorld) {
    let Some(manager) = manager else {
        world
            .notifications
            .push(NotificationKind::Error, "Loading is unavailable");
        return;
    };

    match manager.load() {
        Ok(snapshot) => {
            world.restore(snapshot);
            world
                .notifications
                .push(NotificationKind::Info, "Session restored");
        }
        Err(e) => {
            log::warn!("load failed: {}", e);
            world
                .notifications
                .push(NotificationKind::Error, "No session to restore");
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Echo Crystal", VIEW_WIDTH, VIEW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(VIEW_WIDTH, VIEW_HEIGHT)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    let (islands, load_error) = load_world_islands();
    let mut world = GameWorld::new(VIEW_WIDTH, VIEW_HEIGHT, islands);
    if let Some(message) = load_error {
        world.notifications.push(NotificationKind::Error, message);
    }

    // Audio failure leaves a silent game, never a dead one
    let mut synth: Box<dyn ToneSynth> = match sdl_context
        .audio()
        .and_then(|audio| SdlSynth::new(&audio))
    {
        Ok(synth) => Box::new(synth),
        Err(e) => {
            log::error!("audio init failed: {}", e);
            world
                .notifications
                .push(NotificationKind::Error, "Audio initialization failed");
            Box::new(NullSynth)
        }
    };

    let save_manager = match SaveManager::new(SaveManager::default_directory()) {
        Ok(manager) => Some(manager),
        Err(e) => {
            log::error!("save directory unavailable: {}", e);
            world
                .notifications
                .push(NotificationKind::Error, "Saving is unavailable");
            None
        }
    };

    // Resume the previous session when one exists
    if let Some(manager) = &save_manager {
        if manager.save_exists() {
            load_session(Some(manager), &mut world);
        }
    }

    let mut panels = PanelSet::new();
    let mut rng = StdRng::from_entropy();

    log::info!("controls: A/D or arrows move, W/Up jump, Space glide,");
    log::info!("          Shift+direction dash, E inventory, F5 save, F9 load");

    'running: loop {
        for action in input::poll_actions(&mut event_pump, panels.inventory_open) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Jump => {
                    world.player.jump();
                }
                GameAction::Dash(direction) => {
                    world.player.dash(direction);
                }
                GameAction::ToggleInventory => panels.toggle_inventory(),
                GameAction::UseItem(index) => world.use_inventory_item(index),
                GameAction::SaveGame => save_session(save_manager.as_ref(), &mut world),
                GameAction::LoadGame => load_session(save_manager.as_ref(), &mut world),
            }
        }

        let (move_input, glide) = {
            let keyboard = event_pump.keyboard_state();
            (input::held_move_input(&keyboard), input::glide_held(&keyboard))
        };

        let events = world.update(FRAME_DT, move_input, glide, &mut rng);
        for event in &events {
            GameWorld::play_event_cue(event, synth.as_mut());
        }

        panels.sync(
            &world.player.stats,
            &world.quests,
            &world.factions,
            &world.inventory,
        );

        render_world(&mut canvas, &world)?;
        render_hud(
            &mut canvas,
            &panels,
            &world.notifications,
            VIEW_WIDTH,
            VIEW_HEIGHT,
        )?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
