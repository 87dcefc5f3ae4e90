//! Input translation: SDL events and key state to game actions
//!
//! Held movement (A/D, arrows) and glide (space) are sampled from the
//! keyboard state each frame; discrete actions come from key-down events.
//! Keeping the translation pure (`action_for_key`) lets it be tested
//! without an SDL context.

use crate::player::MoveInput;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Mod, Scancode};

/// Discrete actions produced by key presses
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    Jump,
    /// Horizontal dash; -1.0 left, 1.0 right
    Dash(f32),
    ToggleInventory,
    /// Use the inventory stack at this index (only while the panel is open)
    UseItem(usize),
    SaveGame,
    LoadGame,
    Quit,
}

/// Maps one key press to an action, if any
///
/// Shift+direction turns a movement key into a dash. Number keys act on
/// inventory stacks only while the inventory panel is open.
pub fn action_for_key(key: Keycode, keymod: Mod, inventory_open: bool) -> Option<GameAction> {
    let shift_held = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);

    match key {
        Keycode::W | Keycode::Up => Some(GameAction::Jump),
        Keycode::A | Keycode::Left if shift_held => Some(GameAction::Dash(-1.0)),
        Keycode::D | Keycode::Right if shift_held => Some(GameAction::Dash(1.0)),
        Keycode::E => Some(GameAction::ToggleInventory),
        Keycode::F5 => Some(GameAction::SaveGame),
        Keycode::F9 => Some(GameAction::LoadGame),
        Keycode::Escape => Some(GameAction::Quit),
        Keycode::Num1 if inventory_open => Some(GameAction::UseItem(0)),
        Keycode::Num2 if inventory_open => Some(GameAction::UseItem(1)),
        Keycode::Num3 if inventory_open => Some(GameAction::UseItem(2)),
        Keycode::Num4 if inventory_open => Some(GameAction::UseItem(3)),
        Keycode::Num5 if inventory_open => Some(GameAction::UseItem(4)),
        Keycode::Num6 if inventory_open => Some(GameAction::UseItem(5)),
        Keycode::Num7 if inventory_open => Some(GameAction::UseItem(6)),
        Keycode::Num8 if inventory_open => Some(GameAction::UseItem(7)),
        Keycode::Num9 if inventory_open => Some(GameAction::UseItem(8)),
        _ => None,
    }
}

/// Drains pending SDL events into actions for this frame
pub fn poll_actions(event_pump: &mut EventPump, inventory_open: bool) -> Vec<GameAction> {
    let mut actions = Vec::new();

    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => actions.push(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                keymod,
                repeat: false,
                ..
            } => {
                if let Some(action) = action_for_key(key, keymod, inventory_open) {
                    actions.push(action);
                }
            }
            _ => {}
        }
    }

    actions
}

/// Held A/D and arrow keys, sampled once per frame
pub fn held_move_input(keyboard: &KeyboardState) -> MoveInput {
    MoveInput {
        left: keyboard.is_scancode_pressed(Scancode::A)
            || keyboard.is_scancode_pressed(Scancode::Left),
        right: keyboard.is_scancode_pressed(Scancode::D)
            || keyboard.is_scancode_pressed(Scancode::Right),
    }
}

/// Space held: glide while airborne
pub fn glide_held(keyboard: &KeyboardState) -> bool {
    keyboard.is_scancode_pressed(Scancode::Space)
}
