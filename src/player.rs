//! Player avatar: per-frame movement integration and island collision
//!
//! Velocities are in world units per frame at the fixed 60 FPS timestep,
//! matching the tuning constants the game was balanced around. Only the
//! dash timers are wall-clock seconds.

use crate::collision::{self, PLAYER_HALF_EXTENT, Side};
use crate::level::Island;
use crate::stats::PlayerStats;

const ACCELERATION: f32 = 0.8;
const GROUND_FRICTION: f32 = 0.85;
const AIR_DRAG: f32 = 0.90;
const GRAVITY: f32 = 0.2;
const GLIDE_GRAVITY: f32 = 0.15;
const JUMP_FORCE: f32 = -8.0;
const GROUND_MAX_SPEED: f32 = 8.0;
const AIR_MAX_SPEED: f32 = 5.0;

/// Horizontal burst applied by a dash, per frame while active
pub const DASH_SPEED: f32 = 48.0;
const DASH_DURATION: f32 = 0.2;
const DASH_COOLDOWN: f32 = 1.5;

const MAX_AIR_JUMPS: u8 = 1;

/// Held movement keys, sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
}

pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
    gliding: bool,
    air_jumps_left: u8,
    dash_timer: f32,
    dash_cooldown: f32,
    pub stats: PlayerStats,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            grounded: false,
            gliding: false,
            air_jumps_left: MAX_AIR_JUMPS,
            dash_timer: 0.0,
            dash_cooldown: 0.0,
            stats: PlayerStats::new(),
        }
    }

    /// Jump off the ground, or spend the one air jump
    ///
    /// Returns false when neither is available.
    pub fn jump(&mut self) -> bool {
        if self.grounded {
            self.vy = JUMP_FORCE;
            self.grounded = false;
            true
        } else if self.air_jumps_left > 0 {
            self.air_jumps_left -= 1;
            self.vy = JUMP_FORCE;
            true
        } else {
            false
        }
    }

    /// Start gliding. Only takes effect while airborne; landing clears it.
    pub fn start_glide(&mut self) {
        if !self.grounded {
            self.gliding = true;
        }
    }

    #[allow(dead_code)] // Reserved for a glide rendering effect
    pub fn is_gliding(&self) -> bool {
        self.gliding
    }

    /// Horizontal dash in `direction` (-1.0 left, 1.0 right)
    ///
    /// Returns false while on cooldown. The burst bypasses the normal speed
    /// cap for its duration, which is exactly what lets it clip through
    /// very thin islands.
    pub fn dash(&mut self, direction: f32) -> bool {
        if self.dash_cooldown > 0.0 {
            return false;
        }
        self.vx = direction.signum() * DASH_SPEED;
        self.dash_timer = DASH_DURATION;
        self.dash_cooldown = DASH_COOLDOWN;
        true
    }

    #[allow(dead_code)] // Reserved for a dash trail effect
    pub fn is_dashing(&self) -> bool {
        self.dash_timer > 0.0
    }

    fn gravity(&self) -> f32 {
        if self.gliding { GLIDE_GRAVITY } else { GRAVITY }
    }

    /// Active horizontal speed cap
    pub fn max_speed(&self) -> f32 {
        if self.dash_timer > 0.0 {
            DASH_SPEED
        } else if self.grounded {
            GROUND_MAX_SPEED
        } else {
            AIR_MAX_SPEED
        }
    }

    /// Advances one frame: gravity, input acceleration, friction, speed
    /// clamp, integration, then collision resolution against every island.
    pub fn step(&mut self, input: MoveInput, islands: &[Island], dt: f32) {
        self.dash_timer = (self.dash_timer - dt).max(0.0);
        self.dash_cooldown = (self.dash_cooldown - dt).max(0.0);

        if !self.grounded {
            self.vy += self.gravity();
        }

        // A dash burst overrides steering and drag until it expires
        if self.dash_timer <= 0.0 {
            let mut accel = 0.0;
            if input.left {
                accel -= ACCELERATION;
            }
            if input.right {
                accel += ACCELERATION;
            }
            self.vx += accel;

            if self.grounded {
                self.vx *= GROUND_FRICTION;
            } else {
                self.vx *= AIR_DRAG;
            }
        }

        let cap = self.max_speed();
        self.vx = self.vx.clamp(-cap, cap);

        let prev_x = self.x;
        let prev_y = self.y;
        self.x += self.vx;
        self.y += self.vy;

        self.grounded = collision::is_grounded(self.x, self.y, islands);

        for island in islands {
            if !collision::overlaps_island(self.x, self.y, island) {
                continue;
            }
            match collision::entry_side(prev_x, prev_y, self.vx, self.vy, island) {
                Some(Side::Top) => {
                    self.y = island.y - PLAYER_HALF_EXTENT;
                    self.vy = 0.0;
                    self.grounded = true;
                }
                Some(Side::Bottom) => {
                    self.y = island.bottom() + PLAYER_HALF_EXTENT;
                    self.vy = 0.0;
                }
                Some(Side::Left) => {
                    self.x = island.x - PLAYER_HALF_EXTENT;
                    self.vx = 0.0;
                }
                Some(Side::Right) => {
                    self.x = island.right() + PLAYER_HALF_EXTENT;
                    self.vx = 0.0;
                }
                None => {}
            }
        }

        if self.grounded {
            self.air_jumps_left = MAX_AIR_JUMPS;
            self.gliding = false;
        }
    }

    /// Resets position and motion after falling out of the world
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.grounded = true;
        self.gliding = false;
        self.air_jumps_left = MAX_AIR_JUMPS;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
