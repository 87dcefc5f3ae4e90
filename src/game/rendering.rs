// World-space rendering: background, islands, crystals, player
//
// Everything is drawn procedurally (rects and scanline shapes), so the game
// ships no textures. Screen positions come from the camera; the HUD layer
// is rendered separately on top.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use super::world::GameWorld;
use crate::collision::PLAYER_HALF_EXTENT;
use crate::crystal::Crystal;
use crate::level::Terrain;

const BACKGROUND: Color = Color::RGB(0x1a, 0x20, 0x2c);
const PLAYER_BODY: Color = Color::RGB(0x48, 0xbb, 0x78);
const PLAYER_RING: Color = Color::RGB(0x2f, 0x85, 0x5a);

/// Crystal body half-height and half-width
const CRYSTAL_HALF_H: i32 = 10;
const CRYSTAL_HALF_W: i32 = 7;

fn terrain_colors(terrain: Terrain) -> (Color, Color) {
    match terrain {
        Terrain::Stone => (Color::RGB(0x4a, 0x55, 0x68), Color::RGB(0x71, 0x80, 0x96)),
        Terrain::Grass => (Color::RGB(0x13, 0x4d, 0x15), Color::RGB(0x90, 0xaa, 0x90)),
        Terrain::Crystal => (Color::RGB(0x63, 0x4f, 0x76), Color::RGB(0xa6, 0xa6, 0xaa)),
    }
}

/// Draws the full world layer for one frame
pub fn render_world(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    for island in &world.islands {
        let (sx, sy) = world.camera.to_screen(island.x, island.y);
        let (fill, stroke) = terrain_colors(island.terrain);
        let rect = Rect::new(sx, sy, island.width as u32, island.height as u32);

        canvas.set_draw_color(fill);
        canvas.fill_rect(rect)?;
        canvas.set_draw_color(stroke);
        canvas.draw_rect(rect)?;
        canvas.draw_rect(Rect::new(
            sx + 1,
            sy + 1,
            (island.width as u32).saturating_sub(2),
            (island.height as u32).saturating_sub(2),
        ))?;
    }

    for crystal in world.crystals.crystals() {
        if !crystal.collected {
            let (sx, sy) = world.camera.to_screen(crystal.x, crystal.y);
            render_crystal(canvas, crystal, sx, sy)?;
        }
    }

    let (px, py) = world
        .camera
        .to_screen(world.player.x, world.player.y);
    fill_circle(canvas, px, py, PLAYER_HALF_EXTENT as i32, PLAYER_RING)?;
    fill_circle(canvas, px, py, PLAYER_HALF_EXTENT as i32 - 3, PLAYER_BODY)?;

    Ok(())
}

/// Pulsing glow plus a diamond body in the element's colors
fn render_crystal(
    canvas: &mut Canvas<Window>,
    crystal: &Crystal,
    sx: i32,
    sy: i32,
) -> Result<(), String> {
    let [core, edge] = crystal.element.colors();
    let glow_radius = (15.0 + crystal.pulse_phase.sin() * 5.0) as i32;

    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(core.0, core.1, core.2, 70));
    fill_circle_current(canvas, sx, sy, glow_radius)?;
    canvas.set_blend_mode(BlendMode::None);

    // Diamond body as horizontal scanlines
    canvas.set_draw_color(Color::RGB(core.0, core.1, core.2));
    for dy in -CRYSTAL_HALF_H..=CRYSTAL_HALF_H {
        let half_w =
            (CRYSTAL_HALF_W as f32 * (1.0 - dy.abs() as f32 / CRYSTAL_HALF_H as f32)) as i32;
        if half_w > 0 {
            canvas.fill_rect(Rect::new(sx - half_w, sy + dy, half_w as u32 * 2, 1))?;
        }
    }

    // Edge highlight at the widest point
    canvas.set_draw_color(Color::RGB(edge.0, edge.1, edge.2));
    canvas.fill_rect(Rect::new(sx - CRYSTAL_HALF_W, sy, CRYSTAL_HALF_W as u32 * 2, 1))?;

    Ok(())
}

fn fill_circle(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    fill_circle_current(canvas, cx, cy, radius)
}

/// Scanline circle fill using whatever draw color is set
fn fill_circle_current(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
) -> Result<(), String> {
    for dy in -radius..=radius {
        let half_w = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        if half_w > 0 {
            canvas.fill_rect(Rect::new(cx - half_w, cy + dy, half_w as u32 * 2, 1))?;
        }
    }
    Ok(())
}
