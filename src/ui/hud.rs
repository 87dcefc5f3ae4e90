//! HUD rendering: draws cached panel models and the notification stack
//!
//! Pure presentation. Everything here reads view models built in
//! `panels.rs`; nothing reaches back into simulation state.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use super::notifications::NotificationLog;
use super::panels::{PanelModel, PanelSet};
use crate::text::{draw_text, text_width};

const PANEL_WIDTH: u32 = 230;
const INVENTORY_WIDTH: u32 = 320;
const PADDING: i32 = 8;

const TITLE_SCALE: u32 = 2;
const BODY_SCALE: u32 = 1;

const TITLE_HEIGHT: i32 = 7 * TITLE_SCALE as i32 + 6;
const LINE_HEIGHT: i32 = 7 * BODY_SCALE as i32 + 4;
const BAR_HEIGHT: i32 = 8;
const BAR_BLOCK_HEIGHT: i32 = LINE_HEIGHT + BAR_HEIGHT + 5;

const PANEL_BG: Color = Color::RGBA(15, 20, 30, 205);
const PANEL_BORDER: Color = Color::RGBA(90, 110, 150, 230);
const BAR_BG: Color = Color::RGB(40, 45, 60);
const TITLE_COLOR: Color = Color::RGB(180, 210, 255);

fn panel_height(model: &PanelModel) -> i32 {
    let mut height = PADDING + TITLE_HEIGHT;
    for bar in &model.bars {
        height += BAR_BLOCK_HEIGHT;
        if bar.label.is_empty() {
            height -= LINE_HEIGHT;
        }
    }
    height += model.lines.len() as i32 * LINE_HEIGHT;
    height + PADDING
}

fn render_panel(
    canvas: &mut Canvas<Window>,
    model: &PanelModel,
    x: i32,
    y: i32,
    width: u32,
) -> Result<i32, String> {
    let height = panel_height(model);

    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(PANEL_BG);
    canvas.fill_rect(Rect::new(x, y, width, height as u32))?;
    canvas.set_draw_color(PANEL_BORDER);
    canvas.draw_rect(Rect::new(x, y, width, height as u32))?;
    canvas.set_blend_mode(BlendMode::None);

    let mut cursor = y + PADDING;
    draw_text(canvas, &model.title, x + PADDING, cursor, TITLE_COLOR, TITLE_SCALE)?;
    cursor += TITLE_HEIGHT;

    let inner_width = width as i32 - 2 * PADDING;
    for bar in &model.bars {
        if !bar.label.is_empty() {
            draw_text(
                canvas,
                &bar.label,
                x + PADDING,
                cursor,
                Color::RGB(226, 232, 240),
                BODY_SCALE,
            )?;
            cursor += LINE_HEIGHT;
        }

        canvas.set_draw_color(BAR_BG);
        canvas.fill_rect(Rect::new(x + PADDING, cursor, inner_width as u32, BAR_HEIGHT as u32))?;

        let fill = (bar.fraction.clamp(0.0, 1.0) * inner_width as f32) as u32;
        if fill > 0 {
            let (r, g, b) = bar.color;
            canvas.set_draw_color(Color::RGB(r, g, b));
            canvas.fill_rect(Rect::new(x + PADDING, cursor, fill, BAR_HEIGHT as u32))?;
        }
        cursor += BAR_HEIGHT + 5;
    }

    for line in &model.lines {
        let (r, g, b) = line.color;
        draw_text(canvas, &line.text, x + PADDING, cursor, Color::RGB(r, g, b), BODY_SCALE)?;
        cursor += LINE_HEIGHT;
    }

    Ok(height)
}

/// Draws the three corner panels, the optional inventory overlay, and the
/// notification stack
pub fn render_hud(
    canvas: &mut Canvas<Window>,
    panels: &PanelSet,
    notifications: &NotificationLog,
    view_width: u32,
    view_height: u32,
) -> Result<(), String> {
    render_panel(canvas, panels.stats.model(), 10, 10, PANEL_WIDTH)?;

    let right_x = view_width as i32 - PANEL_WIDTH as i32 - 10;
    let quest_height = render_panel(canvas, panels.quest.model(), right_x, 10, PANEL_WIDTH)?;
    render_panel(
        canvas,
        panels.factions.model(),
        right_x,
        10 + quest_height + 10,
        PANEL_WIDTH,
    )?;

    if panels.inventory_open {
        let model = panels.inventory.model();
        let x = (view_width as i32 - INVENTORY_WIDTH as i32) / 2;
        let y = (view_height as i32 - panel_height(model)) / 2;
        render_panel(canvas, model, x, y, INVENTORY_WIDTH)?;
    }

    render_notifications(canvas, notifications, view_width)?;

    Ok(())
}

fn render_notifications(
    canvas: &mut Canvas<Window>,
    notifications: &NotificationLog,
    view_width: u32,
) -> Result<(), String> {
    canvas.set_blend_mode(BlendMode::Blend);

    for (i, notice) in notifications.entries().enumerate() {
        let text = notice.text.to_uppercase();
        let width = text_width(&text, BODY_SCALE) + 16;
        let x = (view_width as i32 - width as i32) / 2;
        let y = 10 + i as i32 * 24;
        let alpha = (notice.opacity() * 255.0) as u8;
        let (r, g, b) = notice.kind.color();

        canvas.set_draw_color(Color::RGBA(15, 20, 30, alpha.min(205)));
        canvas.fill_rect(Rect::new(x, y, width, 19))?;
        canvas.set_draw_color(Color::RGBA(r, g, b, alpha));
        canvas.draw_rect(Rect::new(x, y, width, 19))?;
        draw_text(canvas, &text, x + 8, y + 6, Color::RGBA(r, g, b, alpha), BODY_SCALE)?;
    }

    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}
