//! Rendering layer — all terminal output lives here.
//!
//! `TerminalCanvas` collects one frame of draw requests from the core and
//! then writes them out in a single pass. The playfield is shown top-down:
//! x runs left to right, depth runs bottom (near) to top (far).

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;

use beam_shooter::entities::Transform;
use beam_shooter::host::{DrawSink, Visual, SCREEN_HEIGHT, SCREEN_WIDTH};
use beam_shooter::Playfield;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_STAGE: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::White;
const C_BEAM: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_ENEMY_DYING: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_TITLE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Dying enemies are lifted off the ground by their death jump.
const AIRBORNE_Y: f32 = 0.5;

struct Glyph {
    col: u16,
    row: u16,
    text: String,
    color: Color,
}

pub struct TerminalCanvas {
    width: u16,
    height: u16,
    field: Playfield,
    glyphs: Vec<Glyph>,
    border: bool,
}

impl TerminalCanvas {
    pub fn new(width: u16, height: u16, field: Playfield) -> Self {
        Self {
            width,
            height,
            field,
            glyphs: Vec::new(),
            border: false,
        }
    }

    /// Write the collected frame, ringing the bell if a sound fired.
    pub fn present<W: Write>(&self, out: &mut W, bell: bool) -> std::io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        if self.border {
            self.draw_border(out)?;
        }
        for glyph in &self.glyphs {
            if glyph.col >= self.width || glyph.row >= self.height {
                continue;
            }
            out.queue(cursor::MoveTo(glyph.col, glyph.row))?;
            out.queue(style::SetForegroundColor(glyph.color))?;
            out.queue(Print(&glyph.text))?;
        }
        self.draw_controls_hint(out)?;

        if bell {
            out.queue(Print("\x07"))?;
        }

        // Park cursor in a harmless spot and flush
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.height.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }

    // ── Projection ────────────────────────────────────────────────────────────

    /// Playfield interior: columns 1..width-1, rows 2..height-2.
    fn project(&self, x: f32, z: f32) -> Option<(u16, u16)> {
        if !self.field.contains(x, z) {
            return None;
        }
        let inner_w = self.width.saturating_sub(3) as f32;
        let inner_h = self.height.saturating_sub(5) as f32;
        let fx = (x - self.field.min_x) / (self.field.max_x - self.field.min_x);
        let fz = (z - self.field.near_z) / (self.field.far_z - self.field.near_z);
        let col = 1 + (fx * inner_w).round() as u16;
        let row = self.height.saturating_sub(3) - (fz * inner_h).round() as u16;
        Some((col, row))
    }

    fn screen_to_cell(&self, position: Vec2) -> (u16, u16) {
        let col = position.x / SCREEN_WIDTH * self.width as f32;
        let row = position.y / SCREEN_HEIGHT * self.height as f32;
        (col as u16, row as u16)
    }

    fn push(&mut self, col: u16, row: u16, text: impl Into<String>, color: Color) {
        self.glyphs.push(Glyph {
            col,
            row,
            text: text.into(),
            color,
        });
    }

    fn push_centered(&mut self, row: u16, text: &str, color: Color) {
        let col = (self.width / 2).saturating_sub(text.chars().count() as u16 / 2);
        self.push(col, row, text, color);
    }

    // ── Border & hint ─────────────────────────────────────────────────────────

    fn draw_border<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let w = self.width as usize;
        let h = self.height;

        out.queue(style::SetForegroundColor(C_BORDER))?;

        // Row 1 — far edge
        out.queue(cursor::MoveTo(0, 1))?;
        out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

        // Row h-2 — near edge
        out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
        out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

        for row in 2..h.saturating_sub(2) {
            out.queue(cursor::MoveTo(0, row))?;
            out.queue(Print("│"))?;
            out.queue(cursor::MoveTo(self.width.saturating_sub(1), row))?;
            out.queue(Print("│"))?;
        }
        Ok(())
    }

    fn draw_controls_hint<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(cursor::MoveTo(1, self.height.saturating_sub(1)))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print("← → ↑ ↓ / WASD : Move   SPACE : Shoot   ENTER : Start   Q : Quit"))?;
        Ok(())
    }
}

impl DrawSink for TerminalCanvas {
    fn draw_model(&mut self, transform: &Transform, visual: Visual) {
        let t = transform.translation;
        match visual {
            // Stage rows are shown as tick marks just inside both walls.
            Visual::Stage => {
                if let Some((_, row)) = self.project(self.field.min_x, t.z) {
                    self.push(1, row, "·", C_STAGE);
                    self.push(self.width.saturating_sub(2), row, "·", C_STAGE);
                }
            }
            Visual::Player => {
                if let Some((col, row)) = self.project(t.x, t.z) {
                    self.push(col, row, "▲", C_PLAYER);
                }
            }
            Visual::Beam => {
                if let Some((col, row)) = self.project(t.x, t.z) {
                    self.push(col, row, "║", C_BEAM);
                }
            }
            Visual::Enemy => {
                let x = t.x.clamp(self.field.min_x, self.field.max_x);
                if let Some((col, row)) = self.project(x, t.z) {
                    if t.y > AIRBORNE_Y {
                        self.push(col, row, "✶", C_ENEMY_DYING);
                    } else {
                        self.push(col, row, "▼", C_ENEMY);
                    }
                }
            }
            other => log::trace!("no model for {:?}", other),
        }
    }

    fn draw_sprite(&mut self, visual: Visual, position: Vec2) {
        let (col, row) = self.screen_to_cell(position);
        let mid = self.height / 2;
        match visual {
            Visual::Background => self.border = true,
            Visual::Title => self.push_centered(mid.saturating_sub(3), "★  BEAM  SHOOTER  ★", C_TITLE),
            Visual::GameClear => self.push_centered(mid.saturating_sub(3), "★  GAME  CLEAR  ★", C_HUD_SCORE),
            Visual::GameOver => self.push_centered(mid.saturating_sub(3), "GAME  OVER", C_HUD_LIVES),
            Visual::EnterPrompt => self.push_centered(row, "PRESS ENTER", Color::White),
            Visual::ScoreLabel => self.push(col, 0, "Score:", C_HUD_SCORE),
            Visual::Digit(d) => {
                let text = char::from_digit(u32::from(d), 10).unwrap_or('?');
                self.push(col, row.min(self.height.saturating_sub(1)), text.to_string(), C_HUD_SCORE);
            }
            Visual::Life => self.push(col, 0, "♥", C_HUD_LIVES),
            other => log::trace!("no sprite for {:?}", other),
        }
    }
}
