/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use pong::entities::GameState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_SCORE: Color = Color::Yellow;
const C_PLAYER_PADDLE: Color = Color::Cyan;
const C_COMPUTER_PADDLE: Color = Color::Red;
const C_BALL: Color = Color::White;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: border, score, both paddles, ball.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, state.width, state.height)?;
    draw_score(out, state)?;

    let p = &state.player_paddle;
    draw_block(out, p.x, p.y, p.width, p.height, C_PLAYER_PADDLE)?;
    let c = &state.computer_paddle;
    draw_block(out, c.x, c.y, c.width, c.height, C_COMPUTER_PADDLE)?;
    let b = &state.ball;
    draw_block(out, b.x, b.y, b.width, b.height, C_BALL)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: i32, height: i32) -> std::io::Result<()> {
    let w = width as usize;
    let h = height as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(1)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 1..h.saturating_sub(1) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo((width as u16).saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Score ─────────────────────────────────────────────────────────────────────

/// Player score near the left wall, computer score near the right wall.
fn draw_score<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(cursor::MoveTo(2, 2))?;
    out.queue(Print(state.player_score))?;
    out.queue(cursor::MoveTo((state.width as u16).saturating_sub(3), 2))?;
    out.queue(Print(state.computer_score))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Fill a width×height cell block with `█`.
fn draw_block<W: Write>(
    out: &mut W,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    for i in 0..width {
        for j in 0..height {
            out.queue(cursor::MoveTo((x + i) as u16, (y + j) as u16))?;
            out.queue(Print("█"))?;
        }
    }
    Ok(())
}
