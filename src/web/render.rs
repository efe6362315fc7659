//! Canvas drawing. Read-only over the simulation.

use web_sys::CanvasRenderingContext2d;

use crate::game::GameState;
use crate::game::scheduler::segment_positions;

const BACKGROUND: &str = "#111111";
const SNAKE_HEAD: &str = "#7ddc1f";
const SNAKE_BODY: &str = "#3fa535";
const APPLE: &str = "#e53935";
const TEXT: &str = "#ffffff";
const RECORD: &str = "#ffd166";
// gap between neighbouring segments
const INSET: f64 = 1.0;

/// Everything the renderer needs besides the simulation itself.
pub struct Frame<'a> {
    pub ctx: &'a CanvasRenderingContext2d,
    pub side: f64,
    pub cell: f64,
    pub interpolation: f64,
    pub best: u32,
    pub new_record: bool,
}

pub fn draw(frame: &Frame<'_>, state: &GameState) {
    if state.is_game_over() {
        draw_game_over(frame, state);
    } else {
        draw_playfield(frame, state);
    }
}

fn draw_playfield(frame: &Frame<'_>, state: &GameState) {
    let ctx = frame.ctx;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, frame.side, frame.side);

    let apple = state.apple();
    ctx.set_fill_style_str(APPLE);
    fill_cell(frame, apple.x as f64, apple.y as f64);

    let positions = segment_positions(state.previous(), state.snake(), frame.interpolation);
    // tail first so the head is drawn on top where segments overlap mid-slide
    for (i, &(x, y)) in positions.iter().enumerate().rev() {
        ctx.set_fill_style_str(if i == 0 { SNAKE_HEAD } else { SNAKE_BODY });
        fill_cell(frame, x, y);
    }
}

fn fill_cell(frame: &Frame<'_>, x: f64, y: f64) {
    let size = (frame.cell - 2.0 * INSET).max(1.0);
    frame
        .ctx
        .fill_rect(x * frame.cell + INSET, y * frame.cell + INSET, size, size);
}

fn draw_game_over(frame: &Frame<'_>, state: &GameState) {
    let ctx = frame.ctx;
    ctx.clear_rect(0.0, 0.0, frame.side, frame.side);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, frame.side, frame.side);

    let cx = frame.side / 2.0;
    let cy = frame.side / 2.0;
    // keep text readable on tiny boards
    let big = (frame.side / 12.0).clamp(12.0, 32.0);
    let small = (big * 0.6).max(10.0);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(TEXT);
    ctx.set_font(&format!("{big}px 'Pixelify Sans', monospace"));
    ctx.fill_text("Game over", cx, cy - big).ok();

    ctx.set_font(&format!("{small}px 'Pixelify Sans', monospace"));
    if frame.new_record {
        ctx.set_fill_style_str(RECORD);
        ctx.fill_text(&format!("New record: {}!", state.score()), cx, cy).ok();
    } else {
        ctx.fill_text(&format!("Score: {}   Best: {}", state.score(), frame.best), cx, cy)
            .ok();
    }
    ctx.set_fill_style_str(TEXT);
    ctx.fill_text("Press any key or tap to restart", cx, cy + big).ok();
}
