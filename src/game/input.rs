//! Input controller: raw signals in, one pending intent out.

use super::grid::Direction;

/// A discrete input from any source (keyboard, on-screen button, touch).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Turn(Direction),
    /// Input with no direction attached, e.g. a tap on the canvas.
    Any,
}

/// Map a `KeyboardEvent.key` value. Arrows and WASD steer, anything else is `Any`.
pub fn signal_for_key(key: &str) -> Signal {
    match key {
        "ArrowUp" | "w" | "W" => Signal::Turn(Direction::Up),
        "ArrowDown" | "s" | "S" => Signal::Turn(Direction::Down),
        "ArrowLeft" | "a" | "A" => Signal::Turn(Direction::Left),
        "ArrowRight" | "d" | "D" => Signal::Turn(Direction::Right),
        _ => Signal::Any,
    }
}

/// Latest-intent cell. Handlers write here between frames; the frame loop
/// drains it once per tick.
#[derive(Debug, Default)]
pub struct InputController {
    pending: Option<Direction>,
    restart: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signal against the heading committed at the last tick.
    /// While the round is over every signal becomes a restart request.
    pub fn signal(&mut self, signal: Signal, committed: Direction, game_over: bool) {
        if game_over {
            self.restart = true;
            return;
        }
        if let Signal::Turn(dir) = signal {
            if committed.accepts_turn(dir) {
                self.pending = Some(dir);
            }
        }
    }

    pub fn take_turn(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.restart = false;
    }
}
