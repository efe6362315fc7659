//! Motion / collision engine: one grid step per tick.

use std::collections::VecDeque;

use rand::Rng;

use super::grid::{Cell, Direction};

/// What a single `advance` did to the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Zero heading, body untouched.
    Still,
    /// Head moved, tail dropped, length unchanged.
    Moved,
    /// Head landed on the apple, tail kept.
    Grew,
}

/// Move the snake one cell along `direction`. The head is prepended; the tail
/// is popped unless the new head sits on `apple`.
pub fn advance(snake: &mut VecDeque<Cell>, direction: Direction, apple: Cell) -> Advance {
    if direction == Direction::Idle {
        return Advance::Still;
    }
    let Some(&head) = snake.front() else {
        return Advance::Still;
    };
    let new_head = head.offset(direction);
    snake.push_front(new_head);
    if new_head == apple {
        Advance::Grew
    } else {
        snake.pop_back();
        Advance::Moved
    }
}

/// Head-only check: off the board on either axis, or on top of another segment.
pub fn collides(snake: &VecDeque<Cell>, tile_count: i32) -> bool {
    let Some(&head) = snake.front() else {
        return false;
    };
    !head.in_bounds(tile_count) || snake.iter().skip(1).any(|&c| c == head)
}

/// Uniform pick over the whole board. Occupied cells are not excluded.
pub fn sample_apple<R: Rng + ?Sized>(rng: &mut R, tile_count: i32) -> Cell {
    let n = tile_count.max(1);
    Cell::new(rng.gen_range(0..n), rng.gen_range(0..n))
}
