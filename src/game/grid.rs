//! Grid coordinates and headings.

/// A grid cell addressed by (column, row). Signed so a head that leaves the
/// board can still be represented for the collision check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// True when both axes lie inside `[0, tile_count - 1]`.
    pub fn in_bounds(self, tile_count: i32) -> bool {
        (0..tile_count).contains(&self.x) && (0..tile_count).contains(&self.y)
    }

    pub fn clamped(self, tile_count: i32) -> Self {
        let max = tile_count.max(1) - 1;
        Self { x: self.x.clamp(0, max), y: self.y.clamp(0, max) }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake. `Idle` is the zero delta used before the first input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Idle,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Idle => (0, 0),
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// No 180° turns: a vertical request passes only while the current vertical
    /// component is zero, and symmetrically for horizontal. `Idle` is never a
    /// valid request.
    pub fn accepts_turn(self, requested: Direction) -> bool {
        let (dx, dy) = self.delta();
        if requested.is_vertical() {
            dy == 0
        } else if requested.is_horizontal() {
            dx == 0
        } else {
            false
        }
    }
}

/// Number of cells along one side of the board; never less than one.
pub fn tile_count(canvas_side: u32, cell_size: u32) -> i32 {
    if cell_size == 0 {
        return 1;
    }
    ((canvas_side / cell_size) as i32).max(1)
}
