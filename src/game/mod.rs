//! Platform-independent simulation: snake, apple, score and the rules that
//! move them. Nothing in here touches the DOM, so it runs under plain
//! `cargo test`.

use std::collections::VecDeque;

use rand::Rng;

pub mod best;
pub mod grid;
pub mod input;
pub mod motion;
pub mod scheduler;
pub mod session;

pub use best::{BestScore, MemoryStore, ScoreStore};
pub use grid::{Cell, Direction};
pub use input::{InputController, Signal};
pub use motion::Advance;
pub use scheduler::{FrameDecision, FrameScheduler};
pub use session::Session;

/// Result of one simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No heading yet; nothing moved.
    Idle,
    Moved,
    Ate,
    /// This tick ended the round.
    Crashed,
    /// Round already over; tick ignored.
    Over,
}

/// The whole mutable game world. Reset in place on restart, never rebuilt.
#[derive(Debug)]
pub struct GameState {
    tile_count: i32,
    start: Cell,
    snake: VecDeque<Cell>,
    previous: VecDeque<Cell>,
    direction: Direction,
    apple: Cell,
    score: u32,
    game_over: bool,
    input: InputController,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(tile_count: i32, start: Cell, rng: &mut R) -> Self {
        let tile_count = tile_count.max(1);
        let mut state = Self {
            tile_count,
            start,
            snake: VecDeque::new(),
            previous: VecDeque::new(),
            direction: Direction::Idle,
            apple: Cell::default(),
            score: 0,
            game_over: false,
            input: InputController::new(),
        };
        state.restart(rng);
        state
    }

    /// Back to a length-1 idle snake on the start cell with a fresh apple.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let start = self.start.clamped(self.tile_count);
        self.snake.clear();
        self.snake.push_back(start);
        self.previous = self.snake.clone();
        self.direction = Direction::Idle;
        self.score = 0;
        self.game_over = false;
        self.input.clear();
        self.apple = motion::sample_apple(rng, self.tile_count);
    }

    /// Route an input signal into the pending intent.
    pub fn signal(&mut self, signal: Signal) {
        self.input.signal(signal, self.direction, self.game_over);
    }

    pub fn take_restart_request(&mut self) -> bool {
        self.input.take_restart()
    }

    /// Change heading immediately, subject to the no-reversal rule.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.direction.accepts_turn(dir) {
            self.direction = dir;
            true
        } else {
            false
        }
    }

    /// One discrete step: commit the pending turn, snapshot the body for
    /// interpolation, move, eat, then check for collisions.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        if self.game_over {
            return StepOutcome::Over;
        }
        if let Some(dir) = self.input.take_turn() {
            self.steer(dir);
        }
        self.previous.clone_from(&self.snake);

        let outcome = match motion::advance(&mut self.snake, self.direction, self.apple) {
            Advance::Still => return StepOutcome::Idle,
            Advance::Moved => StepOutcome::Moved,
            Advance::Grew => {
                self.score += 1;
                self.apple = motion::sample_apple(rng, self.tile_count);
                StepOutcome::Ate
            }
        };

        if motion::collides(&self.snake, self.tile_count) {
            self.game_over = true;
            return StepOutcome::Crashed;
        }
        outcome
    }

    /// Adopt a new board size and pull every live position back onto it.
    pub fn resize(&mut self, tile_count: i32) {
        let tile_count = tile_count.max(1);
        if tile_count == self.tile_count {
            return;
        }
        self.tile_count = tile_count;
        for c in self.snake.iter_mut().chain(self.previous.iter_mut()) {
            *c = c.clamped(tile_count);
        }
        self.apple = self.apple.clamped(tile_count);
    }

    pub fn tile_count(&self) -> i32 {
        self.tile_count
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn previous(&self) -> &VecDeque<Cell> {
        &self.previous
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Place the apple by hand. Used by scripted scenarios and tests.
    pub fn set_apple(&mut self, cell: Cell) {
        self.apple = cell.clamped(self.tile_count);
    }

    /// Replace the body wholesale (head first). Used by scripted scenarios and tests.
    pub fn set_snake<I: IntoIterator<Item = Cell>>(&mut self, cells: I) {
        self.snake = cells.into_iter().collect();
        if self.snake.is_empty() {
            self.snake.push_back(self.start.clamped(self.tile_count));
        }
        self.previous = self.snake.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn fresh(tile_count: i32) -> (GameState, StdRng) {
        let mut r = rng();
        let s = GameState::new(tile_count, Cell::new(10, 10), &mut r);
        (s, r)
    }

    #[test]
    fn initial_state() {
        let (s, _) = fresh(20);
        assert_eq!(s.snake().iter().copied().collect::<Vec<_>>(), vec![Cell::new(10, 10)]);
        assert_eq!(s.direction(), Direction::Idle);
        assert_eq!(s.score(), 0);
        assert!(!s.is_game_over());
        assert!(s.apple().in_bounds(20));
    }

    #[test]
    fn start_cell_is_clamped_on_small_boards() {
        let (s, _) = fresh(5);
        assert_eq!(s.head(), Some(Cell::new(4, 4)));
        let (s, _) = fresh(1);
        assert_eq!(s.head(), Some(Cell::new(0, 0)));
        assert_eq!(s.apple(), Cell::new(0, 0));
    }

    #[test]
    fn idle_ticks_change_nothing() {
        let (mut s, mut r) = fresh(20);
        s.set_apple(Cell::new(10, 10));
        for _ in 0..5 {
            assert_eq!(s.step(&mut r), StepOutcome::Idle);
        }
        assert_eq!(s.score(), 0);
        assert_eq!(s.snake().len(), 1);
    }

    #[test]
    fn pending_turn_commits_on_tick() {
        let (mut s, mut r) = fresh(20);
        s.set_apple(Cell::new(0, 0));
        s.signal(Signal::Turn(Direction::Up));
        assert_eq!(s.direction(), Direction::Idle);
        assert_eq!(s.step(&mut r), StepOutcome::Moved);
        assert_eq!(s.direction(), Direction::Up);
        assert_eq!(s.head(), Some(Cell::new(10, 9)));
        assert_eq!(s.previous().front(), Some(&Cell::new(10, 10)));
    }

    #[test]
    fn eating_grows_and_scores() {
        let (mut s, mut r) = fresh(20);
        s.set_apple(Cell::new(11, 10));
        s.steer(Direction::Right);
        assert_eq!(s.step(&mut r), StepOutcome::Ate);
        assert_eq!(s.score(), 1);
        assert_eq!(
            s.snake().iter().copied().collect::<Vec<_>>(),
            vec![Cell::new(11, 10), Cell::new(10, 10)]
        );
        assert!(s.apple().in_bounds(20));
    }

    #[test]
    fn crash_freezes_round() {
        let (mut s, mut r) = fresh(20);
        s.set_snake([Cell::new(0, 0)]);
        s.set_apple(Cell::new(5, 5));
        s.steer(Direction::Left);
        assert_eq!(s.step(&mut r), StepOutcome::Crashed);
        assert!(s.is_game_over());
        assert_eq!(s.step(&mut r), StepOutcome::Over);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn self_bite_ends_round() {
        let (mut s, mut r) = fresh(20);
        // U-shape whose head turns back into the body
        s.set_snake([
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
            Cell::new(4, 6),
        ]);
        s.set_apple(Cell::new(0, 0));
        s.steer(Direction::Down);
        assert_eq!(s.step(&mut r), StepOutcome::Crashed);
    }

    #[test]
    fn input_after_game_over_restarts() {
        let (mut s, mut r) = fresh(20);
        s.set_snake([Cell::new(19, 3)]);
        s.steer(Direction::Right);
        s.step(&mut r);
        assert!(s.is_game_over());
        s.signal(Signal::Any);
        assert!(s.take_restart_request());
        s.restart(&mut r);
        assert!(!s.is_game_over());
        assert_eq!(s.head(), Some(Cell::new(10, 10)));
    }

    #[test]
    fn resize_clamps_everything() {
        let (mut s, _) = fresh(20);
        s.set_snake([Cell::new(15, 12), Cell::new(14, 12)]);
        s.set_apple(Cell::new(18, 2));
        s.resize(10);
        assert_eq!(s.tile_count(), 10);
        assert!(s.snake().iter().all(|c| c.in_bounds(10)));
        assert!(s.previous().iter().all(|c| c.in_bounds(10)));
        assert_eq!(s.apple(), Cell::new(9, 2));
        s.resize(0);
        assert_eq!(s.tile_count(), 1);
        assert_eq!(s.head(), Some(Cell::new(0, 0)));
    }
}
