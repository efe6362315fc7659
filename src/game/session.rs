//! A game plus its best-score record: the round lifecycle the host drives.

use rand::Rng;

use super::best::{BestScore, ScoreStore};
use super::{GameState, StepOutcome};

pub struct Session<S: ScoreStore> {
    state: GameState,
    best: BestScore<S>,
    new_record: bool,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(state: GameState, best: BestScore<S>) -> Self {
        Self { state, best, new_record: false }
    }

    /// Apply a restart requested by input since the last frame. Returns true if
    /// one was applied.
    pub fn apply_restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.state.take_restart_request() {
            return false;
        }
        self.state.restart(rng);
        self.new_record = false;
        true
    }

    /// One simulation tick. The round's score is offered to the best-score
    /// record exactly once, on the tick that ends it.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        let outcome = self.state.step(rng);
        if outcome == StepOutcome::Crashed {
            self.new_record = self.best.submit(self.state.score());
        }
        outcome
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn best(&self) -> &BestScore<S> {
        &self.best
    }

    /// Whether the round that just ended set a new best.
    pub fn new_record(&self) -> bool {
        self.new_record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, MemoryStore, Signal};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(stored: u32) -> (Session<MemoryStore>, StdRng) {
        let mut rng = StdRng::seed_from_u64(99);
        let state = GameState::new(20, Cell::new(10, 10), &mut rng);
        let best = BestScore::new(MemoryStore { value: Some(stored), writes: 0 });
        (Session::new(state, best), rng)
    }

    /// Eat `apples` apples heading right from the start cell, then run into the
    /// right wall. Returns the number of ticks that reported a crash.
    fn play_round(s: &mut Session<MemoryStore>, rng: &mut StdRng, apples: u32) -> usize {
        s.state_mut().signal(Signal::Turn(Direction::Right));
        for _ in 0..apples {
            let next = s.state().head().map(|h| h.offset(Direction::Right));
            if let Some(cell) = next {
                s.state_mut().set_apple(cell);
            }
            assert_eq!(s.tick(rng), StepOutcome::Ate);
        }
        s.state_mut().set_apple(Cell::new(0, 0));
        let mut crashes = 0;
        for _ in 0..25 {
            if s.tick(rng) == StepOutcome::Crashed {
                crashes += 1;
            }
        }
        crashes
    }

    #[test]
    fn beating_the_best_persists_once() {
        let (mut s, mut rng) = session(5);
        assert_eq!(play_round(&mut s, &mut rng, 7), 1);
        assert!(s.state().is_game_over());
        assert_eq!(s.state().score(), 7);
        assert!(s.new_record());
        assert_eq!(s.best().get(), 7);
        assert_eq!(s.best().store().value, Some(7));
        assert_eq!(s.best().store().writes, 1);
    }

    #[test]
    fn lower_score_keeps_the_best() {
        let (mut s, mut rng) = session(5);
        play_round(&mut s, &mut rng, 3);
        assert!(s.state().is_game_over());
        assert!(!s.new_record());
        assert_eq!(s.best().get(), 5);
        assert_eq!(s.best().store().writes, 0);
    }

    #[test]
    fn restart_clears_the_record_flag() {
        let (mut s, mut rng) = session(0);
        play_round(&mut s, &mut rng, 2);
        assert!(s.new_record());

        assert!(!s.apply_restart(&mut rng));
        s.state_mut().signal(Signal::Any);
        assert!(s.apply_restart(&mut rng));
        assert!(!s.new_record());
        assert!(!s.state().is_game_over());
        assert_eq!(s.state().score(), 0);

        // a poorer second round leaves the earlier record in place
        play_round(&mut s, &mut rng, 1);
        assert!(!s.new_record());
        assert_eq!(s.best().get(), 2);
        assert_eq!(s.best().store().writes, 1);
    }
}
