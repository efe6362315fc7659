//! Best-score bookkeeping over a pluggable persistence backend.

/// Durable storage for a single best-score value.
pub trait ScoreStore {
    /// Stored value, or 0 when absent or unreadable.
    fn load(&self) -> u32;
    fn save(&mut self, best: u32);
}

/// Parse a persisted value; anything that is not a non-negative integer is 0.
pub fn parse_best(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Volatile store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub value: Option<u32>,
    pub writes: usize,
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, best: u32) {
        self.value = Some(best);
        self.writes += 1;
    }
}

/// Best score for the lifetime of the page, read once from `store` and written
/// back only when beaten.
pub struct BestScore<S: ScoreStore> {
    best: u32,
    store: S,
}

impl<S: ScoreStore> BestScore<S> {
    pub fn new(store: S) -> Self {
        let best = store.load();
        Self { best, store }
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    /// Offer the score of a finished round. Returns true (and persists) only if
    /// it beats the current best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.store.save(score);
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
