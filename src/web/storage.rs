//! `localStorage` backend for the best score.

use web_sys::Storage;

use crate::cwarn;
use crate::game::best::{ScoreStore, parse_best};

pub struct LocalStorageStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageStore {
    /// Storage can be missing (privacy mode, sandboxed iframe); the store then
    /// behaves as empty and drops writes.
    pub fn open(key: &str) -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            cwarn!("localStorage unavailable; best score will not persist");
        }
        Self { storage, key: key.to_string() }
    }
}

impl ScoreStore for LocalStorageStore {
    fn load(&self) -> u32 {
        let raw = self.storage.as_ref().and_then(|s| s.get_item(&self.key).ok().flatten());
        parse_best(raw.as_deref())
    }

    fn save(&mut self, best: u32) {
        if let Some(s) = &self.storage {
            if s.set_item(&self.key, &best.to_string()).is_err() {
                cwarn!("failed to persist best score {best}");
            }
        }
    }
}
