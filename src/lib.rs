//! Canvas Snake core crate.
//!
//! The simulation (`game`) is plain Rust: a fixed-tick snake on an integer grid,
//! a frame scheduler that decouples ticks from display refresh, and a
//! latest-intent input cell. The `web` module binds it to a `<canvas>`, DOM
//! events, `requestAnimationFrame` and `localStorage`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
pub mod log;
pub mod web;

pub use config::GameConfig;
pub use error::HostError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Start the game with default settings on `#gameCanvas` (created if missing).
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default()).map_err(JsValue::from)
}

/// Start with settings given as JSON; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(HostError::from)?;
    web::start(config).map_err(JsValue::from)
}
