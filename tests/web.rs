// Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use canvas_snake::game::ScoreStore;
use canvas_snake::web::LocalStorageStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "canvas-snake.test.best";

fn storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

#[wasm_bindgen_test]
fn missing_key_reads_as_zero() {
    storage().remove_item(KEY).unwrap();
    assert_eq!(LocalStorageStore::open(KEY).load(), 0);
}

#[wasm_bindgen_test]
fn garbage_reads_as_zero() {
    storage().set_item(KEY, "not a number").unwrap();
    assert_eq!(LocalStorageStore::open(KEY).load(), 0);
}

#[wasm_bindgen_test]
fn saved_best_is_read_back() {
    let mut store = LocalStorageStore::open(KEY);
    store.save(42);
    assert_eq!(storage().get_item(KEY).unwrap().as_deref(), Some("42"));
    assert_eq!(LocalStorageStore::open(KEY).load(), 42);
    storage().remove_item(KEY).unwrap();
}

#[wasm_bindgen_test]
fn start_game_creates_canvas_and_labels() {
    canvas_snake::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("gameCanvas").is_some());
    assert_eq!(
        doc.get_element_by_id("score").unwrap().text_content().as_deref(),
        Some("Score: 0")
    );
}
