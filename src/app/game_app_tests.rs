// src/app/game_app_tests.rs
// GameApp (JS から見える API) のテスト！ JsValue を使うので wasm の上でだけ動くよ。

use super::game_app::GameApp;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn start_before_board_throws() {
    let mut app = GameApp::with_seed(3);
    assert!(app.start_game().is_err());
    assert!(app.get_state_json().is_err());
    assert!(app.get_layout_json().is_err());
}

#[wasm_bindgen_test]
fn start_game_and_read_state() {
    let mut app = GameApp::with_seed(3);
    app.set_game_board(1300.0, 800.0).unwrap();
    app.start_game().unwrap();

    let state: serde_json::Value = serde_json::from_str(&app.get_state_json().unwrap()).unwrap();
    assert_eq!(state["stock"]["cards"].as_array().unwrap().len(), 24);
    assert_eq!(state["status"], "Playing");

    let layout: serde_json::Value = serde_json::from_str(&app.get_layout_json().unwrap()).unwrap();
    assert_eq!(layout["layout"]["card_width"], 100.0);
    assert!(!app.is_won());
}

#[wasm_bindgen_test]
fn stock_click_and_gesture_api() {
    let mut app = GameApp::with_seed(3);
    app.set_game_board(1300.0, 800.0).unwrap();
    app.start_game().unwrap();

    app.click_stock().unwrap();
    let state: serde_json::Value = serde_json::from_str(&app.get_state_json().unwrap()).unwrap();
    let waste_top = &state["waste"]["cards"][0]["card"];
    let suit = waste_top["suit"].as_str().unwrap();
    let suit_index = ["Club", "Diamond", "Heart", "Spade"].iter().position(|s| *s == suit).unwrap() as u8;
    let rank = waste_top["rank"].as_str().unwrap();
    let ranks = ["Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen", "King"];
    let rank_index = ranks.iter().position(|r| *r == rank).unwrap() as u8;

    // 捨て札の一番上は掴める。掴んでいる間は 2 枚目は掴めない
    assert!(app.drag_start(suit_index, rank_index, 200.0, 40.0));
    assert!(!app.drag_start(suit_index, rank_index, 200.0, 40.0));
    // ボードの外で離すと元に戻る
    assert!(!app.drag_end(-50.0, -50.0));
    // 存在しないカード
    assert!(!app.drag_start(7, 0, 0.0, 0.0));
}

#[wasm_bindgen_test]
fn handle_input_rejects_bad_json() {
    let mut app = GameApp::with_seed(3);
    app.set_game_board(1300.0, 800.0).unwrap();
    app.start_game().unwrap();
    assert!(app.handle_input("not json").is_err());
    assert_eq!(app.handle_input(r#"{"type":"StockClicked"}"#).unwrap(), true);
}
