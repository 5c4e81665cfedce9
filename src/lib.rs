// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // カード、スタック、盤面などのデータ
pub mod config;     // レイアウトの定数と設定
pub mod error;
pub mod logic;      // ルールとデッキ
pub mod system;
pub mod systems;    // 盤面を書き換える処理
pub mod app;        // JS とのつなぎ目
pub mod logger;

// よく使う型はクレートのルートからも使えるようにしておく
pub use app::game_app::GameApp;
pub use app::game_controller::GameController;
pub use app::renderer::{RenderEvent, RenderSink};
pub use components::{Card, GameState, Rank, StackType, Suit};
pub use error::GameError;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    // ロガーはページで 1 回だけ登録できる。2 回目のエラーは気にしない
    let _ = logger::init();
    log::info!("Panic hook and console logger set!");
}
