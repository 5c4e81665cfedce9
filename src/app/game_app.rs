// src/app/game_app.rs

// --- 必要なものをインポート ---
use wasm_bindgen::prelude::*;
use js_sys::{Error, Function};
use log::{error, info, warn};
use std::fmt::Display;

use crate::app::event_handler::{self, InputEvent};
use crate::app::game_controller::GameController;
use crate::app::renderer::{RenderEvent, RenderSink};
use crate::components::card::Card;
use crate::config::GameConfig;
use crate::error::GameError;

/// エラーを JS の Error に変換する。JS 側では普通に throw されたように見えるよ。
fn to_js_error(e: impl Display) -> JsValue {
    JsValue::from(Error::new(&e.to_string()))
}

/// RenderEvent を JSON 文字列にして JS の関数に渡す送り先。
///
/// コールバックの中から GameApp のメソッドを同期的に呼び返さないこと！
/// (GameApp は &mut で借りられている最中なので、wasm-bindgen が panic する)
struct JsCallbackSink {
    callback: Function,
}

impl RenderSink for JsCallbackSink {
    fn render(&mut self, event: &RenderEvent) {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize render event {:?}: {}", event, e);
                return;
            }
        };
        if let Err(e) = self.callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
            error!("Render callback threw: {:?}", e);
        }
    }
}

// --- JS から使うゲーム本体 ---
#[wasm_bindgen]
pub struct GameApp {
    controller: GameController,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: 初期化中...");
        Self { controller: GameController::new(GameConfig::default()) }
    }

    /// 毎回同じ配り方になる GameApp を作る (デバッグ用)。
    pub fn with_seed(seed: u64) -> GameApp {
        info!("GameApp: seed = {}", seed);
        Self { controller: GameController::new(GameConfig::with_seed(seed)) }
    }

    /// 描画コールバックを登録する。RenderEvent の JSON 文字列が 1 つずつ渡されるよ。
    pub fn set_render_callback(&mut self, callback: Function) {
        self.controller.set_render_sink(Box::new(JsCallbackSink { callback }));
    }

    pub fn set_game_board(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.controller.set_game_board(width, height).map_err(to_js_error)
    }

    pub fn resize_board(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.controller.resize_board(width, height).map_err(to_js_error)
    }

    /// ゲームを始める。`set_game_board` より前に呼ぶと Error が throw される。
    pub fn start_game(&mut self) -> Result<(), JsValue> {
        self.controller.start_game().map_err(to_js_error)
    }

    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.controller.restart().map_err(to_js_error)
    }

    /// 山札をクリックした。1 枚めくるか、捨て札を戻す。
    pub fn click_stock(&mut self) -> Result<(), JsValue> {
        self.controller.click_stock().map(|_| ()).map_err(to_js_error)
    }

    /// カードを掴む。掴めなかったら false (ドラッグ中だった、動かせないカードだった、など)。
    pub fn drag_start(&mut self, suit: u8, rank: u8, x: f64, y: f64) -> bool {
        let Some(card) = Card::from_indices(suit, rank) else {
            warn!("drag_start: unknown card suit={} rank={}", suit, rank);
            return false;
        };
        match self.controller.begin_drag(card, x, y) {
            Ok(_) => true,
            Err(e) => {
                info!("drag_start rejected: {}", e);
                false
            }
        }
    }

    pub fn drag_move(&mut self, x: f64, y: f64) {
        self.controller.update_drag(x, y);
    }

    /// マウスを離した。移動が確定したら true、元に戻ったら false。
    pub fn drag_end(&mut self, x: f64, y: f64) -> bool {
        self.controller.end_drag(x, y).unwrap_or_else(|e| {
            error!("drag_end failed: {}", e);
            false
        })
    }

    /// ダブルクリックされたカードを組札に自動で移動する。移動したら true。
    pub fn auto_move(&mut self, suit: u8, rank: u8) -> bool {
        let Some(card) = Card::from_indices(suit, rank) else {
            return false;
        };
        self.controller.auto_move(card).unwrap_or_else(|e| {
            info!("auto_move rejected: {}", e);
            false
        })
    }

    /// InputEvent の JSON を受け取って処理する。
    pub fn handle_input(&mut self, event_json: &str) -> Result<bool, JsValue> {
        let event: InputEvent = serde_json::from_str(event_json).map_err(to_js_error)?;
        event_handler::dispatch(&mut self.controller, event).map_err(to_js_error)
    }

    /// 今の盤面を JSON 文字列で返す。ゲームが始まっていなければ Error。
    pub fn get_state_json(&self) -> Result<String, JsValue> {
        let state = self.controller.state().ok_or_else(|| to_js_error(GameError::GameNotStarted))?;
        serde_json::to_string(state).map_err(to_js_error)
    }

    /// レイアウト (カードの大きさ、各スタックの座標) を JSON 文字列で返す。
    pub fn get_layout_json(&self) -> Result<String, JsValue> {
        let snapshot = self.controller.layout_snapshot().ok_or_else(|| to_js_error(GameError::UninitializedBoard))?;
        serde_json::to_string(&snapshot).map_err(to_js_error)
    }

    pub fn is_won(&self) -> bool {
        self.controller.is_won()
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
