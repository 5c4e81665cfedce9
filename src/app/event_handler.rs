// src/app/event_handler.rs
//! ユーザー入力やUIイベントに関連するロジック。
//!
//! JS 側からはメソッドを 1 つずつ呼んでもいいし、
//! InputEvent を JSON にして `handle_input` に投げてもいいよ。

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::app::game_controller::GameController;
use crate::components::card::Card;
use crate::error::GameError;

/// 描画側から届く入力イベント。座標は全部ボード基準 (px)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// カードを掴んだ。suit / rank は数字 (Club=0.., Ace=0..)
    GestureStart { suit: u8, rank: u8, x: f64, y: f64 },
    GestureMove { x: f64, y: f64 },
    GestureEnd { x: f64, y: f64 },
    StockClicked,
    /// ダブルクリック。置ける組札があればそこへ自動で移動する。
    CardDoubleClicked { suit: u8, rank: u8 },
}

/// 入力イベントをコントローラに振り分ける。
///
/// 戻り値の bool は「盤面かドラッグ状態が変わったか」。
/// ルール違反でのキャンセルは false になるだけで、エラーにはならないよ。
pub fn dispatch(controller: &mut GameController, event: InputEvent) -> Result<bool, GameError> {
    debug!("Input event: {:?}", event);
    match event {
        InputEvent::GestureStart { suit, rank, x, y } => {
            let Some(card) = card_from_indices(suit, rank) else {
                return Ok(false);
            };
            rejected_as_false(controller.begin_drag(card, x, y).map(|_| true))
        }
        InputEvent::GestureMove { x, y } => {
            controller.update_drag(x, y);
            Ok(controller.drag_state().is_dragging())
        }
        InputEvent::GestureEnd { x, y } => controller.end_drag(x, y),
        InputEvent::StockClicked => rejected_as_false(controller.click_stock().map(|_| true)),
        InputEvent::CardDoubleClicked { suit, rank } => match card_from_indices(suit, rank) {
            Some(card) => rejected_as_false(controller.auto_move(card)),
            None => Ok(false),
        },
    }
}

/// ドラッグ中だった、動かせないカードだった、みたいな「操作の却下」は false にする。
/// ゲームが始まっていない時などの使い方の間違いだけがエラーとして残るよ。
fn rejected_as_false(result: Result<bool, GameError>) -> Result<bool, GameError> {
    match result {
        Err(e @ (GameError::GestureInProgress | GameError::CardNotMovable(_) | GameError::IllegalMove { .. })) => {
            info!("Input rejected: {}", e);
            Ok(false)
        }
        other => other,
    }
}

fn card_from_indices(suit: u8, rank: u8) -> Option<Card> {
    let card = Card::from_indices(suit, rank);
    if card.is_none() {
        warn!("Unknown card: suit={} rank={}", suit, rank);
    }
    card
}
