// src/error.rs
//! ゲームで起こりうるエラーをまとめた型だよ。

use thiserror::Error;
use crate::components::{Card, StackType};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// ルール上置けない場所にカードを置こうとした。ドラッグならカードを元に戻すだけ。
    #[error("illegal move: {card} cannot be placed on {target:?}")]
    IllegalMove { card: Card, target: StackType },

    /// 盤面 (ボードのサイズ) を決める前にゲームを始めようとした。
    #[error("game board is not set: call set_game_board() before start_game()")]
    UninitializedBoard,

    #[error("invalid board size: {width}x{height}")]
    InvalidBoardSize { width: f64, height: f64 },

    /// 一番上の表向きカード (か捨て札の一番上) じゃないカードを掴もうとした。
    #[error("card {0} cannot be moved")]
    CardNotMovable(Card),

    #[error("no game in progress")]
    GameNotStarted,

    /// ドラッグ中に別のドラッグを始めようとした。
    #[error("another card is already being dragged")]
    GestureInProgress,
}
