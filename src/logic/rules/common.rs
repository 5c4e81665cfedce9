//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
/// 場札 (Tableau) への移動ルール (色違い) で使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    /// スート番号 0 と 3 が黒、1 と 2 が赤のグループ。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Club | Suit::Spade => CardColor::Black,  // 0, 3
            Suit::Diamond | Suit::Heart => CardColor::Red, // 1, 2
        }
    }

    pub fn of(card: Card) -> Self {
        Self::from_suit(card.suit)
    }
}

/// 指定されたスタックの一番上のカードを取得するよ。
/// スタックが空、または番号が範囲外なら None。
pub(crate) fn get_top_card(state: &GameState, target_stack: StackType) -> Option<Card> {
    state.stack(target_stack).and_then(|stack| stack.top_card())
}
