//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use super::common::{get_top_card, CardColor};
use log::debug;

/// 場札の一番上のカード (`top`) の上に `card` を置けるか。
///
/// - 列が空 (`top` が None) なら置けるのは K だけ！🤴
/// - そうでなければ、ランクがちょうど 1 つ小さくて、色が違う必要があるよ。
pub fn can_place_on_tableau(card: Card, top: Option<Card>) -> bool {
    match top {
        None => card.rank == Rank::King,
        Some(top) => {
            let colors_different = CardColor::of(card) != CardColor::of(top);
            let rank_is_one_less = card.rank.next() == Some(top.rank);
            colors_different && rank_is_one_less
        }
    }
}

/// 指定されたカードが、特定の場札 (Tableau) の一番上に置けるかチェックする。
pub fn can_move_to_tableau(state: &GameState, card: Card, target_tableau_index: u8) -> bool {
    let target = StackType::Tableau(target_tableau_index);
    if !target.is_valid() {
        debug!("[Tableau Rule] Invalid tableau index: {}", target_tableau_index);
        return false;
    }
    let top = get_top_card(state, target);
    let result = can_place_on_tableau(card, top);
    debug!("[Tableau Rule] {} onto {:?} (top: {:?}) -> {}", card, target, top, result);
    result
}
