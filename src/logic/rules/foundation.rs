//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use super::common::get_top_card;
use log::debug;

/// 組札の一番上のカード (`top`) の上に `card` を置けるか。
///
/// 空の組札にはどのスートの A でも置ける。
/// カードがあるなら、同じスートで、ランクがちょうど 1 つ大きいカードだけ！
pub fn can_place_on_foundation(card: Card, top: Option<Card>) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.rank.next() == Some(card.rank),
    }
}

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
pub fn can_move_to_foundation(state: &GameState, card: Card, target_foundation_index: u8) -> bool {
    let target = StackType::Foundation(target_foundation_index);
    if !target.is_valid() {
        debug!("[Foundation Rule] Invalid foundation index: {}", target_foundation_index);
        return false;
    }
    let top = get_top_card(state, target);
    let result = can_place_on_foundation(card, top);
    debug!("[Foundation Rule] {} onto {:?} (top: {:?}) -> {}", card, target, top, result);
    result
}
