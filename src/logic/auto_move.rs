// src/logic/auto_move.rs
//! カードを自動で組札に移動させるロジックだよ！ (ダブルクリック用)

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::rules;
use log::debug;

/// 指定されたカードを置ける組札を探す。
///
/// 組札 0 から順番に見て、最初に置ける場所を返すよ。
/// 動かせないカード (埋もれている、裏向き、山札にある) なら None。
pub fn find_automatic_foundation_move(state: &GameState, card: Card) -> Option<StackType> {
    let target = StackType::foundations().find(|&foundation| rules::can_place(state, card, foundation));
    match target {
        Some(foundation) => debug!("[AutoMove] {} -> {:?}", card, foundation),
        None => debug!("[AutoMove] No suitable foundation for {}", card),
    }
    target
}
