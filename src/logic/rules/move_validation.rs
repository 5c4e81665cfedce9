// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::rules::{foundation, tableau};
use log::debug;

/// 指定されたカードを特定のスタックに置けるか検証する (副作用なし！)。
///
/// 置き場所のルールに加えて、そもそもそのカードを掴めるか
/// (捨て札の一番上 or 場札の一番上の表向きカード) もここで見るよ。
/// 今いるスタックにもう一度置くのはダメ。
pub fn can_place(state: &GameState, card: Card, target_stack: StackType) -> bool {
    let origin = match state.movable_origin(card) {
        Some(origin) => origin,
        None => {
            debug!("[Rules Validation] {} is not movable.", card);
            return false;
        }
    };
    if origin == target_stack {
        debug!("[Rules Validation] {} is already on {:?}.", card, target_stack);
        return false;
    }

    match target_stack {
        StackType::Tableau(target_index) => tableau::can_move_to_tableau(state, card, target_index),
        StackType::Foundation(target_index) => foundation::can_move_to_foundation(state, card, target_index),
        StackType::Stock | StackType::Waste => {
            // Stock, Waste への直接移動は許可されない
            debug!("[Rules Validation] Moving to {:?} is not allowed.", target_stack);
            false
        }
    }
}
