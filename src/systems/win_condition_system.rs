// src/systems/win_condition_system.rs
use crate::components::game_state::{GameState, GameStatus};
use crate::logic::rules::check_win_condition;
use crate::system::System;
use log::info;

/// 全部のカードが組札に乗っているか。
pub fn is_won(state: &GameState) -> bool {
    check_win_condition(state.foundation_card_count())
}

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 勝利条件を満たしていれば GameState の status を `Won` にする。
#[derive(Default, Debug, Clone, Copy)]
pub struct WinConditionSystem;

impl System for WinConditionSystem {
    fn run(&mut self, state: &mut GameState) {
        if state.status != GameStatus::Playing {
            return;
        }
        if is_won(state) {
            info!("WinConditionSystem: 勝利条件達成！🏆");
            state.status = GameStatus::Won;
        }
    }
}
