// src/system.rs

use crate::components::game_state::GameState;

/// System（システム）トレイトだよ！
///
/// システムは、ゲームのロジック（ルールや振る舞い）を実行する役割を持つんだ。
/// `run` は盤面 (`GameState`) を読んで、必要なら書き換える。
/// 例えば勝利判定システムは、全部のカードが組札に乗っていたら
/// `status` を `Won` にするよ！🏆
pub trait System {
    fn run(&mut self, state: &mut GameState);
}
