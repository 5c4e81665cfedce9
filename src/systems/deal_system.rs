// src/systems/deal_system.rs

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::TABLEAU_COUNT;
use crate::logic::deck::build_shuffled_deck_with_rng;
use log::{debug, info};
use rand::Rng;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default, Debug, Clone, Copy)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// シャッフル済みのデッキを配って、新しい盤面を作るよ！🎉
    ///
    /// デッキの最後の要素が一番上。i 列目 (0 始まり) には上から i+1 枚を順番に積んで、
    /// 最後に積んだカードだけ表向きにする。
    /// 残り (52 - 28 = 24 枚) は全部裏向きのまま山札になるよ。
    pub fn deal(&self, mut deck: Vec<Card>) -> GameState {
        let mut state = GameState::empty();

        // --- 場札 (Tableau) への配置 ---
        for (tableau_index, column) in state.tableau.iter_mut().enumerate() {
            for _ in 0..=tableau_index {
                if let Some(card) = deck.pop() {
                    column.push(card, false);
                }
            }
            // その列の一番上のカードだけ表向きにするよ！👀
            column.set_top_face_up(true);
            debug!("Tableau({}) dealt with {} cards", tableau_index, column.len());
        }

        // --- 山札 (Stock) への配置 ---
        // 残りのカードは順番そのままで積む。最後の要素が一番上！
        for card in deck {
            state.stock.push(card, false);
        }

        info!(
            "🃏 Deal complete: {} cards on {} tableau columns, {} in stock",
            state.tableau.iter().map(|c| c.len()).sum::<usize>(),
            TABLEAU_COUNT,
            state.stock.len()
        );
        state
    }

    /// デッキを作ってシャッフルして配る、までを一気にやる。
    pub fn new_game<R: Rng + ?Sized>(&self, rng: &mut R) -> GameState {
        self.deal(build_shuffled_deck_with_rng(rng))
    }
}
