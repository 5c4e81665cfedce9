// src/systems/stock_system.rs
//! Handles logic related to clicking the Stock pile (dealing to Waste, resetting Waste).

use serde::{Deserialize, Serialize};
use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::logic::rules::stock_waste::{stock_phase, StockPhase};
use log::{info, warn};

/// 山札をクリックした結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAction {
    /// 1 枚めくって捨て札に置いた
    Drew(Card),
    /// 捨て札を全部山札に戻した (枚数)
    Recycled(usize),
    /// 山札も捨て札も空で、何もしなかった
    Nothing,
}

/// 山札をクリックした時の処理。カードがあれば 1 枚めくり、無ければ捨て札を戻す。
pub fn draw_one(state: &mut GameState) -> StockAction {
    match stock_phase(state) {
        StockPhase::CanDraw => deal_one_card_from_stock(state)
            .map_or(StockAction::Nothing, StockAction::Drew),
        StockPhase::CanRecycle => StockAction::Recycled(reset_waste_to_stock(state)),
        StockPhase::Exhausted => {
            warn!("Stock and Waste are both empty. Nothing to draw.");
            StockAction::Nothing
        }
    }
}

/// Deals one card from the Stock pile to the Waste pile, face up.
pub fn deal_one_card_from_stock(state: &mut GameState) -> Option<Card> {
    let top = state.stock.pop()?;
    state.waste.push(top.card, true);
    info!("Card {} moved from Stock to Waste.", top.card);
    Some(top.card)
}

/// Moves every Waste card back onto the Stock, face down.
///
/// Waste の一番上から順に取り出して積むので、山札の順番は最初にめくる前と同じに戻るよ。
/// 戻した枚数を返す。
pub fn reset_waste_to_stock(state: &mut GameState) -> usize {
    let mut count = 0;
    while let Some(stacked) = state.waste.pop() {
        state.stock.push(stacked.card, false);
        count += 1;
    }
    info!("Waste pile reset to Stock ({} cards).", count);
    count
}
