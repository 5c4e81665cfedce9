//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::game_state::GameState;

/// 山札をクリックした時に何が起きるか、の状態。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockPhase {
    /// 山札にカードがある → 1 枚めくって捨て札へ
    CanDraw,
    /// 山札が空で捨て札がある → 捨て札を裏返して山札に戻す
    CanRecycle,
    /// 両方空。普通に遊んでいる限りここには来ない。
    Exhausted,
}

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 盤面から今の山札の状態を判定する。
pub fn stock_phase(state: &GameState) -> StockPhase {
    let stock_is_empty = state.stock.is_empty();
    let waste_is_empty = state.waste.is_empty();
    if can_deal_from_stock(stock_is_empty) {
        StockPhase::CanDraw
    } else if can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
        StockPhase::CanRecycle
    } else {
        StockPhase::Exhausted
    }
}
