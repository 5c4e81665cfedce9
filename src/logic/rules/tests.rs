// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;

// --- テスト用ヘルパー関数 ---
fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// 捨て札の一番上に `card` を置いた盤面を作る。掴めるカードにするためだよ。
fn state_with_waste_top(card: Card) -> GameState {
    let mut state = GameState::empty();
    state.waste.push(card, true);
    state
}

// --- 各ルール関数のテスト ---

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
    println!("CardColor テスト、成功！🎉");
}

#[test]
fn test_tableau_truth_table() {
    // 空の列には K だけ
    for suit in crate::components::ALL_SUITS {
        assert!(can_place_on_tableau(card(suit, Rank::King), None), "空の列に K は置けるはず");
    }
    assert!(!can_place_on_tableau(card(Suit::Heart, Rank::Queen), None), "空の列に Q は置けないはず");

    // 7 (黒) の上に 6 (赤) → OK
    assert!(can_place_on_tableau(card(Suit::Heart, Rank::Six), Some(card(Suit::Spade, Rank::Seven))));
    // 6 (黒) の上に 5 (黒) → 同色なのでダメ
    assert!(!can_place_on_tableau(card(Suit::Club, Rank::Five), Some(card(Suit::Spade, Rank::Six))));
    // 同じ色グループ (赤同士)
    assert!(!can_place_on_tableau(card(Suit::Diamond, Rank::Five), Some(card(Suit::Heart, Rank::Six))));
    // ランク違い
    assert!(!can_place_on_tableau(card(Suit::Heart, Rank::Four), Some(card(Suit::Spade, Rank::Six))));
    assert!(!can_place_on_tableau(card(Suit::Heart, Rank::Seven), Some(card(Suit::Spade, Rank::Six))));
    // A の上には何も置けない
    assert!(!can_place_on_tableau(card(Suit::Heart, Rank::King), Some(card(Suit::Spade, Rank::Ace))));
    println!("Tableau ルールテスト、成功！🎉");
}

#[test]
fn test_foundation_truth_table() {
    // 空の組札には A だけ (スートは問わない)
    for suit in crate::components::ALL_SUITS {
        assert!(can_place_on_foundation(card(suit, Rank::Ace), None));
    }
    assert!(!can_place_on_foundation(card(Suit::Heart, Rank::Two), None));

    // 同じスートで 1 つ上 → OK
    assert!(can_place_on_foundation(card(Suit::Heart, Rank::Two), Some(card(Suit::Heart, Rank::Ace))));
    assert!(can_place_on_foundation(card(Suit::Club, Rank::King), Some(card(Suit::Club, Rank::Queen))));
    // スート違い
    assert!(!can_place_on_foundation(card(Suit::Heart, Rank::Two), Some(card(Suit::Diamond, Rank::Ace))));
    // ランク飛ばし / 同ランク
    assert!(!can_place_on_foundation(card(Suit::Heart, Rank::Three), Some(card(Suit::Heart, Rank::Ace))));
    assert!(!can_place_on_foundation(card(Suit::Heart, Rank::Ace), Some(card(Suit::Heart, Rank::Ace))));
    println!("Foundation ルールテスト、成功！🎉");
}

#[test]
fn test_stock_waste_rules() {
    // ストックがある場合
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    // ストックが空の場合
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");

    let mut state = GameState::empty();
    assert_eq!(stock_phase(&state), StockPhase::Exhausted);
    state.waste.push(card(Suit::Club, Rank::Two), true);
    assert_eq!(stock_phase(&state), StockPhase::CanRecycle);
    state.stock.push(card(Suit::Club, Rank::Three), false);
    assert_eq!(stock_phase(&state), StockPhase::CanDraw);
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(52), "カードが52枚あればクリアなはず！🏆");
    assert!(!check_win_condition(51), "カードが51枚ではクリアじゃないはず！🙅");
    assert!(!check_win_condition(0), "カードが0枚ではクリアじゃないはず！🙅");
}

// --- GameState を使うテスト ---

#[test]
fn test_can_move_to_tableau_state() {
    let mut state = GameState::empty();
    state.tableau[2].push(card(Suit::Heart, Rank::Queen), true);

    assert!(can_move_to_tableau(&state, card(Suit::Spade, Rank::King), 0), "空の Tableau 0 に K♠ は置けるはず");
    assert!(!can_move_to_tableau(&state, card(Suit::Heart, Rank::Queen), 1), "空の Tableau 1 に Q❤️ は置けないはず");
    assert!(can_move_to_tableau(&state, card(Suit::Spade, Rank::Jack), 2), "Q❤️ に J♠ は置けるはず");
    assert!(!can_move_to_tableau(&state, card(Suit::Diamond, Rank::Jack), 2), "Q❤️ に J♦️ は置けないはず (同色)");
    assert!(!can_move_to_tableau(&state, card(Suit::Spade, Rank::King), 7), "Tableau 7 は存在しない");
}

#[test]
fn test_can_move_to_foundation_state() {
    let mut state = GameState::empty();
    state.foundations[1].push(card(Suit::Diamond, Rank::Ace), true);

    assert!(can_move_to_foundation(&state, card(Suit::Spade, Rank::Ace), 0));
    assert!(can_move_to_foundation(&state, card(Suit::Diamond, Rank::Two), 1));
    assert!(!can_move_to_foundation(&state, card(Suit::Heart, Rank::Two), 1), "スート違い");
    assert!(!can_move_to_foundation(&state, card(Suit::Spade, Rank::Ace), 4), "Foundation 4 は存在しない");
}

#[test]
fn test_can_place_checks_source_and_destination() {
    let king = card(Suit::Club, Rank::King);
    let state = state_with_waste_top(king);

    assert!(can_place(&state, king, StackType::Tableau(0)));
    assert!(!can_place(&state, king, StackType::Foundation(0)));
    assert!(!can_place(&state, king, StackType::Stock), "山札には置けない");
    assert!(!can_place(&state, king, StackType::Waste), "今いる捨て札には置けない");

    // 掴めないカード (盤面に無い) は常にダメ
    assert!(!can_place(&state, card(Suit::Heart, Rank::King), StackType::Tableau(0)));
}

#[test]
fn test_can_place_rejects_face_down_card() {
    let mut state = GameState::empty();
    let ace = card(Suit::Heart, Rank::Ace);
    state.tableau[4].push(ace, false);
    assert!(!can_place(&state, ace, StackType::Foundation(0)), "裏向きの A は動かせない");

    state.tableau[4].set_top_face_up(true);
    assert!(can_place(&state, ace, StackType::Foundation(0)));
}
