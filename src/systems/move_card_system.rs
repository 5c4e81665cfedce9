// src/systems/move_card_system.rs

use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::error::GameError;
use crate::logic::rules;
use crate::system::System;
use crate::systems::win_condition_system::WinConditionSystem;
use log::{debug, info};

/// 移動が成功した時に「何が起きたか」をまとめたもの。
/// 描画側はこれを見てカードを動かしたり裏返したりするよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub card: Card,
    pub from: StackType,
    pub to: StackType,
    /// 移動先スタックの中での位置 (0 が一番下)
    pub index: usize,
    /// 移動元の場札で、新しく表になったカード
    pub flipped: Option<Card>,
    /// この移動で勝利したか
    pub won: bool,
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// ルール上置けるかを `rules::can_place` で確認して、置けるなら盤面を更新する。
/// 置けない時は盤面に一切触らずに `GameError::IllegalMove` を返すよ。
#[derive(Default, Debug, Clone, Copy)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn commit(&self, state: &mut GameState, card: Card, target: StackType) -> Result<MoveOutcome, GameError> {
        if !rules::can_place(state, card, target) {
            debug!("MoveCardSystem: {} -> {:?} rejected", card, target);
            return Err(GameError::IllegalMove { card, target });
        }
        // can_place が通った時点で掴めるカードなのは確定してる
        let from = state.movable_origin(card).ok_or(GameError::CardNotMovable(card))?;

        // --- 1. 移動元から取り出す ---
        let source = state.stack_mut(from).ok_or(GameError::CardNotMovable(card))?;
        source.pop();

        // --- 2. 場札なら、新しく一番上になったカードを表にする ---
        let flipped = match from {
            StackType::Tableau(_) => {
                if source.set_top_face_up(true) {
                    source.top_card()
                } else {
                    None
                }
            }
            _ => None,
        };

        // --- 3. 移動先に積む ---
        let destination = state.stack_mut(target).ok_or(GameError::IllegalMove { card, target })?;
        destination.push(card, true);
        let index = destination.len() - 1;
        info!("MoveCardSystem: {} moved {:?} -> {:?}", card, from, target);

        // --- 4. 組札に置いたら勝利判定！🏆 ---
        let won = if matches!(target, StackType::Foundation(_)) {
            WinConditionSystem.run(state);
            state.status == GameStatus::Won
        } else {
            false
        };

        Ok(MoveOutcome { card, from, to: target, index, flipped, won })
    }
}

/// `MoveCardSystem` を使わずに呼べる版。
pub fn commit(state: &mut GameState, card: Card, target: StackType) -> Result<MoveOutcome, GameError> {
    MoveCardSystem.commit(state, card, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn legal_move_updates_sizes_and_flips_exposed_card() {
        let mut state = GameState::empty();
        let hidden = Card::new(Suit::Club, Rank::Two);
        let seven_of_spades = Card::new(Suit::Spade, Rank::Seven);
        let six_of_hearts = Card::new(Suit::Heart, Rank::Six);

        state.tableau[0].push(hidden, false);
        state.tableau[0].push(six_of_hearts, true);
        state.tableau[1].push(seven_of_spades, true);

        let outcome = commit(&mut state, six_of_hearts, StackType::Tableau(1)).unwrap();

        assert_eq!(state.tableau[0].len(), 1, "移動元が 1 枚減る");
        assert_eq!(state.tableau[1].len(), 2, "移動先が 1 枚増える");
        assert_eq!(state.tableau[1].top_card(), Some(six_of_hearts));
        assert!(state.tableau[0].top().unwrap().is_face_up, "下のカードが表になる");
        assert_eq!(outcome.flipped, Some(hidden));
        assert_eq!(outcome.from, StackType::Tableau(0));
        assert_eq!(outcome.to, StackType::Tableau(1));
        assert_eq!(outcome.index, 1);
        assert!(!outcome.won);
    }

    #[test]
    fn illegal_move_leaves_state_untouched() {
        let mut state = GameState::empty();
        let five_of_clubs = Card::new(Suit::Club, Rank::Five);
        state.tableau[0].push(five_of_clubs, true);
        state.tableau[1].push(Card::new(Suit::Spade, Rank::Six), true);
        let before = state.clone();

        let result = commit(&mut state, five_of_clubs, StackType::Tableau(1));
        assert_eq!(
            result,
            Err(GameError::IllegalMove { card: five_of_clubs, target: StackType::Tableau(1) })
        );
        assert_eq!(state, before, "ルール違反の移動では盤面は変わらない");
    }

    #[test]
    fn move_from_waste_to_foundation() {
        let mut state = GameState::empty();
        let ace = Card::new(Suit::Diamond, Rank::Ace);
        state.waste.push(Card::new(Suit::Club, Rank::Nine), true);
        state.waste.push(ace, true);

        let outcome = commit(&mut state, ace, StackType::Foundation(2)).unwrap();
        assert_eq!(outcome.from, StackType::Waste);
        assert_eq!(outcome.flipped, None, "捨て札からの移動では裏返しは起きない");
        assert_eq!(state.foundations[2].top_card(), Some(ace));
        assert_eq!(state.waste.len(), 1);
    }

    #[test]
    fn last_card_to_foundation_wins() {
        use crate::components::card::{ALL_RANKS, ALL_SUITS};

        let mut state = GameState::empty();
        let last = Card::new(Suit::Spade, Rank::King);
        for (i, suit) in ALL_SUITS.iter().enumerate() {
            for rank in ALL_RANKS {
                let card = Card::new(*suit, rank);
                if card != last {
                    state.foundations[i].push(card, true);
                }
            }
        }
        state.tableau[5].push(last, true);
        assert_eq!(state.foundation_card_count(), 51);

        let outcome = commit(&mut state, last, StackType::Foundation(3)).unwrap();
        assert!(outcome.won);
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(outcome.flipped, None, "空になった列では何も裏返らない");
    }
}
