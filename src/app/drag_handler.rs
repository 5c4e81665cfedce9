// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).
//!
//! ドラッグは DragState だけを書き換える。盤面 (GameState) に触るのは
//! ドロップが確定した時の `resolve_drop` だけだよ。

use log::{info, warn};

use crate::components::card::Card;
use crate::components::dragging_info::{DragState, DraggingInfo};
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::error::GameError;
use crate::systems::move_card_system::{MoveCardSystem, MoveOutcome};

/// ドロップした結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// 移動が確定した
    Committed(MoveOutcome),
    /// 置けなかったので元のスタックに戻った (盤面は何も変わっていない)
    Reverted { card: Card, origin: StackType },
}

/// ドラッグ開始時の処理。
///
/// 掴めるのは Idle の時だけ、しかも動かせるカード (捨て札の一番上か、場札の一番上の表向き) だけ！
/// 成功したらカードが今いるスタックを返すよ。
pub fn handle_drag_start(
    drag: &mut DragState,
    state: &GameState,
    card: Card,
    start_x: f64,
    start_y: f64,
) -> Result<StackType, GameError> {
    if let DragState::Dragging(current) = drag {
        warn!("Drag start for {} ignored: {} is already being dragged", card, current.card);
        return Err(GameError::GestureInProgress);
    }
    let origin = state.movable_origin(card).ok_or_else(|| {
        warn!("Drag start for {} ignored: card is not movable", card);
        GameError::CardNotMovable(card)
    })?;

    *drag = DragState::Dragging(DraggingInfo::new(card, origin, start_x, start_y));
    info!("Started dragging {} from {:?}", card, origin);
    Ok(origin)
}

/// ドラッグ中の位置更新。ドラッグ開始地点からの移動量を記録する。
/// ドラッグしていなければ None。
pub fn update_dragged_position(drag: &mut DragState, mouse_x: f64, mouse_y: f64) -> Option<&mut DraggingInfo> {
    match drag {
        DragState::Dragging(info) => {
            info.delta_x = mouse_x - info.pointer_origin_x;
            info.delta_y = mouse_y - info.pointer_origin_y;
            Some(info)
        }
        DragState::Idle => None,
    }
}

/// ドラッグ終了時の処理。保留中の移動を取り出して Idle に戻す。
pub fn handle_drag_end(drag: &mut DragState) -> Option<DraggingInfo> {
    match std::mem::take(drag) {
        DragState::Dragging(info) => Some(info),
        DragState::Idle => None,
    }
}

/// 保留中の移動を確定させるか、元に戻すかを決める。
///
/// 移動先が無い、またはルール上置けない時は Reverted。その時 GameState はそのまま。
pub fn resolve_drop(
    mover: &MoveCardSystem,
    state: &mut GameState,
    info: &DraggingInfo,
    target: Option<StackType>,
) -> DropResult {
    let reverted = DropResult::Reverted { card: info.card, origin: info.origin };
    let Some(target) = target else {
        info!("Dropped {} outside of any stack. Reverting.", info.card);
        return reverted;
    };
    match mover.commit(state, info.card, target) {
        Ok(outcome) => DropResult::Committed(outcome),
        Err(e) => {
            info!("Drop rejected ({}). Reverting.", e);
            reverted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn state_with_waste_top(card: Card) -> GameState {
        let mut state = GameState::empty();
        state.waste.push(card, true);
        state
    }

    #[test]
    fn second_gesture_is_rejected() {
        let first = Card::new(Suit::Heart, Rank::Ace);
        let second = Card::new(Suit::Club, Rank::Five);
        let mut state = state_with_waste_top(first);
        state.tableau[0].push(second, true);
        let mut drag = DragState::Idle;

        assert_eq!(handle_drag_start(&mut drag, &state, first, 10.0, 10.0), Ok(StackType::Waste));
        assert_eq!(
            handle_drag_start(&mut drag, &state, second, 50.0, 50.0),
            Err(GameError::GestureInProgress)
        );
        assert_eq!(drag.info().map(|i| i.card), Some(first), "最初のドラッグはそのまま");
    }

    #[test]
    fn unmovable_card_cannot_be_dragged() {
        let card = Card::new(Suit::Spade, Rank::Two);
        let mut state = GameState::empty();
        state.stock.push(card, false);
        let mut drag = DragState::Idle;
        assert_eq!(handle_drag_start(&mut drag, &state, card, 0.0, 0.0), Err(GameError::CardNotMovable(card)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn update_tracks_delta_and_end_returns_to_idle() {
        let card = Card::new(Suit::Diamond, Rank::Ten);
        let state = state_with_waste_top(card);
        let mut drag = DragState::Idle;
        assert!(update_dragged_position(&mut drag, 1.0, 1.0).is_none());

        handle_drag_start(&mut drag, &state, card, 100.0, 40.0).unwrap();
        let info = update_dragged_position(&mut drag, 130.0, 25.0).unwrap();
        assert_eq!((info.delta_x, info.delta_y), (30.0, -15.0));

        let ended = handle_drag_end(&mut drag).unwrap();
        assert_eq!(ended.card, card);
        assert_eq!(drag, DragState::Idle);
        assert!(handle_drag_end(&mut drag).is_none());
    }

    #[test]
    fn illegal_drop_reverts_without_touching_state() {
        let card = Card::new(Suit::Heart, Rank::Five);
        let mut state = state_with_waste_top(card);
        state.tableau[2].push(Card::new(Suit::Diamond, Rank::Six), true); // 同じ赤なので置けない
        let before = state.clone();
        let info = DraggingInfo::new(card, StackType::Waste, 0.0, 0.0);

        let result = resolve_drop(&MoveCardSystem, &mut state, &info, Some(StackType::Tableau(2)));
        assert_eq!(result, DropResult::Reverted { card, origin: StackType::Waste });
        assert_eq!(state, before);

        let result = resolve_drop(&MoveCardSystem, &mut state, &info, None);
        assert_eq!(result, DropResult::Reverted { card, origin: StackType::Waste });
        assert_eq!(state, before);
    }

    #[test]
    fn legal_drop_commits() {
        let card = Card::new(Suit::Heart, Rank::Five);
        let mut state = state_with_waste_top(card);
        state.tableau[2].push(Card::new(Suit::Spade, Rank::Six), true);
        let info = DraggingInfo::new(card, StackType::Waste, 0.0, 0.0);

        match resolve_drop(&MoveCardSystem, &mut state, &info, Some(StackType::Tableau(2))) {
            DropResult::Committed(outcome) => {
                assert_eq!(outcome.to, StackType::Tableau(2));
                assert_eq!(outcome.index, 1);
            }
            other => panic!("expected commit, got {:?}", other),
        }
        assert!(state.waste.is_empty());
        assert_eq!(state.tableau[2].top_card(), Some(card));
    }
}
