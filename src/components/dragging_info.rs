// src/components/dragging_info.rs

use crate::components::card::Card;
use crate::components::stack::StackType;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
/// ドラッグ開始からドラッグ終了までの「保留中の移動」を表すんだ。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraggingInfo {
    /// 掴んでいるカード
    pub card: Card,
    /// ドラッグ開始前にカードがいたスタック。戻す時にここに帰る。
    pub origin: StackType,
    /// ドラッグ開始地点のマウス座標
    pub pointer_origin_x: f64,
    pub pointer_origin_y: f64,
    /// ドラッグ開始時からのマウスの移動量
    pub delta_x: f64,
    pub delta_y: f64,
    /// いま真下にある移動先の候補 (ハイライト表示用)
    pub hovered: Option<StackType>,
}

impl DraggingInfo {
    pub fn new(card: Card, origin: StackType, pointer_x: f64, pointer_y: f64) -> Self {
        Self {
            card,
            origin,
            pointer_origin_x: pointer_x,
            pointer_origin_y: pointer_y,
            delta_x: 0.0,
            delta_y: 0.0,
            hovered: None,
        }
    }
}

/// ドラッグ操作の状態。同時に保留できる移動は 1 つだけ！
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DraggingInfo),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn info(&self) -> Option<&DraggingInfo> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(info) => Some(info),
        }
    }
}
