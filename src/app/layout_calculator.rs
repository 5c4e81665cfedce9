// src/app/layout_calculator.rs
//! Calculates card positions on the board and resolves drop targets under a dragged card.
//!
//! 座標は全部ボードの左上を原点にした値 (px) だよ。

use serde::{Deserialize, Serialize};
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::GameState;
use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::layout::{
    BOARD_HEIGHT_RATIO, BOARD_MARGIN_BOTTOM_RATIO, CARDS_PER_BOARD_WIDTH, CARD_HEIGHT_RATIO,
    FOUNDATION_FIRST_GRID_COLUMN, GRID_COLUMNS, SETTLE_ANIMATION_MS, STOCK_GRID_COLUMN,
    TABLEAU_CARD_STEP_RATIO, TABLEAU_Y_RATIO, TOP_ROW_Y_RATIO, WASTE_GRID_COLUMN,
};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 画面上の長方形 (カードやスタックの置き場所)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// 2 つの長方形が重なっているか。
    ///
    /// 横方向はカードの左半分だけを見るよ。隣の列のカードに少しかかっただけで
    /// 反応しないようにするため。
    pub fn overlaps(&self, other: &Rect) -> bool {
        let horizontal = |r: &Rect| (r.x, r.x + r.width / 2.0);
        let vertical = |r: &Rect| (r.y, r.y + r.height);
        spans_overlap(horizontal(self), horizontal(other)) && spans_overlap(vertical(self), vertical(other))
    }
}

// 始点が小さい方の終点が、もう片方の始点を越えていれば重なり。始点が同じでも重なり。
fn spans_overlap(a: (f64, f64), b: (f64, f64)) -> bool {
    let (first, second) = if a.0 < b.0 { (a, b) } else { (b, a) };
    first.1 > second.0 || first.0 == second.0
}

/// ボードのサイズから計算したレイアウト。
///
/// ボードの幅だけでカードの大きさもスタックの位置も全部決まる。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub board_width: f64,
    /// 描画側が設定するべきボードの高さ (カード 5.5 枚分)
    pub board_height: f64,
    pub margin_bottom: f64,
    pub card_width: f64,
    pub card_height: f64,
    pub grid_column_width: f64,
    /// グリッドの 1 マスの中でカードを中央に置くための X オフセット
    pub grid_center_delta: f64,
    pub tableau_card_step: f64,
    pub settle_animation_ms: u32,
}

/// JS 側に渡すためのレイアウトのまとめ。各スタックの左上の座標つき。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub layout: BoardLayout,
    pub stack_origins: Vec<(StackType, Position)>,
}

impl BoardLayout {
    /// ボードのサイズからレイアウトを作る。
    ///
    /// 高さは受け取るけど計算には使わない (ボードの高さはカードの大きさから決まる)。
    /// 幅が 0 以下や NaN ならエラー。
    pub fn new(width: f64, height: f64) -> Result<Self, GameError> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height < 0.0 {
            return Err(GameError::InvalidBoardSize { width, height });
        }
        let card_width = width / CARDS_PER_BOARD_WIDTH;
        let card_height = card_width * CARD_HEIGHT_RATIO;
        let grid_column_width = width / GRID_COLUMNS;
        Ok(Self {
            board_width: width,
            board_height: card_height * BOARD_HEIGHT_RATIO,
            margin_bottom: card_height * BOARD_MARGIN_BOTTOM_RATIO,
            card_width,
            card_height,
            grid_column_width,
            grid_center_delta: grid_column_width / 2.0 - card_width / 2.0,
            tableau_card_step: card_height * TABLEAU_CARD_STEP_RATIO,
            settle_animation_ms: SETTLE_ANIMATION_MS,
        })
    }

    fn grid_x(&self, grid_column: usize) -> f64 {
        grid_column as f64 * self.grid_column_width + self.grid_center_delta
    }

    /// スタックの置き場所 (一番下のカード) の左上の座標。
    pub fn stack_origin(&self, stack_type: StackType) -> Position {
        let top_row_y = self.card_height * TOP_ROW_Y_RATIO;
        match stack_type {
            StackType::Stock => Position { x: self.grid_x(STOCK_GRID_COLUMN), y: top_row_y },
            StackType::Waste => Position { x: self.grid_x(WASTE_GRID_COLUMN), y: top_row_y },
            StackType::Foundation(index) => Position {
                x: self.grid_x(FOUNDATION_FIRST_GRID_COLUMN + index as usize),
                y: top_row_y,
            },
            StackType::Tableau(index) => Position {
                x: self.grid_x(index as usize),
                y: self.card_height * TABLEAU_Y_RATIO,
            },
        }
    }

    /// スタックの `index` 番目 (0 が一番下) のカードの左上の座標。
    /// 場札だけは 1 枚ごとに少しずつ下にずらして重ねるよ。
    pub fn card_position(&self, stack_type: StackType, index: usize) -> Position {
        let origin = self.stack_origin(stack_type);
        match stack_type {
            StackType::Tableau(_) => Position { x: origin.x, y: origin.y + index as f64 * self.tableau_card_step },
            _ => origin,
        }
    }

    pub fn card_rect(&self, stack_type: StackType, index: usize) -> Rect {
        let pos = self.card_position(stack_type, index);
        Rect { x: pos.x, y: pos.y, width: self.card_width, height: self.card_height }
    }

    /// X 座標がグリッドの何列目か。ボードの外なら None。
    pub fn grid_column_at(&self, x: f64) -> Option<usize> {
        if !x.is_finite() || x < 0.0 || x >= self.board_width {
            return None;
        }
        let column = (x / self.grid_column_width).floor() as usize;
        Some(column.min(TABLEAU_COUNT - 1))
    }

    /// ドラッグ中のカードの今の長方形。元の位置からマウスの移動量だけずらしたもの。
    pub fn dragged_rect(&self, state: &GameState, dragging: &DraggingInfo) -> Option<Rect> {
        let index = state.stack(dragging.origin)?.position_of(dragging.card)?;
        Some(self.card_rect(dragging.origin, index).translated(dragging.delta_x, dragging.delta_y))
    }

    /// ドラッグ中のカードの下にある移動先の候補を探すよ！🔍
    ///
    /// 1. マウスの X 座標でグリッドの列を決める。
    /// 2. その列の場札が空ならそのまま候補。カードがあるなら一番上のカードと重なっていれば候補。
    /// 3. 列が組札の下 (3〜6 列目) で組札の置き場所と重なっていれば、組札が優先。
    ///
    /// ルール上置けるかどうかはここでは見ない。それは `rules::can_place` の仕事！
    pub fn resolve_target(&self, state: &GameState, dragging: &DraggingInfo) -> Option<StackType> {
        let pointer_x = dragging.pointer_origin_x + dragging.delta_x;
        let column = self.grid_column_at(pointer_x)?;
        let dragged = self.dragged_rect(state, dragging)?;

        let mut target = None;
        let tableau = StackType::Tableau(column as u8);
        if let Some(stack) = state.stack(tableau) {
            match stack.top() {
                None => target = Some(tableau),
                Some(top) => {
                    let top_rect = self.card_rect(tableau, stack.len() - 1);
                    if top.card != dragging.card && dragged.overlaps(&top_rect) {
                        target = Some(tableau);
                    }
                }
            }
        }

        if column >= FOUNDATION_FIRST_GRID_COLUMN {
            let foundation_index = column - FOUNDATION_FIRST_GRID_COLUMN;
            if foundation_index < FOUNDATION_COUNT {
                let foundation = StackType::Foundation(foundation_index as u8);
                if dragged.overlaps(&self.card_rect(foundation, 0)) {
                    target = Some(foundation);
                }
            }
        }
        target
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        let stacks = [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain(StackType::foundations())
            .chain(StackType::tableaus());
        LayoutSnapshot {
            layout: *self,
            stack_origins: stacks.map(|s| (s, self.stack_origin(s))).collect(),
        }
    }
}
