// src/components/game_state.rs

use serde::{Serialize, Deserialize};
use crate::components::card::Card;
use crate::components::stack::{Stack, StackType, FOUNDATION_COUNT, TABLEAU_COUNT};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 全部のカードが組札に乗った！勝利！🏆
    Won,
}

/// 盤面の全部のスタックを持つ構造体だよ！
///
/// 山札 1 つ、捨て札 1 つ、組札 4 つ、場札 7 列。
/// 配った後はいつでも、全スタックのカードを合わせるとちょうど 52 枚で、
/// 重複も抜けもない。この約束を守るために、カードを動かすのは
/// `systems` の中の関数だけにしてあるよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub stock: Stack,
    pub waste: Stack,
    pub foundations: [Stack; FOUNDATION_COUNT],
    pub tableau: [Stack; TABLEAU_COUNT],
    pub status: GameStatus,
}

impl GameState {
    /// 全部のスタックが空の盤面を作る。配るのは `deal_system` の仕事！
    pub fn empty() -> Self {
        Self {
            stock: Stack::new(StackType::Stock),
            waste: Stack::new(StackType::Waste),
            foundations: std::array::from_fn(|i| Stack::new(StackType::Foundation(i as u8))),
            tableau: std::array::from_fn(|i| Stack::new(StackType::Tableau(i as u8))),
            status: GameStatus::Playing,
        }
    }

    /// StackType から対応するスタックを取る。番号が範囲外なら None。
    pub fn stack(&self, stack_type: StackType) -> Option<&Stack> {
        match stack_type {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(i) => self.foundations.get(i as usize),
            StackType::Tableau(i) => self.tableau.get(i as usize),
        }
    }

    pub fn stack_mut(&mut self, stack_type: StackType) -> Option<&mut Stack> {
        match stack_type {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Tableau(i) => self.tableau.get_mut(i as usize),
        }
    }

    /// 全スタックを 山札 → 捨て札 → 組札 → 場札 の順に返す。
    pub fn stacks(&self) -> impl Iterator<Item = &Stack> {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.tableau.iter())
    }

    /// 盤面にあるカードの総数。配った後は常に 52 のはず。
    pub fn card_count(&self) -> usize {
        self.stacks().map(Stack::len).sum()
    }

    /// 組札に乗っているカードの合計枚数。
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Stack::len).sum()
    }

    /// カードがどのスタックの何番目にあるかを探す。
    pub fn locate(&self, card: Card) -> Option<(StackType, usize)> {
        self.stacks()
            .find_map(|stack| stack.position_of(card).map(|pos| (stack.stack_type, pos)))
    }

    /// このカードをドラッグで動かせるなら、今いるスタックを返す。
    ///
    /// 動かせるのは「捨て札の一番上」か「場札の一番上の表向きカード」だけ！
    /// 組札や山札のカードは掴めないよ。
    pub fn movable_origin(&self, card: Card) -> Option<StackType> {
        if self.waste.top_card() == Some(card) {
            return Some(StackType::Waste);
        }
        self.tableau
            .iter()
            .find(|column| column.top().map_or(false, |top| top.card == card && top.is_face_up))
            .map(|column| column.stack_type)
    }
}
