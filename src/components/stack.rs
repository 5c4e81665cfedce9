// src/components/stack.rs

use serde::{Serialize, Deserialize};
use crate::components::card::Card;

/// 場札の列の数
pub const TABLEAU_COUNT: usize = 7;
/// 組札の数
pub const FOUNDATION_COUNT: usize = 4;

/// カードが存在する場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
/// Serialize, Deserialize も付けて JS とやり取りできるようにしてある！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock) だよ。裏向きで、クリックすると 1 枚めくれる。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。一番上だけ動かせる。
    Waste,
    /// 組札 (Foundation) だよ。4 つあるので番号 (0-3) を持つ。
    /// どのスートでも A から積み始められる。
    Foundation(u8),
    /// 場札 (Tableau) だよ。7 つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    /// 全ての場札の StackType を列番号順に返す。
    pub fn tableaus() -> impl Iterator<Item = StackType> {
        (0..TABLEAU_COUNT as u8).map(StackType::Tableau)
    }

    /// 全ての組札の StackType を順番に返す。
    pub fn foundations() -> impl Iterator<Item = StackType> {
        (0..FOUNDATION_COUNT as u8).map(StackType::Foundation)
    }

    /// 番号が範囲内かどうか。Tableau(7) とか Foundation(4) は存在しないよ！
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Stock | StackType::Waste => true,
            StackType::Foundation(i) => (i as usize) < FOUNDATION_COUNT,
            StackType::Tableau(i) => (i as usize) < TABLEAU_COUNT,
        }
    }
}

/// スタックに積まれた 1 枚分の情報。
/// カードそのものと、いま表向きかどうか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedCard {
    pub card: Card,
    pub is_face_up: bool,
}

/// カードの山 (スタック) だよ！
///
/// `cards` は下から順番に並んでいて、最後の要素が一番上 (top) のカード。
/// 一番上のカードは `last()` で取れるから O(1)！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub stack_type: StackType,
    cards: Vec<StackedCard>,
}

impl Stack {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード (表裏の情報つき)。空なら None。
    pub fn top(&self) -> Option<&StackedCard> {
        self.cards.last()
    }

    /// 一番上のカードそのもの。
    pub fn top_card(&self) -> Option<Card> {
        self.top().map(|stacked| stacked.card)
    }

    /// 一番上にカードを積む。
    pub fn push(&mut self, card: Card, is_face_up: bool) {
        self.cards.push(StackedCard { card, is_face_up });
    }

    /// 一番上のカードを取り出す。
    pub fn pop(&mut self) -> Option<StackedCard> {
        self.cards.pop()
    }

    /// 一番上のカードを表か裏に向ける。向きが変わったら true を返すよ。
    pub fn set_top_face_up(&mut self, face_up: bool) -> bool {
        match self.cards.last_mut() {
            Some(top) if top.is_face_up != face_up => {
                top.is_face_up = face_up;
                true
            }
            _ => false,
        }
    }

    /// 下から順番に全部のカードを見る。
    pub fn iter(&self) -> impl Iterator<Item = &StackedCard> {
        self.cards.iter()
    }

    /// カードがこのスタックの何番目にあるか (0 が一番下)。
    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|stacked| stacked.card == card)
    }

    /// スタックを空にして、中のカードを下から順に返す。
    pub fn take_all(&mut self) -> Vec<StackedCard> {
        std::mem::take(&mut self.cards)
    }
}
