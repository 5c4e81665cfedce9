// src/components/card.rs

// serde を使う宣言！カード情報を JS 側に JSON で渡す時に使うよ！
use serde::{Serialize, Deserialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 並び順はカード画像 (スプライトシート) の行の順番と同じにしてあるよ。
/// 0: Club, 1: Diamond, 2: Heart, 3: Spade
/// なので 0 と 3 が黒、1 と 2 が赤のグループになるんだ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club = 0,    // ♣️
    Diamond = 1, // ♦️
    Heart = 2,   // ❤️
    Spade = 3,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// A が 0、K が 12。スプライトシートの列の番号とそのまま対応してるよ！
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) もできるようにしておこう！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0, // A
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (10 扱い)
    Queen,   // Q (11 扱い)
    King,    // K (12 扱い)
}

/// 全スートの配列。デッキを作るときにループで使うよ！
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// 全ランクの配列。A から K まで！
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

impl Suit {
    /// 0..=3 の番号からスートを作る。範囲外なら None！
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SUITS.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Rank {
    /// 0..=12 の番号からランクを作る。範囲外なら None！
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_RANKS.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// ひとつ上のランク。K の次は無いので None。
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

/// カードそのものを表す値だよ！🃏
///
/// スートとランクの組み合わせだけがカードの「正体」。
/// 表向き/裏向きはカードが置かれている場所の状態なので、ここには持たせないよ
/// (`StackedCard` を見てね)。一度作ったら変わらないので Copy にしてある！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// JS から来る数字 (suit, rank) からカードを作る。どちらかが範囲外なら None。
    pub fn from_indices(suit: u8, rank: u8) -> Option<Self> {
        Some(Self::new(Suit::from_index(suit)?, Rank::from_index(rank)?))
    }
}

// カード画像の DOM id と同じ "s{suit}r{rank}" 形式で表示するよ。ログが読みやすくなる！
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}r{}", self.suit.index(), self.rank.index())
    }
}
