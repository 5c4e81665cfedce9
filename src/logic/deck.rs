// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use itertools::iproduct;
use log::debug;
use rand::{thread_rng, Rng};

/// デッキの枚数
pub const DECK_SIZE: usize = 52;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スートごとに A から K まで順番に並んだ状態で返す。
/// シャッフルは `shuffle_deck` でやってね！
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(suit, rank))
        .collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// 残っているカードからランダムに 1 枚選んで抜き出す、を繰り返して
/// 新しい並びを作る。どの並びも同じ確率で出るよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: Vec<Card>, rng: &mut R) -> Vec<Card> {
    let mut remaining = deck;
    let mut shuffled = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let index = rng.gen_range(0..remaining.len());
        shuffled.push(remaining.remove(index));
    }
    shuffled
}

/// 52枚を作ってシャッフルしたデッキを返す。最後の要素がデッキの一番上！
pub fn build_shuffled_deck() -> Vec<Card> {
    build_shuffled_deck_with_rng(&mut thread_rng())
}

/// 乱数生成器を指定できる版。シード付きの `StdRng` を渡せば毎回同じ配り方になるよ。
pub fn build_shuffled_deck_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let deck = shuffle_deck(create_standard_deck(), rng);
    debug!("Built shuffled deck, top card: {:?}", deck.last());
    deck
}
