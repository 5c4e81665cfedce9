// src/config/mod.rs
//! 設定まわり。レイアウトの定数と、ゲーム開始時の設定。

pub mod layout;

use serde::{Deserialize, Serialize};

/// ゲームを作る時の設定。
///
/// `seed` を指定すると毎回同じ配り方になるよ (デバッグやテスト用)。
/// None なら OS の乱数で毎回違う配り方。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}
