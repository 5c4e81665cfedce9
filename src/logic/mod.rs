// src/logic/mod.rs
//! ゲームのルールや計算みたいな「純粋な」ロジックを置くモジュールだよ！

pub mod deck;
pub mod rules;
pub mod auto_move;
