// src/systems/mod.rs
//! 盤面 (GameState) を書き換えるシステムたち！

pub mod deal_system;
pub mod stock_system;
pub mod move_card_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{commit, MoveCardSystem, MoveOutcome};
pub use stock_system::{draw_one, StockAction};
pub use win_condition_system::{is_won, WinConditionSystem};
