// src/components/mod.rs

// ゲームの「データ」を表す型たちをまとめるモジュールだよ！
pub mod card;
pub mod stack;
pub mod game_state;
pub mod dragging_info;

// よく使う型はここから直接 use できるようにしておく！
pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use stack::{Stack, StackType, StackedCard, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use game_state::{GameState, GameStatus};
pub use dragging_info::{DragState, DraggingInfo};
